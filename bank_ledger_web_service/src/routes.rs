//! The web service's routes

use crate::errors::handle_rejection;
use crate::handlers;
use crate::SharedLedger;
use bank_ledger_common::SearchRequest;
use std::convert::Infallible;
use warp::{Filter, Reply};

/// Request bodies are tiny; anything larger is rejected.
pub const BODY_LIMIT: u64 = 1024 * 16;

/// **All routes of the service, with rejections already turned into replies**
///
/// - GET  /api/accounts
/// - POST /api/accounts
/// - GET  /api/accounts/{account_number}
/// - POST /api/accounts/{account_number}/deposit
/// - POST /api/accounts/{account_number}/withdraw
/// - GET  /api/accounts/{account_number}/history
/// - POST /api/undo
/// - GET  /api/search?name=...
/// - GET  /api/stats
pub fn routes(
    ledger: SharedLedger,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let ledger_state = warp::any().map(move || ledger.clone());

    let all_accounts = warp::path!("api" / "accounts")
        .and(warp::get())
        .and(ledger_state.clone())
        .and_then(handlers::all_accounts);

    let create_account = warp::path!("api" / "accounts")
        .and(warp::post())
        .and(warp::body::content_length_limit(BODY_LIMIT))
        .and(warp::body::json())
        .and(ledger_state.clone())
        .and_then(handlers::create_account);

    let account = warp::path!("api" / "accounts" / String)
        .and(warp::get())
        .and(ledger_state.clone())
        .and_then(handlers::account);

    let deposit = warp::path!("api" / "accounts" / String / "deposit")
        .and(warp::post())
        .and(warp::body::content_length_limit(BODY_LIMIT))
        .and(warp::body::json())
        .and(ledger_state.clone())
        .and_then(handlers::deposit);

    let withdraw = warp::path!("api" / "accounts" / String / "withdraw")
        .and(warp::post())
        .and(warp::body::content_length_limit(BODY_LIMIT))
        .and(warp::body::json())
        .and(ledger_state.clone())
        .and_then(handlers::withdraw);

    let history = warp::path!("api" / "accounts" / String / "history")
        .and(warp::get())
        .and(ledger_state.clone())
        .and_then(handlers::history);

    let undo = warp::path!("api" / "undo")
        .and(warp::post())
        .and(ledger_state.clone())
        .and_then(handlers::undo);

    let search = warp::path!("api" / "search")
        .and(warp::get())
        .and(warp::query::<SearchRequest>())
        .and(ledger_state.clone())
        .and_then(handlers::search);

    let stats = warp::path!("api" / "stats")
        .and(warp::get())
        .and(ledger_state)
        .and_then(handlers::stats);

    all_accounts
        .or(create_account)
        .or(account)
        .or(deposit)
        .or(withdraw)
        .or(history)
        .or(undo)
        .or(search)
        .or(stats)
        .recover(handle_rejection)
}
