//! Handler functions

use crate::errors::{WebServiceLedgerError, WebServiceStringError};
use crate::SharedLedger;
use bank_ledger_common::errors::{LedgerError, OWNER_NAME_NOT_VALID_MSG};
use bank_ledger_common::tx::TxKind;
use bank_ledger_common::validation;
use bank_ledger_common::{
    AccountUpdateRequest, CreateAccountRequest, SearchRequest, UndoResponse,
    DEFAULT_DEPOSIT_NOTE, DEFAULT_WITHDRAW_NOTE,
};
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

/// **Basic input validation for an owner's name**
///
/// Checks for:
/// - An empty string.
fn is_valid_name(owner_name: &str) -> Result<(), Rejection> {
    match validation::is_valid_name(owner_name) {
        Some(msg) => {
            let ret_msg = format!(
                "{}: \"{}\". {}",
                OWNER_NAME_NOT_VALID_MSG, owner_name, msg
            );
            log::warn!("{}", ret_msg);
            Err(warp::reject::custom(WebServiceStringError(ret_msg)))
        }
        None => Ok(()),
    }
}

/// The `all_accounts` handler
///
/// Responds with all accounts, sorted by account number.
///
/// GET /api/accounts
pub async fn all_accounts(ledger: SharedLedger) -> Result<impl Reply, Infallible> {
    log::debug!("all_accounts");
    let ledger = ledger.lock().await;
    let response = warp::reply::json(&ledger.all_accounts());
    Ok(response)
}

/// The `create_account` handler
///
/// Responds with the new account.
///
/// POST /api/accounts
pub async fn create_account(
    request: CreateAccountRequest,
    ledger: SharedLedger,
) -> Result<impl Reply, Rejection> {
    log::debug!("create_account; request = {:?}", request);

    is_valid_name(&request.owner_name)?;

    let account = ledger.lock().await.create_account(
        request.owner_name.trim(),
        request.email.trim(),
        request.balance,
        request.account_type,
    );
    log::info!("opened {}", account.account_number);

    Ok(warp::reply::with_status(
        warp::reply::json(&account),
        StatusCode::CREATED,
    ))
}

/// The `account` handler
///
/// Responds with a single account.
///
/// GET /api/accounts/{account_number}
pub async fn account(
    account_number: String,
    ledger: SharedLedger,
) -> Result<impl Reply, Rejection> {
    log::debug!("account; account_number = {}", account_number);

    match ledger.lock().await.account(&account_number) {
        Some(account) => Ok(warp::reply::json(account)),
        None => Err(warp::reject::custom(WebServiceLedgerError(
            LedgerError::AccountNotFound(account_number),
        ))),
    }
}

/// The `deposit` handler
///
/// Responds with the updated account.
///
/// POST /api/accounts/{account_number}/deposit
pub async fn deposit(
    account_number: String,
    request: AccountUpdateRequest,
    ledger: SharedLedger,
) -> Result<impl Reply, Rejection> {
    log::debug!(
        "deposit; account_number = {}, request = {:?}",
        account_number,
        request
    );
    update_account(account_number, request, TxKind::Deposit, ledger).await
}

/// The `withdraw` handler
///
/// Responds with the updated account.
///
/// POST /api/accounts/{account_number}/withdraw
pub async fn withdraw(
    account_number: String,
    request: AccountUpdateRequest,
    ledger: SharedLedger,
) -> Result<impl Reply, Rejection> {
    log::debug!(
        "withdraw; account_number = {}, request = {:?}",
        account_number,
        request
    );
    update_account(account_number, request, TxKind::Withdraw, ledger).await
}

/// Applies a deposit or a withdrawal, and replies with the account
/// as it is afterwards, all under one lock.
async fn update_account(
    account_number: String,
    request: AccountUpdateRequest,
    kind: TxKind,
    ledger: SharedLedger,
) -> Result<warp::reply::Json, Rejection> {
    let mut ledger = ledger.lock().await;

    let result = match kind {
        TxKind::Deposit => ledger.deposit(
            &account_number,
            request.amount,
            request.note.as_deref().unwrap_or(DEFAULT_DEPOSIT_NOTE),
        ),
        TxKind::Withdraw => ledger.withdraw(
            &account_number,
            request.amount,
            request.note.as_deref().unwrap_or(DEFAULT_WITHDRAW_NOTE),
        ),
    };

    let tx = result.map_err(|err| {
        log::debug!("{:?} rejected: {}", kind, err);
        warp::reject::custom(WebServiceLedgerError(err))
    })?;
    log::info!("{} {} on {} as {}", kind, tx.amount, account_number, tx.id);

    ledger
        .account(&account_number)
        .map(warp::reply::json)
        .ok_or_else(|| {
            warp::reject::custom(WebServiceLedgerError(LedgerError::AccountNotFound(
                account_number.clone(),
            )))
        })
}

/// The `history` handler
///
/// Responds with the account's transactions, most recent first.
/// An unknown account has an empty history.
///
/// GET /api/accounts/{account_number}/history
pub async fn history(
    account_number: String,
    ledger: SharedLedger,
) -> Result<impl Reply, Infallible> {
    log::debug!("history; account_number = {}", account_number);
    let history = ledger.lock().await.history(&account_number);
    let response = warp::reply::json(&history);
    Ok(response)
}

/// The `undo` handler
///
/// Always succeeds; the message says what, if anything, was undone.
///
/// POST /api/undo
pub async fn undo(ledger: SharedLedger) -> Result<impl Reply, Infallible> {
    log::debug!("undo");
    let outcome = ledger.lock().await.undo();
    log::info!("undo: {:?}", outcome);
    let response = warp::reply::json(&UndoResponse {
        message: outcome.to_string(),
    });
    Ok(response)
}

/// The `search` handler
///
/// Responds with the accounts whose owner's name contains the `name` query
/// parameter, case-insensitively. A missing parameter matches all accounts.
///
/// GET /api/search?name=smith
pub async fn search(
    request: SearchRequest,
    ledger: SharedLedger,
) -> Result<impl Reply, Infallible> {
    log::debug!("search; request = {:?}", request);
    let keyword = request.name.unwrap_or_default();
    let ledger = ledger.lock().await;
    let response = warp::reply::json(&ledger.search_by_name(&keyword));
    Ok(response)
}

/// The `stats` handler
///
/// GET /api/stats
pub async fn stats(ledger: SharedLedger) -> Result<impl Reply, Rejection> {
    log::debug!("stats");
    let stats = ledger.lock().await.stats().map_err(|err| {
        log::error!("stats: {}", err);
        warp::reject::custom(WebServiceLedgerError(err))
    })?;
    let response = warp::reply::json(&stats);
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::is_valid_name;

    #[test]
    fn test_valid_name_passes() {
        assert!(is_valid_name("Alice Johnson").is_ok());
    }

    #[test]
    fn test_empty_name_fails() {
        assert!(is_valid_name("").is_err());
    }
}
