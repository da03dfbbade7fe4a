//! The "Bank Ledger Web Service's" entry point.

use bank_ledger_common::ledger::Ledger;
use bank_ledger_web_service::config::ServiceConfig;
use bank_ledger_web_service::routes::routes;
use std::env;
use std::sync::Arc;
use tokio::sync::Mutex;
use warp::Filter;

/// The "Bank Ledger Web Service's" entry point.
#[tokio::main]
async fn main() {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "bank_ledger=info");
    }
    pretty_env_logger::init();

    let config = ServiceConfig::from_env();
    log::info!("starting with {:?}", config);

    let ledger = if config.seed_demo_data {
        Ledger::with_demo_data()
    } else {
        Ledger::new()
    };
    let ledger = Arc::new(Mutex::new(ledger));

    let log = warp::log("bank_ledger");
    let routes = routes(ledger).with(log);

    // Start up the server
    warp::serve(routes).run(config.addr).await;
}
