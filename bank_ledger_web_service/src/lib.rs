pub mod config;
pub mod errors;
pub mod handlers;
pub mod routes;

use bank_ledger_common::ledger::Ledger;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The one ledger instance, shared by all request handlers.
///
/// A single lock guards the whole ledger, so every operation,
/// undo's scan over all accounts included, runs alone.
pub type SharedLedger = Arc<Mutex<Ledger>>;
