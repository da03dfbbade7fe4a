pub mod accounts;
pub mod cli;
pub mod core;
pub mod errors;
pub mod history;
pub mod ledger;
pub mod requests;
pub mod tx;
pub mod undo;
pub mod validation;

pub use crate::core::types;
pub use requests::*;
