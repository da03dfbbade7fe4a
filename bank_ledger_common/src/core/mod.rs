//! Domain types shared by the ledger, the web service and the clients.

pub mod types;
