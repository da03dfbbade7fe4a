use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// **The kind of a transaction**
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxKind {
    Deposit,
    Withdraw,
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxKind::Deposit => f.write_str("DEPOSIT"),
            TxKind::Withdraw => f.write_str("WITHDRAW"),
        }
    }
}

/// **A transaction type**
///
/// Transactions are immutable once created.
/// The `balance_after` field is a snapshot of the owning account's balance
/// right after the transaction was applied.
///
/// A transaction doesn't know its account; it is owned by that account's
/// [`TransactionLog`](crate::history::TransactionLog).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tx {
    /// Globally unique id, such as `TX7`
    pub id: String,
    /// Deposit or withdrawal
    #[serde(rename = "type")]
    pub kind: TxKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance_after: Decimal,
    pub note: String,
}

impl Tx {
    pub fn new(
        id: String,
        kind: TxKind,
        amount: Decimal,
        balance_after: Decimal,
        note: &str,
    ) -> Self {
        Self {
            id,
            kind,
            amount,
            balance_after,
            note: note.to_string(),
        }
    }
}
