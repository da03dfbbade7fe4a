use crate::types::AccountType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub owner_name: String,
    pub email: String,
    /// The opening deposit; zero if omitted
    #[serde(default, with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    #[serde(default, rename = "type")]
    pub account_type: AccountType,
}

/// The body of both deposit and withdraw requests
#[derive(Debug, Deserialize, Serialize)]
pub struct AccountUpdateRequest {
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SearchRequest {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UndoResponse {
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Used when a deposit request comes without a note
pub const DEFAULT_DEPOSIT_NOTE: &str = "Deposit";
/// Used when a withdraw request comes without a note
pub const DEFAULT_WITHDRAW_NOTE: &str = "Withdrawal";
