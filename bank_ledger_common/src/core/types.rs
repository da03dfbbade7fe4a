use crate::errors::UNKNOWN_ACCOUNT_TYPE_MSG;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category of an [`Account`]
///
/// It's a closed set; the wire form is the upper-case name.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    /// A savings account; the default when no type is given
    #[default]
    Savings,
    /// A current (checking) account
    Current,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Savings => f.write_str("SAVINGS"),
            AccountType::Current => f.write_str("CURRENT"),
        }
    }
}

impl FromStr for AccountType {
    type Err = String;

    /// Case-insensitive, so that CLI users can type `savings` or `Savings`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SAVINGS" => Ok(AccountType::Savings),
            "CURRENT" => Ok(AccountType::Current),
            _ => Err(format!("{}: \"{}\"", UNKNOWN_ACCOUNT_TYPE_MSG, s)),
        }
    }
}

/// A single bank account
///
/// The account number is assigned by the [`Ledger`](crate::ledger::Ledger)
/// and never changes. The balance is the only field that gets mutated
/// after creation, and only by the ledger.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique account number, such as `ACC1001`
    pub account_number: String,
    /// The owner's full name
    pub owner_name: String,
    /// The owner's e-mail address; not validated
    pub email: String,
    /// Current balance
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    /// Savings or current
    #[serde(rename = "type")]
    pub account_type: AccountType,
}

impl Account {
    pub fn new(
        account_number: String,
        owner_name: String,
        email: String,
        balance: Decimal,
        account_type: AccountType,
    ) -> Self {
        Self {
            account_number,
            owner_name,
            email,
            balance,
            account_type,
        }
    }
}

/// **A snapshot of the whole ledger**
///
/// Computed on demand; nothing here is cached.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of accounts ever created
    pub account_count: usize,
    /// Sum of all account balances
    #[serde(with = "rust_decimal::serde::float")]
    pub total_balance: Decimal,
    /// Number of operations that can still be undone
    pub undo_stack_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_type_parses_case_insensitively() {
        assert_eq!(Ok(AccountType::Savings), "savings".parse());
        assert_eq!(Ok(AccountType::Current), "Current".parse());
        assert_eq!(Ok(AccountType::Current), " CURRENT ".parse());
        assert!("checking".parse::<AccountType>().is_err());
    }

    #[test]
    fn account_type_displays_wire_name() {
        assert_eq!("SAVINGS", AccountType::Savings.to_string());
        assert_eq!("CURRENT", AccountType::Current.to_string());
    }

    #[test]
    fn account_type_defaults_to_savings() {
        assert_eq!(AccountType::Savings, AccountType::default());
    }
}
