use rust_decimal::Decimal;
use thiserror::Error;

/// **An application-specific error type**
///
/// Every variant is local to the single operation that returned it;
/// the ledger is left unchanged.
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("Account not found: {0}")]
    AccountNotFound(String),
    #[error("Amount must be positive, got {0}")]
    InvalidAmount(Decimal),
    #[error("Insufficient funds in {account}: requested {requested}, available {available}")]
    InsufficientFunds {
        account: String,
        requested: Decimal,
        available: Decimal,
    },
    #[error("Account {account} would be over-funded by a deposit of {amount}")]
    AccountOverFunded { account: String, amount: Decimal },
    #[error("Total balance is too large to be represented")]
    TotalBalanceOverflow,
}

pub const OWNER_NAME_NOT_VALID_MSG: &str = "Owner's name is not valid";
pub const EMPTY_OWNER_NAME: &str = "Owner's name cannot be empty.";
pub const UNKNOWN_ACCOUNT_TYPE_MSG: &str = "Unknown account type; expected SAVINGS or CURRENT";

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn messages_name_the_account_and_amounts() {
        assert_eq!(
            "Account not found: ACC1001",
            LedgerError::AccountNotFound("ACC1001".to_string()).to_string()
        );
        assert_eq!(
            "Amount must be positive, got -5",
            LedgerError::InvalidAmount(dec!(-5)).to_string()
        );
        assert_eq!(
            "Insufficient funds in ACC1001: requested 10000, available 7000",
            LedgerError::InsufficientFunds {
                account: "ACC1001".to_string(),
                requested: dec!(10000),
                available: dec!(7000),
            }
            .to_string()
        );
        assert_eq!(
            "Account ACC1001 would be over-funded by a deposit of 1",
            LedgerError::AccountOverFunded {
                account: "ACC1001".to_string(),
                amount: dec!(1),
            }
            .to_string()
        );
    }
}
