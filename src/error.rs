//! Custom error types for the teller
//!
//! This module defines the error taxonomy for the application using thiserror
//! for ergonomic error definitions. Every variant is a recoverable,
//! user-visible condition: the interactive driver prints the message and the
//! session continues.

use thiserror::Error;

use crate::models::{AccountNumber, AccountType, Money};

/// The main error type for teller operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TellerError {
    /// Deposit or withdrawal amount was zero or negative
    #[error("Amount must be positive")]
    InvalidAmount,

    /// Withdrawal larger than the current balance
    #[error("Insufficient funds: requested {requested}, current balance {available}")]
    InsufficientFunds { requested: Money, available: Money },

    /// Withdrawal larger than a checking account's per-transaction limit
    #[error("Amount exceeds withdrawal limit of {limit}")]
    ExceedsWithdrawalLimit { requested: Money, limit: Money },

    /// Account opened with a negative initial deposit
    #[error("Initial deposit must be non-negative")]
    InvalidInitialDeposit,

    /// Account name was empty or otherwise unusable
    #[error("Account name cannot be empty")]
    InvalidName,

    /// Unknown account type string at the input boundary
    #[error("Invalid account type: '{0}'. Valid types: savings, checking")]
    InvalidAccountType(String),

    /// No account with the given number exists
    #[error("Account not found: {0}")]
    AccountNotFound(AccountNumber),

    /// Interest accrual requested on a non-savings account
    #[error("Interest can only be added to savings accounts (this is a {0} account)")]
    InterestNotSupported(AccountType),

    /// Invalid runtime settings
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for teller operations
pub type TellerResult<T> = Result<T, TellerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TellerError::InvalidAmount;
        assert_eq!(err.to_string(), "Amount must be positive");

        let err = TellerError::Config("bad rate".into());
        assert_eq!(err.to_string(), "Configuration error: bad rate");
    }

    #[test]
    fn test_insufficient_funds_display() {
        let err = TellerError::InsufficientFunds {
            requested: Money::from_cents(5000),
            available: Money::from_cents(2000),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: requested $50.00, current balance $20.00"
        );
    }

    #[test]
    fn test_withdrawal_limit_display() {
        let err = TellerError::ExceedsWithdrawalLimit {
            requested: Money::from_cents(60000),
            limit: Money::from_cents(50000),
        };
        assert_eq!(err.to_string(), "Amount exceeds withdrawal limit of $500.00");
    }

    #[test]
    fn test_not_found() {
        let number = AccountNumber::new(1234567890).unwrap();
        let err = TellerError::AccountNotFound(number);
        assert_eq!(err.to_string(), "Account not found: 1234567890");
    }
}
