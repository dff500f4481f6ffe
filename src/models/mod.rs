//! Core data models for the teller
//!
//! This module contains the data structures that represent the banking
//! domain: monetary amounts, account numbers, and the accounts themselves.

pub mod account;
pub mod money;
pub mod number;

pub use account::{
    Account, AccountKind, AccountType, InterestPosting, DEFAULT_INTEREST_RATE,
    DEFAULT_WITHDRAWAL_LIMIT,
};
pub use money::Money;
pub use number::{AccountNumber, ACCOUNT_NUMBER_MAX, ACCOUNT_NUMBER_MIN};
