//! Account number identifier
//!
//! A newtype wrapper over the 10-digit numeric identifiers the bank assigns
//! at account creation. Wrapping the raw u64 prevents mixing identifiers with
//! monetary amounts and keeps the value immutable after construction: there
//! is no public mutator.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest valid account number (the first 10-digit integer)
pub const ACCOUNT_NUMBER_MIN: u64 = 1_000_000_000;

/// Largest valid account number
pub const ACCOUNT_NUMBER_MAX: u64 = 9_999_999_999;

/// A 10-digit account identifier, unique within a [`Bank`](crate::bank::Bank)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(u64);

impl AccountNumber {
    /// Create an account number, rejecting values outside the 10-digit range
    pub fn new(value: u64) -> Option<Self> {
        if (ACCOUNT_NUMBER_MIN..=ACCOUNT_NUMBER_MAX).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Draw a uniformly random 10-digit account number
    ///
    /// Uniqueness is the caller's concern; see
    /// [`Bank::generate_account_number`](crate::bank::Bank::generate_account_number).
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(ACCOUNT_NUMBER_MIN..=ACCOUNT_NUMBER_MAX))
    }

    /// Get the raw numeric value
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for account number parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountNumberParseError {
    /// Not a base-10 integer
    NotNumeric(String),
    /// Numeric but not a 10-digit value
    OutOfRange(u64),
}

impl fmt::Display for AccountNumberParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotNumeric(s) => write!(f, "Invalid account number: {}", s),
            Self::OutOfRange(n) => {
                write!(f, "Account number must be a 10-digit integer, got {}", n)
            }
        }
    }
}

impl std::error::Error for AccountNumberParseError {}

impl FromStr for AccountNumber {
    type Err = AccountNumberParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u64 = s
            .trim()
            .parse()
            .map_err(|_| AccountNumberParseError::NotNumeric(s.trim().to_string()))?;
        Self::new(value).ok_or(AccountNumberParseError::OutOfRange(value))
    }
}
