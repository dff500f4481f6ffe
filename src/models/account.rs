//! Account model
//!
//! Represents bank accounts (savings, checking) and the per-operation rules
//! that keep a balance non-negative: positive amounts only, sufficient funds,
//! and the checking withdrawal cap.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::number::AccountNumber;
use crate::error::{TellerError, TellerResult};

/// Default interest rate for new savings accounts (2%)
pub const DEFAULT_INTEREST_RATE: f64 = 0.02;

/// Default per-transaction withdrawal limit for new checking accounts ($500)
pub const DEFAULT_WITHDRAWAL_LIMIT: Money = Money::from_cents(50000);

/// Type of bank account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Savings account (accrues interest on demand)
    Savings,
    /// Checking account (per-transaction withdrawal limit)
    Checking,
}

impl AccountType {
    /// Parse account type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "savings" | "s" => Some(Self::Savings),
            "checking" | "c" => Some(Self::Checking),
            _ => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Savings => write!(f, "Savings"),
            Self::Checking => write!(f, "Checking"),
        }
    }
}

/// Variant-specific account state
///
/// A tagged variant rather than a class hierarchy: the withdrawal cap and the
/// interest rate only exist on the account kinds that use them, and callers
/// never inspect runtime types to decide what an account supports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AccountKind {
    /// Savings: balance accrues interest on demand
    Savings { interest_rate: f64 },
    /// Checking: withdrawals are capped per transaction
    Checking { withdrawal_limit: Money },
}

impl AccountKind {
    /// Savings kind with the default 2% rate
    pub fn savings() -> Self {
        Self::Savings {
            interest_rate: DEFAULT_INTEREST_RATE,
        }
    }

    /// Checking kind with the default $500 limit
    pub fn checking() -> Self {
        Self::Checking {
            withdrawal_limit: DEFAULT_WITHDRAWAL_LIMIT,
        }
    }

    /// The corresponding account type tag
    pub fn account_type(&self) -> AccountType {
        match self {
            Self::Savings { .. } => AccountType::Savings,
            Self::Checking { .. } => AccountType::Checking,
        }
    }
}

/// Result of a successful interest accrual
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterestPosting {
    /// Interest amount added to the balance
    pub interest: Money,
    /// Balance after the accrual
    pub new_balance: Money,
}

/// A bank account
///
/// The account number and balance are private: the number is set once at
/// construction and never changes, and the balance moves only through
/// [`deposit`](Account::deposit), [`withdraw`](Account::withdraw), and
/// [`add_interest`](Account::add_interest).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique 10-digit identifier, immutable after creation
    number: AccountNumber,

    /// Account holder's display name
    pub name: String,

    /// Current balance; invariant: never negative
    balance: Money,

    /// Variant-specific state (rate or limit)
    kind: AccountKind,

    /// When the account was opened
    created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with the given opening balance
    ///
    /// The opening balance is the bank's concern to validate; see
    /// [`Bank::open_account`](crate::bank::Bank::open_account).
    pub fn new(
        number: AccountNumber,
        name: impl Into<String>,
        opening_balance: Money,
        kind: AccountKind,
    ) -> Self {
        Self {
            number,
            name: name.into(),
            balance: opening_balance,
            kind,
            created_at: Utc::now(),
        }
    }

    /// The account's unique number
    pub fn number(&self) -> AccountNumber {
        self.number
    }

    /// The current balance
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// The variant-specific state
    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    /// The account type tag
    pub fn account_type(&self) -> AccountType {
        self.kind.account_type()
    }

    /// When the account was opened
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Validate the account's mutable fields
    pub fn validate(&self) -> TellerResult<()> {
        if self.name.trim().is_empty() {
            return Err(TellerError::InvalidName);
        }
        Ok(())
    }

    /// Deposit a positive amount, returning the new balance
    pub fn deposit(&mut self, amount: Money) -> TellerResult<Money> {
        if !amount.is_positive() {
            return Err(TellerError::InvalidAmount);
        }
        self.balance += amount;
        Ok(self.balance)
    }

    /// Withdraw a positive amount, returning the new balance
    ///
    /// For checking accounts the per-transaction limit is checked before the
    /// funds check: an amount over both the limit and the balance is reported
    /// as over-limit only.
    pub fn withdraw(&mut self, amount: Money) -> TellerResult<Money> {
        if !amount.is_positive() {
            return Err(TellerError::InvalidAmount);
        }
        if let AccountKind::Checking { withdrawal_limit } = self.kind {
            if amount > withdrawal_limit {
                return Err(TellerError::ExceedsWithdrawalLimit {
                    requested: amount,
                    limit: withdrawal_limit,
                });
            }
        }
        if amount > self.balance {
            return Err(TellerError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }

    /// Accrue interest on a savings account
    ///
    /// Computes `balance * interest_rate` rounded to the nearest cent and adds
    /// it to the balance. Non-savings accounts get an explicit
    /// unsupported-operation error rather than a silent no-op.
    pub fn add_interest(&mut self) -> TellerResult<InterestPosting> {
        match self.kind {
            AccountKind::Savings { interest_rate } => {
                let interest = self.balance.interest(interest_rate);
                self.balance += interest;
                Ok(InterestPosting {
                    interest,
                    new_balance: self.balance,
                })
            }
            AccountKind::Checking { .. } => {
                Err(TellerError::InterestNotSupported(self.account_type()))
            }
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_type())
    }
}
