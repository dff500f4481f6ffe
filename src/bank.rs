//! Bank context
//!
//! Owns the account collection for one session: assigns unique account
//! numbers, validates account creation, and routes lookups. Constructed at
//! startup and dropped at shutdown; nothing outlives the process.

use rand::Rng;

use crate::config::Settings;
use crate::error::{TellerError, TellerResult};
use crate::models::{Account, AccountKind, AccountNumber, AccountType, Money};

/// A bank owning an ordered collection of accounts
///
/// Accounts are kept in creation order; numbers are unique within the bank.
#[derive(Debug, Clone, Default)]
pub struct Bank {
    accounts: Vec<Account>,
    settings: Settings,
}

impl Bank {
    /// Create an empty bank with the given settings
    pub fn new(settings: Settings) -> Self {
        Self {
            accounts: Vec::new(),
            settings,
        }
    }

    /// The settings this bank was constructed with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Generate a fresh 10-digit account number not held by any account
    ///
    /// Retries on collision; with 9 billion candidates and at most a handful
    /// of accounts per session the loop terminates effectively immediately.
    pub fn generate_account_number<R: Rng + ?Sized>(&self, rng: &mut R) -> AccountNumber {
        loop {
            let candidate = AccountNumber::random(rng);
            if !self.accounts.iter().any(|a| a.number() == candidate) {
                return candidate;
            }
        }
    }

    /// Open a new account, returning its assigned number
    ///
    /// Rejects a negative initial deposit and a blank holder name; either
    /// rejection leaves the collection unchanged. The new account takes the
    /// default rate or limit from the bank's settings.
    pub fn open_account<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        account_type: AccountType,
        name: &str,
        initial_deposit: Money,
    ) -> TellerResult<AccountNumber> {
        if initial_deposit.is_negative() {
            return Err(TellerError::InvalidInitialDeposit);
        }

        let kind = match account_type {
            AccountType::Savings => AccountKind::Savings {
                interest_rate: self.settings.interest_rate,
            },
            AccountType::Checking => AccountKind::Checking {
                withdrawal_limit: self.settings.withdrawal_limit,
            },
        };

        let number = self.generate_account_number(rng);
        let account = Account::new(number, name.trim(), initial_deposit, kind);
        account.validate()?;

        self.accounts.push(account);
        Ok(number)
    }

    /// Find an account by number
    pub fn find_account(&self, number: AccountNumber) -> TellerResult<&Account> {
        self.accounts
            .iter()
            .find(|a| a.number() == number)
            .ok_or(TellerError::AccountNotFound(number))
    }

    /// Find an account by number for mutation
    pub fn find_account_mut(&mut self, number: AccountNumber) -> TellerResult<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|a| a.number() == number)
            .ok_or(TellerError::AccountNotFound(number))
    }

    /// All accounts in creation order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Number of open accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the bank has no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
