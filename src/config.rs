//! Runtime settings for the teller
//!
//! Settings come from the command line at startup; there is no settings file
//! because nothing persists across runs.

use serde::{Deserialize, Serialize};

use crate::error::{TellerError, TellerResult};
use crate::models::{Money, DEFAULT_INTEREST_RATE, DEFAULT_WITHDRAWAL_LIMIT};

/// Runtime settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Interest rate applied to new savings accounts (fractional, e.g. 0.02)
    pub interest_rate: f64,

    /// Per-transaction withdrawal limit for new checking accounts
    pub withdrawal_limit: Money,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interest_rate: DEFAULT_INTEREST_RATE,
            withdrawal_limit: DEFAULT_WITHDRAWAL_LIMIT,
        }
    }
}

impl Settings {
    /// Validate the settings
    pub fn validate(&self) -> TellerResult<()> {
        if !(0.0..=1.0).contains(&self.interest_rate) {
            return Err(TellerError::Config(format!(
                "interest rate must be between 0 and 1, got {}",
                self.interest_rate
            )));
        }
        if !self.withdrawal_limit.is_positive() {
            return Err(TellerError::Config(format!(
                "withdrawal limit must be positive, got {}",
                self.withdrawal_limit
            )));
        }
        Ok(())
    }
}
