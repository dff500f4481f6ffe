//! teller-cli - Interactive in-memory bank teller for the terminal
//!
//! This library provides the core functionality for the teller: an in-memory
//! bank holding savings and checking accounts, driven by an interactive text
//! menu. Nothing persists across runs and a single execution context owns all
//! state for the lifetime of the process.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Runtime settings (rates, limits, currency symbol)
//! - `error`: Custom error types
//! - `models`: Core data models (money, account numbers, accounts)
//! - `bank`: The bank context owning the account collection
//! - `display`: Terminal output formatting
//! - `menu`: The interactive text-menu driver
//!
//! # Example
//!
//! ```rust
//! use teller_cli::bank::Bank;
//! use teller_cli::config::Settings;
//! use teller_cli::models::{AccountType, Money};
//!
//! let mut bank = Bank::new(Settings::default());
//! let number = bank
//!     .open_account(
//!         &mut rand::thread_rng(),
//!         AccountType::Savings,
//!         "Ada",
//!         Money::from_cents(10000),
//!     )
//!     .unwrap();
//! assert_eq!(bank.find_account(number).unwrap().balance().cents(), 10000);
//! ```

pub mod bank;
pub mod config;
pub mod display;
pub mod error;
pub mod menu;
pub mod models;

pub use error::{TellerError, TellerResult};
