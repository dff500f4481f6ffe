//! Display formatting for terminal output
//!
//! Provides utilities for formatting accounts for terminal display.

pub mod account;

pub use account::{format_account_details, format_account_list, format_balance};
