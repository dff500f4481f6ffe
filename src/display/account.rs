//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::models::{Account, AccountKind, Money};

/// Format a list of accounts as a table, in creation order
pub fn format_account_list(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "No accounts found.\n".to_string();
    }

    // Calculate column widths
    let name_width = accounts
        .iter()
        .map(|a| a.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let type_width = accounts
        .iter()
        .map(|a| a.account_type().to_string().len())
        .max()
        .unwrap_or(4)
        .max(4);

    // Build header
    let mut output = String::new();
    output.push_str(&format!(
        "{:>10}  {:<name_width$}  {:<type_width$}  {:>12}\n",
        "Number",
        "Name",
        "Type",
        "Balance",
        name_width = name_width,
        type_width = type_width,
    ));

    // Separator line
    output.push_str(&format!(
        "{:->10}  {:-<name_width$}  {:-<type_width$}  {:->12}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
        type_width = type_width,
    ));

    // Account rows
    for account in accounts {
        output.push_str(&format!(
            "{:>10}  {:<name_width$}  {:<type_width$}  {:>12}\n",
            account.number().to_string(),
            account.name,
            account.account_type().to_string(),
            account.balance().to_string(),
            name_width = name_width,
            type_width = type_width,
        ));
    }

    // Total row
    let total: Money = accounts.iter().map(|a| a.balance()).sum();

    output.push_str(&format!(
        "{:->10}  {:-<name_width$}  {:-<type_width$}  {:->12}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
        type_width = type_width,
    ));

    output.push_str(&format!(
        "{:>10}  {:<name_width$}  {:<type_width$}  {:>12}\n",
        "",
        "TOTAL",
        "",
        total.to_string(),
        name_width = name_width,
        type_width = type_width,
    ));

    output
}

/// Format a single account's details
pub fn format_account_details(account: &Account) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.name));
    output.push_str(&format!("  Number:   {}\n", account.number()));
    output.push_str(&format!("  Type:     {}\n", account.account_type()));

    match account.kind() {
        AccountKind::Savings { interest_rate } => {
            output.push_str(&format!(
                "  Interest: {:.2}%\n",
                interest_rate * 100.0
            ));
        }
        AccountKind::Checking { withdrawal_limit } => {
            output.push_str(&format!("  Limit:    {} per withdrawal\n", withdrawal_limit));
        }
    }

    output.push_str(&format!("  Balance:  {}\n", account.balance()));
    output.push_str(&format!(
        "  Opened:   {}\n",
        account.created_at().format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

/// Format the check-balance line
pub fn format_balance(account: &Account) -> String {
    format!(
        "Account balance for {} is: {}\n",
        account.name,
        account.balance()
    )
}
