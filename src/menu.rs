//! Interactive text-menu driver
//!
//! Translates menu choices into calls against the [`Bank`] and prints the
//! results. Every library error is reported and the session continues; the
//! only exits are option 7 and end of input.
//!
//! The driver is generic over its reader and writer so tests can run scripted
//! sessions over in-memory buffers.
//!
//! Malformed numeric input re-prompts instead of aborting. A syntactically
//! valid but out-of-policy value (a negative deposit, say) is passed through
//! to the bank and rejected there, so the user sees the policy message rather
//! than a parse complaint.

use std::io::{self, BufRead, Write};

use rand::Rng;

use crate::bank::Bank;
use crate::display::{format_account_details, format_account_list, format_balance};
use crate::models::{AccountNumber, AccountType, Money};

/// Run the interactive menu until the user exits or input ends
pub fn run<R, W, G>(bank: &mut Bank, rng: &mut G, input: &mut R, output: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    loop {
        writeln!(output)?;
        writeln!(output, "--- Bank System ---")?;
        writeln!(output, "1. Create Account")?;
        writeln!(output, "2. Deposit Money")?;
        writeln!(output, "3. Withdraw Money")?;
        writeln!(output, "4. Check Balance")?;
        writeln!(output, "5. Show All Accounts")?;
        writeln!(output, "6. Add Interest to Savings Account")?;
        writeln!(output, "7. Exit")?;

        let Some(choice) = prompt_line(input, output, "Choose an option (1-7): ")? else {
            break;
        };

        let flow = match choice.trim() {
            "1" => create_account(bank, rng, input, output)?,
            "2" => deposit(bank, input, output)?,
            "3" => withdraw(bank, input, output)?,
            "4" => check_balance(bank, input, output)?,
            "5" => {
                write!(output, "{}", format_account_list(bank.accounts()))?;
                Flow::Continue
            }
            "6" => add_interest(bank, input, output)?,
            "7" => {
                writeln!(output, "Exiting the system.")?;
                Flow::Exit
            }
            _ => {
                writeln!(output, "Invalid choice. Please choose a valid option.")?;
                Flow::Continue
            }
        };

        if flow == Flow::Exit {
            break;
        }
    }

    Ok(())
}

/// Whether the session continues after a handler
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Option 7 or end of input
    Exit,
}

fn create_account<R: BufRead, W: Write, G: Rng + ?Sized>(
    bank: &mut Bank,
    rng: &mut G,
    input: &mut R,
    output: &mut W,
) -> io::Result<Flow> {
    let Some(account_type) = prompt_account_type(input, output)? else {
        return Ok(Flow::Exit);
    };
    let Some(name) = prompt_line(input, output, "Enter account holder's name: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(deposit) = prompt_amount(input, output, "Enter initial deposit amount: ")? else {
        return Ok(Flow::Exit);
    };

    match bank.open_account(rng, account_type, &name, deposit) {
        Ok(number) => {
            writeln!(
                output,
                "Account created for {}. Account Number: {}",
                name.trim(),
                number
            )?;
            // the account was just appended, so the lookup cannot miss
            if let Ok(account) = bank.find_account(number) {
                write!(output, "{}", format_account_details(account))?;
            }
        }
        Err(err) => writeln!(output, "{}", err)?,
    }
    Ok(Flow::Continue)
}

fn deposit<R: BufRead, W: Write>(
    bank: &mut Bank,
    input: &mut R,
    output: &mut W,
) -> io::Result<Flow> {
    let Some(number) = prompt_account_number(input, output)? else {
        return Ok(Flow::Exit);
    };
    let account = match bank.find_account_mut(number) {
        Ok(account) => account,
        Err(err) => {
            writeln!(output, "{}", err)?;
            return Ok(Flow::Continue);
        }
    };
    let Some(amount) = prompt_amount(input, output, "Enter amount to deposit: ")? else {
        return Ok(Flow::Exit);
    };

    match account.deposit(amount) {
        Ok(balance) => writeln!(
            output,
            "Deposited {}. New balance is {}.",
            amount, balance
        )?,
        Err(err) => writeln!(output, "{}", err)?,
    }
    Ok(Flow::Continue)
}

fn withdraw<R: BufRead, W: Write>(
    bank: &mut Bank,
    input: &mut R,
    output: &mut W,
) -> io::Result<Flow> {
    let Some(number) = prompt_account_number(input, output)? else {
        return Ok(Flow::Exit);
    };
    let account = match bank.find_account_mut(number) {
        Ok(account) => account,
        Err(err) => {
            writeln!(output, "{}", err)?;
            return Ok(Flow::Continue);
        }
    };
    let Some(amount) = prompt_amount(input, output, "Enter amount to withdraw: ")? else {
        return Ok(Flow::Exit);
    };

    match account.withdraw(amount) {
        Ok(balance) => writeln!(output, "Withdrew {}. New balance is {}.", amount, balance)?,
        Err(err) => writeln!(output, "{}", err)?,
    }
    Ok(Flow::Continue)
}

fn check_balance<R: BufRead, W: Write>(
    bank: &mut Bank,
    input: &mut R,
    output: &mut W,
) -> io::Result<Flow> {
    let Some(number) = prompt_account_number(input, output)? else {
        return Ok(Flow::Exit);
    };
    match bank.find_account(number) {
        Ok(account) => write!(output, "{}", format_balance(account))?,
        Err(err) => writeln!(output, "{}", err)?,
    }
    Ok(Flow::Continue)
}

fn add_interest<R: BufRead, W: Write>(
    bank: &mut Bank,
    input: &mut R,
    output: &mut W,
) -> io::Result<Flow> {
    let Some(number) = prompt_account_number(input, output)? else {
        return Ok(Flow::Exit);
    };
    let account = match bank.find_account_mut(number) {
        Ok(account) => account,
        Err(err) => {
            writeln!(output, "{}", err)?;
            return Ok(Flow::Continue);
        }
    };

    match account.add_interest() {
        Ok(posting) => writeln!(
            output,
            "Interest added: {}. New balance: {}",
            posting.interest, posting.new_balance
        )?,
        Err(err) => writeln!(output, "{}", err)?,
    }
    Ok(Flow::Continue)
}

/// Read one line after printing a prompt; `None` on end of input
fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Prompt for a monetary amount, re-prompting until it parses
fn prompt_amount<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<Money>> {
    loop {
        let Some(line) = prompt_line(input, output, prompt)? else {
            return Ok(None);
        };
        match Money::parse(&line) {
            Ok(amount) => return Ok(Some(amount)),
            Err(err) => writeln!(output, "{}", err)?,
        }
    }
}

/// Prompt for an account number, re-prompting until it parses
fn prompt_account_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<AccountNumber>> {
    loop {
        let Some(line) = prompt_line(input, output, "Enter account number: ")? else {
            return Ok(None);
        };
        match line.parse::<AccountNumber>() {
            Ok(number) => return Ok(Some(number)),
            Err(err) => writeln!(output, "{}", err)?,
        }
    }
}

/// Prompt for an account type, re-prompting until it parses
fn prompt_account_type<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<AccountType>> {
    loop {
        let Some(line) =
            prompt_line(input, output, "Enter account type (savings/checking): ")?
        else {
            return Ok(None);
        };
        match AccountType::parse(&line) {
            Some(account_type) => return Ok(Some(account_type)),
            None => writeln!(
                output,
                "{}",
                crate::error::TellerError::InvalidAccountType(line.trim().to_string())
            )?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    /// Run a scripted session against a pre-built bank, returning the output
    fn run_script(bank: &mut Bank, script: &str) -> String {
        let mut rng = StdRng::seed_from_u64(99);
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        run(bank, &mut rng, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    /// Open an account directly on the bank with a deterministic number
    fn open(bank: &mut Bank, account_type: AccountType, name: &str, cents: i64) -> AccountNumber {
        let mut rng = StdRng::seed_from_u64(7);
        bank.open_account(&mut rng, account_type, name, Money::from_cents(cents))
            .unwrap()
    }

    #[test]
    fn test_exit_option() {
        let mut bank = Bank::new(Settings::default());
        let output = run_script(&mut bank, "7\n");
        assert!(output.contains("--- Bank System ---"));
        assert!(output.contains("Exiting the system."));
    }

    #[test]
    fn test_eof_exits_cleanly() {
        let mut bank = Bank::new(Settings::default());
        let output = run_script(&mut bank, "");
        assert!(output.contains("Choose an option"));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let mut bank = Bank::new(Settings::default());
        let output = run_script(&mut bank, "9\n7\n");
        assert!(output.contains("Invalid choice. Please choose a valid option."));
        assert!(output.contains("Exiting the system."));
    }

    #[test]
    fn test_create_and_list() {
        let mut bank = Bank::new(Settings::default());
        let output = run_script(&mut bank, "1\nsavings\nAda\n100\n5\n7\n");

        assert!(output.contains("Account created for Ada. Account Number: "));
        assert!(output.contains("Ada"));
        assert!(output.contains("$100.00"));
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn test_create_rejects_negative_deposit() {
        // initial deposit of -5 parses fine but the bank rejects it
        let mut bank = Bank::new(Settings::default());
        let output = run_script(&mut bank, "1\nchecking\nGrace\n-5\n7\n");

        assert!(output.contains("Initial deposit must be non-negative"));
        assert!(bank.is_empty());
    }

    #[test]
    fn test_invalid_account_type_reprompts() {
        let mut bank = Bank::new(Settings::default());
        let output = run_script(&mut bank, "1\ncredit\nsavings\nAda\n0\n7\n");

        assert!(output.contains("Invalid account type: 'credit'"));
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn test_deposit_flow() {
        let mut bank = Bank::new(Settings::default());
        let number = open(&mut bank, AccountType::Savings, "Ada", 10000);

        let output = run_script(&mut bank, &format!("2\n{}\n25.50\n7\n", number));
        assert!(output.contains("Deposited $25.50. New balance is $125.50."));
    }

    #[test]
    fn test_deposit_negative_amount_rejected() {
        // deposit of -10: parses, but the account rejects it and the balance
        // stays put
        let mut bank = Bank::new(Settings::default());
        let number = open(&mut bank, AccountType::Savings, "Ada", 10000);

        let output = run_script(&mut bank, &format!("2\n{}\n-10\n7\n", number));
        assert!(output.contains("Amount must be positive"));
        assert_eq!(bank.find_account(number).unwrap().balance().cents(), 10000);
    }

    #[test]
    fn test_create_prints_account_details() {
        let mut bank = Bank::new(Settings::default());
        let output = run_script(&mut bank, "1\nsavings\nAda\n100\n7\n");

        assert!(output.contains("Account created for Ada. Account Number: "));
        assert!(output.contains("Account: Ada"));
        assert!(output.contains("Interest: 2.00%"));
        assert!(output.contains("Balance:  $100.00"));
        assert!(output.contains("Opened:"));
    }

    #[test]
    fn test_hostile_amount_input_reprompts() {
        // multi-byte characters and overflowing magnitudes are parse failures
        // like any other, never a crash
        let mut bank = Bank::new(Settings::default());
        let number = open(&mut bank, AccountType::Savings, "Ada", 0);

        let output = run_script(
            &mut bank,
            &format!("2\n{}\n10.€\n100000000000000000\n50\n7\n", number),
        );
        assert_eq!(output.matches("Invalid money format").count(), 2);
        assert!(output.contains("Deposited $50.00"));
    }

    #[test]
    fn test_malformed_amount_reprompts() {
        let mut bank = Bank::new(Settings::default());
        let number = open(&mut bank, AccountType::Savings, "Ada", 0);

        let output = run_script(&mut bank, &format!("2\n{}\nabc\n50\n7\n", number));
        assert!(output.contains("Invalid money format: abc"));
        assert!(output.contains("Deposited $50.00"));
    }

    #[test]
    fn test_malformed_account_number_reprompts() {
        let mut bank = Bank::new(Settings::default());
        let number = open(&mut bank, AccountType::Savings, "Ada", 1000);

        let output = run_script(&mut bank, &format!("4\nnope\n{}\n7\n", number));
        assert!(output.contains("Invalid account number: nope"));
        assert!(output.contains("Account balance for Ada is: $10.00"));
    }

    #[test]
    fn test_withdraw_insufficient_funds() {
        // withdraw 50 from a balance of 20
        let mut bank = Bank::new(Settings::default());
        let number = open(&mut bank, AccountType::Savings, "Ada", 2000);

        let output = run_script(&mut bank, &format!("3\n{}\n50\n7\n", number));
        assert!(output.contains("Insufficient funds: requested $50.00, current balance $20.00"));
        assert_eq!(bank.find_account(number).unwrap().balance().cents(), 2000);
    }

    #[test]
    fn test_checking_limit_exceeded() {
        // checking with limit $500 and balance $300: withdraw $400 is under
        // the limit but over the balance; $600 is over the limit
        let mut bank = Bank::new(Settings::default());
        let number = open(&mut bank, AccountType::Checking, "Grace", 30000);

        let output = run_script(&mut bank, &format!("3\n{}\n600\n7\n", number));
        assert!(output.contains("Amount exceeds withdrawal limit of $500.00"));
        assert_eq!(bank.find_account(number).unwrap().balance().cents(), 30000);
    }

    #[test]
    fn test_add_interest_end_to_end() {
        // savings with $100 at the default 2% -> $102.00
        let mut bank = Bank::new(Settings::default());
        let number = open(&mut bank, AccountType::Savings, "Ada", 10000);

        let output = run_script(&mut bank, &format!("6\n{}\n7\n", number));
        assert!(output.contains("Interest added: $2.00. New balance: $102.00"));
    }

    #[test]
    fn test_add_interest_on_checking_rejected() {
        let mut bank = Bank::new(Settings::default());
        let number = open(&mut bank, AccountType::Checking, "Grace", 10000);

        let output = run_script(&mut bank, &format!("6\n{}\n7\n", number));
        assert!(output.contains("Interest can only be added to savings accounts"));
    }

    #[test]
    fn test_account_not_found_reported() {
        let mut bank = Bank::new(Settings::default());
        let output = run_script(&mut bank, "4\n1234567890\n7\n");
        assert!(output.contains("Account not found: 1234567890"));
    }

    #[test]
    fn test_list_empty() {
        let mut bank = Bank::new(Settings::default());
        let output = run_script(&mut bank, "5\n7\n");
        assert!(output.contains("No accounts found."));
    }
}
