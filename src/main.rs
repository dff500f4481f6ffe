use anyhow::Result;
use clap::Parser;
use std::io::{self, BufReader};

use teller_cli::bank::Bank;
use teller_cli::config::Settings;
use teller_cli::menu;
use teller_cli::models::Money;

#[derive(Parser)]
#[command(
    name = "teller",
    version,
    about = "Interactive in-memory bank teller for the terminal",
    long_about = "teller is an interactive bank teller session. It keeps a \
                  small collection of savings and checking accounts in memory \
                  and drives deposits, withdrawals, interest accrual, and \
                  lookups through a numbered text menu. Nothing is written to \
                  disk; the ledger lives exactly as long as the session."
)]
struct Cli {
    /// Interest rate for new savings accounts (fractional, e.g. 0.02)
    #[arg(long, default_value = "0.02")]
    interest_rate: f64,

    /// Per-withdrawal limit for new checking accounts (e.g. "500.00")
    #[arg(long, default_value = "500")]
    withdrawal_limit: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let withdrawal_limit = Money::parse(&cli.withdrawal_limit)
        .map_err(|e| anyhow::anyhow!("invalid --withdrawal-limit: {}", e))?;

    let settings = Settings {
        interest_rate: cli.interest_rate,
        withdrawal_limit,
    };
    settings.validate()?;

    let mut bank = Bank::new(settings);
    let mut rng = rand::thread_rng();

    let stdin = io::stdin();
    let mut input = BufReader::new(stdin.lock());
    let mut output = io::stdout();

    menu::run(&mut bank, &mut rng, &mut input, &mut output)?;

    Ok(())
}
