use anyhow::{Context, Result};
use std::env;

use ledger_kit::{BankAccount, Logger, LOG_LEVEL_ENV, VERSION};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        None | Some("demo") => {
            run_demo()?;
        }
        Some("statement") => {
            let account = run_demo()?;
            let statement = account
                .statement_json()
                .context("Failed to build account statement")?;
            println!("{}", statement);
        }
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Usage: ledger-kit [demo|statement]");
            std::process::exit(2);
        }
    }

    Ok(())
}

/// Deposit, withdraw, then try to overdraw, logging each step
fn run_demo() -> Result<BankAccount> {
    let logger = Logger::instance();

    if let Some(e) = logger.config_error() {
        logger.log_warning(&format!("{} ({}), using INFO", e, LOG_LEVEL_ENV));
    }

    logger.log_info(&format!(
        "ledger-kit v{} (log level {})",
        VERSION,
        logger.config().min_level
    ));

    let mut account = BankAccount::new();
    logger.log_info(&format!(
        "Opened account {} at {} with balance {:.2}",
        account.id(),
        account.opened_at().to_rfc3339(),
        account.balance()
    ));

    account.deposit(100.0).context("Initial deposit failed")?;
    logger.log_info(&format!("Deposited 100.00, balance {:.2}", account.balance()));

    account.withdraw(50.0).context("Withdrawal failed")?;
    logger.log_info(&format!("Withdrew 50.00, balance {:.2}", account.balance()));

    match account.withdraw(200.0) {
        Ok(()) => logger.log_warning("Overdraw unexpectedly accepted"),
        Err(e) => logger.log_error(&format!(
            "Withdrawal of 200.00 refused: {} (balance still {:.2})",
            e,
            account.balance()
        )),
    }

    if let Err(e) = account.deposit(-10.0) {
        logger.log_error(&format!("Deposit refused: {}", e));
    }

    for movement in account.movements() {
        logger.log_info(&format!(
            "{} {:.2} -> balance {:.2}",
            movement.kind.as_str(),
            movement.amount,
            movement.balance_after
        ));
    }

    logger.log_info(&format!(
        "Final balance {:.2} after {} movements",
        account.balance(),
        account.movements().len()
    ));

    Ok(account)
}
