use anyhow::{Context, Result};
use bigdecimal::BigDecimal;
use std::env;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bank_model::{load_debit_cases, money, Account, Bank, CaseOutcome, Settings, VERSION};

fn main() -> Result<()> {
    let settings = Settings::from_env();
    init_tracing(&settings);

    info!(version = VERSION, environment = ?settings.environment, "bank-model starting");

    let args: Vec<String> = env::args().collect();

    if args.len() > 2 && args[1] == "replay" {
        // Replay mode
        let failures = run_replay(Path::new(&args[2]))?;
        if failures > 0 {
            std::process::exit(1);
        }
    } else {
        // Reference scenario (default)
        run_transfer_demo()?;
    }

    Ok(())
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_new(&settings.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(bank_model::config::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_transfer_demo() -> Result<()> {
    println!("🏦 Transfer: JOHN DOE → ARIAN DOE");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let john = Account::new("John Doe", money::parse("2500")?).into_shared();
    let arian = Account::new("Arian Doe", money::parse("1500.8989")?).into_shared();

    let mut bank = Bank::with_name("Banco del estado");
    bank.add_account(&john);
    bank.add_account(&arian);

    bank.transfer_between(&john, &arian, &BigDecimal::from(500))?;

    let snapshot = serde_json::to_string_pretty(&bank.snapshot())
        .context("Failed to serialize bank snapshot")?;
    println!("{}", snapshot);
    println!("\n✓ Total held: {}", bank.total_balance());

    Ok(())
}

fn run_replay(csv_path: &Path) -> Result<usize> {
    println!("📂 Replaying debit cases from {:?}", csv_path);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let cases = load_debit_cases(csv_path)?;
    let mut failures = 0;

    for (index, case) in cases.iter().enumerate() {
        let line = match case.check() {
            CaseOutcome::Passed(account) => {
                format!("✓ #{} {} → {}", index + 1, case.amount, account.balance())
            }
            CaseOutcome::NameMismatch(account) => {
                failures += 1;
                format!(
                    "✗ #{} expected {} but account holder is {}",
                    index + 1,
                    case.expected,
                    account.person()
                )
            }
            CaseOutcome::NonPositiveBalance(account) => {
                failures += 1;
                format!("✗ #{} balance ended at {}", index + 1, account.balance())
            }
            CaseOutcome::Rejected(err) => {
                failures += 1;
                format!("✗ #{} {} (short by {})", index + 1, err, err.shortfall())
            }
        };
        println!("{}", line);
    }

    println!("\n{} cases, {} failed", cases.len(), failures);
    Ok(failures)
}
