use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use monetree::report::{build_report, print_report};
use monetree::utils::{redact_origin, setup_logging, validate_args};
use monetree::{Args, CalculatorConfig, SqliteProvider, StatsCalculator};

fn run(args: &Args) -> Result<()> {
    let provider = SqliteProvider::open(&args.database)?;
    let calculator =
        StatsCalculator::with_config(provider, CalculatorConfig::from_hourly_rate(args.rate_per_hour));

    if let Some(origin) = &args.origin {
        let payment = calculator.estimated_payment_for_origin_usd(origin);
        let display_origin = if args.redact {
            redact_origin(origin)
        } else {
            origin.to_string()
        };
        println!("{}: ~ ${}", display_origin, payment);
        return Ok(());
    }

    let mut report = build_report(&calculator, args.top, args.love);
    if args.redact {
        report = report.redacted();
    }

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    validate_args(&args)?;

    match run(&args) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
