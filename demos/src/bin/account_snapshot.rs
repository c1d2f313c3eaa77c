//! Demo 1: Account Snapshot
//!
//! Showcases: signed requests, balance decoding, exchange error reporting
//!
//! Run: OKEX_API_KEY=... OKEX_SECRET_KEY=... cargo run --bin account_snapshot

use colored::*;
use okex_rest::{OkexRestClient, RestError};
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  ACCOUNT SNAPSHOT".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = OkexRestClient::from_env()?;

    let info = match client.get_user_info().await {
        Ok(info) => info,
        Err(RestError::Api(error)) => {
            println!("{} Exchange rejected the request: {}", "✗".red(), error);
            if error.is_auth_error() {
                println!("  Check OKEX_API_KEY / OKEX_SECRET_KEY");
            }
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let funds = &info.info.funds;
    let currencies: BTreeSet<&String> = funds
        .free
        .keys()
        .chain(funds.freezed.keys())
        .chain(funds.borrow.keys())
        .collect();

    println!(
        "  {:<8} {:>18} {:>18} {:>18}",
        "CCY".yellow(),
        "FREE".yellow(),
        "FROZEN".yellow(),
        "BORROWED".yellow()
    );

    for currency in currencies {
        let free = info.free(currency);
        let frozen = info.frozen(currency);
        let borrowed = info.borrowed(currency);
        if free == Decimal::ZERO && frozen == Decimal::ZERO && borrowed == Decimal::ZERO {
            continue;
        }
        println!(
            "  {:<8} {:>18} {:>18} {:>18}",
            currency.to_uppercase(),
            free,
            frozen,
            borrowed
        );
    }

    Ok(())
}
