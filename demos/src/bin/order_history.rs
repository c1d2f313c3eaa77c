//! Demo 2: Order History
//!
//! Showcases: paginated order history, order status decoding
//!
//! Run: cargo run --bin order_history -- btc_usd [filled|unfilled]

use chrono::DateTime;
use colored::*;
use okex_rest::{HistoryStatus, OkexRestClient, OrderStatus};
use tracing_subscriber::EnvFilter;

const PAGE_LENGTH: u32 = 50;
const MAX_PAGES: u32 = 10;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let symbol = args.next().unwrap_or_else(|| "btc_usd".to_string());
    let status = match args.next().as_deref() {
        Some("unfilled") => HistoryStatus::Unfilled,
        _ => HistoryStatus::Filled,
    };

    let client = OkexRestClient::from_env()?;

    println!("{} Order history for {} ({:?})\n", "✓".green(), symbol.bold(), status);

    let mut page = 1;
    loop {
        let history = client
            .get_order_history(&symbol, status, page, PAGE_LENGTH)
            .await?;

        for order in &history.orders {
            let when = DateTime::from_timestamp_millis(order.create_date)
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| "-".to_string());
            let state = match order.state() {
                Some(OrderStatus::Filled) => "filled".green(),
                Some(OrderStatus::Cancelled) => "cancelled".dimmed(),
                Some(OrderStatus::PartiallyFilled) => "partial".yellow(),
                Some(_) => "open".cyan(),
                None => "unknown".red(),
            };
            println!(
                "  {} #{:<12} {:<12} {:>14} @ {:<14} {}",
                when, order.order_id, order.order_type, order.amount, order.price, state
            );
        }

        if !history.has_more() || page >= MAX_PAGES {
            println!("\n  {} orders total", history.total);
            break;
        }
        page += 1;
    }

    Ok(())
}
