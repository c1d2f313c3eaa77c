//! Demo 3: Error Code Lookup
//!
//! Showcases: the offline error catalog
//!
//! Run: cargo run --bin error_lookup -- 10001 20024 1203

use colored::*;
use okex_types::{ErrorCodeValue, OkexApiError};

fn main() {
    let codes: Vec<String> = std::env::args().skip(1).collect();
    if codes.is_empty() {
        println!("usage: error_lookup <code>...");
        return;
    }

    for raw in codes {
        let value = match raw.parse::<i64>() {
            Ok(n) => ErrorCodeValue::Number(n),
            Err(_) => ErrorCodeValue::Text(raw.clone()),
        };

        match OkexApiError::resolve(&value) {
            Some(error) => {
                let mut tags = Vec::new();
                if error.is_rate_limit() {
                    tags.push("rate-limit");
                }
                if error.is_auth_error() {
                    tags.push("auth");
                }
                println!(
                    "{} {:<8} {:?} {} {}",
                    "✓".green(),
                    raw,
                    error.category,
                    error.description,
                    tags.join(",").dimmed()
                );
            }
            None => println!("{} {:<8} not in catalog (treated as success)", "·".dimmed(), raw),
        }
    }
}
