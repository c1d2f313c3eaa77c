//! REST API client for the OKEx v1 trading API
//!
//! This crate provides the authenticated trading operations of OKEx's v1
//! REST API: account balances, placing and cancelling orders, and order
//! lookups.
//!
//! # Features
//!
//! - **Account**: Borrowed, free and frozen balances per currency
//! - **Trading**: Place and cancel orders
//! - **Orders**: Look up orders by ID, page through order history
//!
//! # Authentication
//!
//! Every endpoint is private. Requests carry the API key and an MD5
//! signature over the sorted form parameters and the secret key.
//!
//! # Errors
//!
//! The exchange reports failures as a numeric `error_code` in the response
//! body. Catalogued codes surface as [`RestError::Api`]; transport failures,
//! non-200 statuses and undecodable bodies have their own variants.
//!
//! # Example
//!
//! ```no_run
//! use okex_rest::{HistoryStatus, OkexRestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OkexRestClient::from_env()?;
//!
//!     let history = client
//!         .get_order_history("btc_usd", HistoryStatus::Filled, 1, 50)
//!         .await?;
//!     println!("{} filled orders", history.total);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod decode;
pub mod endpoints;
pub mod error;
pub mod transport;
pub mod types;

// Re-export main types
pub use client::{ClientConfig, OkexRestClient, DEFAULT_BASE_URL};
pub use decode::{decode_response, ApiResponse};
pub use error::{RestError, RestResult};
pub use okex_auth::{AuthError, Credentials};
pub use okex_types::{HistoryStatus, OkexApiError, OrderStatus, OrderType};

// Re-export endpoint-specific types
pub use types::{AccountInfo, Funds, Order, OrderHistory, OrderInfo, Receipt, UserInfo};
