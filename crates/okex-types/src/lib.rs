//! Shared types for the OKEx v1 REST API
//!
//! This crate holds the pieces of the OKEx client that have no I/O:
//! the exchange's error code catalog and the enums used to build and read
//! order requests.
//!
//! # Key Types
//!
//! - [`OkexApiError`] - An `error_code` resolved to a description
//! - [`ErrorCodeValue`] - Raw `error_code` as found on the wire
//! - [`OrderType`], [`HistoryStatus`], [`OrderStatus`] - Order enums

pub mod enums;
pub mod error_codes;

pub use enums::*;
pub use error_codes::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
