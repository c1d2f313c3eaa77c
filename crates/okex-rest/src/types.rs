//! Types for OKEx v1 REST responses
//!
//! Every field defaults when absent or `null`. Error bodies such as
//! `{"result":false,"error_code":10009}` still decode into the success shape,
//! and the decoder pairs them with the resolved error.

use okex_types::{OrderStatus, OrderType};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Account
// ============================================================================

/// Response of `userinfo.do`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserInfo {
    /// Whether the request succeeded
    #[serde(deserialize_with = "null_as_default")]
    pub result: bool,
    /// Account details
    #[serde(deserialize_with = "null_as_default")]
    pub info: AccountInfo,
}

/// Account details of a [`UserInfo`]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AccountInfo {
    /// Per-currency balances
    #[serde(deserialize_with = "null_as_default")]
    pub funds: Funds,
}

/// Balances keyed by currency (e.g. "btc", "usd")
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Funds {
    /// Borrowed amounts
    #[serde(deserialize_with = "null_as_default")]
    pub borrow: HashMap<String, Decimal>,
    /// Available amounts
    #[serde(deserialize_with = "null_as_default")]
    pub free: HashMap<String, Decimal>,
    /// Amounts frozen in open orders
    #[serde(alias = "frozen", deserialize_with = "null_as_default")]
    pub freezed: HashMap<String, Decimal>,
}

impl UserInfo {
    /// Available balance of a currency
    pub fn free(&self, currency: &str) -> Decimal {
        Self::amount(&self.info.funds.free, currency)
    }

    /// Frozen balance of a currency
    pub fn frozen(&self, currency: &str) -> Decimal {
        Self::amount(&self.info.funds.freezed, currency)
    }

    /// Borrowed balance of a currency
    pub fn borrowed(&self, currency: &str) -> Decimal {
        Self::amount(&self.info.funds.borrow, currency)
    }

    /// Free plus frozen balance of a currency
    pub fn total(&self, currency: &str) -> Decimal {
        self.free(currency) + self.frozen(currency)
    }

    fn amount(balances: &HashMap<String, Decimal>, currency: &str) -> Decimal {
        balances
            .get(&currency.to_lowercase())
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}

// ============================================================================
// Trading
// ============================================================================

/// Result of `trade.do` and `cancel_order.do`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Receipt {
    /// Whether the action was accepted
    #[serde(deserialize_with = "null_as_default")]
    pub result: bool,
    /// Order the action applied to
    #[serde(deserialize_with = "null_as_default")]
    pub order_id: i64,
}

impl Receipt {
    /// Returns true if the exchange accepted the action
    pub fn is_success(&self) -> bool {
        self.result && self.order_id != 0
    }
}

/// A single order record
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Order {
    /// Order quantity
    #[serde(deserialize_with = "null_as_default")]
    pub amount: Decimal,
    /// Average fill price
    #[serde(deserialize_with = "null_as_default")]
    pub avg_price: Decimal,
    /// Creation time (milliseconds since epoch)
    #[serde(deserialize_with = "null_as_default")]
    pub create_date: i64,
    /// Filled quantity
    #[serde(deserialize_with = "null_as_default")]
    pub deal_amount: Decimal,
    /// Order ID
    #[serde(deserialize_with = "null_as_default")]
    pub order_id: i64,
    /// Order ID (legacy field, same value as `order_id`)
    #[serde(deserialize_with = "null_as_default")]
    pub orders_id: i64,
    /// Limit price
    #[serde(deserialize_with = "null_as_default")]
    pub price: Decimal,
    /// Numeric status, see [`Order::state`]
    #[serde(deserialize_with = "null_as_default")]
    pub status: i32,
    /// Trading pair (e.g. "btc_usd")
    #[serde(deserialize_with = "null_as_default")]
    pub symbol: String,
    /// Order type as sent by the exchange (e.g. "buy", "sell_market")
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub order_type: String,
}

impl Order {
    /// Decoded order status
    pub fn state(&self) -> Option<OrderStatus> {
        OrderStatus::from_code(self.status)
    }

    /// Decoded order type
    pub fn side(&self) -> Option<OrderType> {
        self.order_type.parse().ok()
    }

    /// Quantity not yet filled
    pub fn remaining(&self) -> Decimal {
        (self.amount - self.deal_amount).max(Decimal::ZERO)
    }
}

/// Response of `order_info.do`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrderInfo {
    /// Whether the request succeeded
    #[serde(deserialize_with = "null_as_default")]
    pub result: bool,
    /// Matching orders
    #[serde(deserialize_with = "null_as_default")]
    pub orders: Vec<Order>,
}

/// Response of `order_history.do`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrderHistory {
    /// Whether the request succeeded
    #[serde(deserialize_with = "null_as_default")]
    pub result: bool,
    /// Total number of matching orders
    #[serde(deserialize_with = "null_as_default")]
    pub total: u64,
    /// Page returned (the exchange spells it `currency_page`)
    #[serde(deserialize_with = "null_as_default")]
    pub currency_page: u32,
    /// Orders per page
    #[serde(deserialize_with = "null_as_default")]
    pub page_length: u32,
    /// Orders on this page
    #[serde(deserialize_with = "null_as_default")]
    pub orders: Vec<Order>,
}

impl OrderHistory {
    /// Returns true if pages after this one hold more orders
    pub fn has_more(&self) -> bool {
        u64::from(self.currency_page) * u64::from(self.page_length) < self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_user_info_accessors() {
        let json = r#"{
            "result": true,
            "info": {
                "funds": {
                    "free": {"btc": "0.5", "usd": "1200.25"},
                    "freezed": {"btc": "0.1"},
                    "borrow": {"usd": "100"}
                }
            }
        }"#;

        let info: UserInfo = serde_json::from_str(json).unwrap();
        assert!(info.result);
        assert_eq!(info.free("btc"), dec!(0.5));
        assert_eq!(info.free("USD"), dec!(1200.25));
        assert_eq!(info.frozen("btc"), dec!(0.1));
        assert_eq!(info.borrowed("usd"), dec!(100));
        assert_eq!(info.total("btc"), dec!(0.6));
        assert_eq!(info.free("ltc"), Decimal::ZERO);
    }

    #[test]
    fn test_order_decodes_numbers_and_strings() {
        let json = r#"{
            "amount": 0.1,
            "avg_price": 0,
            "create_date": 1418008467000,
            "deal_amount": "0.04",
            "order_id": 10000591,
            "orders_id": 10000591,
            "price": 500,
            "status": 1,
            "symbol": "btc_usd",
            "type": "sell"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.amount, dec!(0.1));
        assert_eq!(order.price, dec!(500));
        assert_eq!(order.remaining(), dec!(0.06));
        assert_eq!(order.state(), Some(OrderStatus::PartiallyFilled));
        assert_eq!(order.side(), Some(OrderType::Sell));
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let json = r#"{
            "amount": "1",
            "avg_price": null,
            "create_date": null,
            "deal_amount": null,
            "order_id": 7,
            "orders_id": null,
            "price": 250,
            "status": null,
            "symbol": "btc_usd",
            "type": null
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.avg_price, Decimal::ZERO);
        assert_eq!(order.deal_amount, Decimal::ZERO);
        assert_eq!(order.remaining(), dec!(1));
        assert_eq!(order.order_id, 7);
        assert_eq!(order.state(), Some(OrderStatus::Unfilled));
        assert_eq!(order.side(), None);

        let info: UserInfo =
            serde_json::from_str(r#"{"result":true,"info":{"funds":{"free":null,"freezed":{"btc":"0.1"}}}}"#)
                .unwrap();
        assert_eq!(info.free("btc"), Decimal::ZERO);
        assert_eq!(info.frozen("btc"), dec!(0.1));
    }

    #[test]
    fn test_receipt_from_error_body() {
        let receipt: Receipt = serde_json::from_str(r#"{"result":false,"error_code":10009}"#).unwrap();
        assert!(!receipt.result);
        assert_eq!(receipt.order_id, 0);
        assert!(!receipt.is_success());
    }

    #[test]
    fn test_history_pagination() {
        let history = OrderHistory {
            result: true,
            total: 45,
            currency_page: 2,
            page_length: 20,
            orders: Vec::new(),
        };
        assert!(history.has_more());

        let last = OrderHistory {
            currency_page: 3,
            ..history
        };
        assert!(!last.has_more());
    }
}
