//! OrderType, HistoryStatus, and OrderStatus enums

use serde::{Deserialize, Serialize};

/// Order type accepted by `trade.do`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Limit buy
    Buy,
    /// Limit sell
    Sell,
    /// Market buy, `price` is the total quote amount to spend
    BuyMarket,
    /// Market sell, `amount` is the base quantity to sell
    SellMarket,
}

impl OrderType {
    /// Returns the order type as used in request parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::BuyMarket => "buy_market",
            Self::SellMarket => "sell_market",
        }
    }

    /// Returns true for the two market variants
    pub fn is_market(&self) -> bool {
        matches!(self, Self::BuyMarket | Self::SellMarket)
    }

    /// Returns true for the buy side
    pub fn is_buy(&self) -> bool {
        matches!(self, Self::Buy | Self::BuyMarket)
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            "buy_market" => Ok(Self::BuyMarket),
            "sell_market" => Ok(Self::SellMarket),
            other => Err(format!("unknown order type: {}", other)),
        }
    }
}

/// Filter for `order_history.do`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HistoryStatus {
    /// Orders that are not yet completely filled
    #[default]
    Unfilled,
    /// Completely filled orders
    Filled,
}

impl HistoryStatus {
    /// Wire value sent as the `status` parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unfilled => "0",
            Self::Filled => "1",
        }
    }
}

impl std::fmt::Display for HistoryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order state as reported in the `status` field of an order record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// -1
    Cancelled,
    /// 0
    Unfilled,
    /// 1
    PartiallyFilled,
    /// 2
    Filled,
    /// 3 or 4
    CancelInProgress,
}

impl OrderStatus {
    /// Map the exchange's numeric status
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::Cancelled),
            0 => Some(Self::Unfilled),
            1 => Some(Self::PartiallyFilled),
            2 => Some(Self::Filled),
            3 | 4 => Some(Self::CancelInProgress),
            _ => None,
        }
    }

    /// Returns true if the order can still trade
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Unfilled | Self::PartiallyFilled)
    }
}
