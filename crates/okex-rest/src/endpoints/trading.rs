//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use super::{paths, signed_post};
use crate::decode::ApiResponse;
use crate::error::{RestError, RestResult};
use crate::transport::Transport;
use crate::types::{OrderHistory, OrderInfo, Receipt};
use okex_auth::{Credentials, RequestSigner};
use okex_types::{HistoryStatus, OrderType};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// `order_id` value that selects every unfilled order in `order_info.do`
pub const ALL_UNFILLED: &str = "-1";

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    transport: &'a Transport,
    credentials: &'a Credentials,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(transport: &'a Transport, credentials: &'a Credentials) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    fn signer(&self) -> RequestSigner<'a> {
        RequestSigner::new(self.credentials)
    }

    /// Place an order
    ///
    /// # Arguments
    /// * `symbol` - Trading pair (e.g. "btc_usd")
    /// * `order_type` - Limit or market, buy or sell
    /// * `price` - Limit price, or quote total for a market buy (ignored for a market sell)
    /// * `amount` - Base quantity (ignored for a market buy)
    #[instrument(skip_all, fields(symbol = %symbol, order_type = %order_type, %price, %amount))]
    pub async fn trade_response(
        &self,
        symbol: &str,
        order_type: OrderType,
        price: Decimal,
        amount: Decimal,
    ) -> RestResult<ApiResponse<Receipt>> {
        validate_symbol(symbol)?;
        validate_order_values(order_type, price, amount)?;

        let price = price.normalize().to_string();
        let amount = amount.normalize().to_string();

        debug!("Placing {} order for {} {} at {}", order_type, amount, symbol, price);

        let signer = self
            .signer()
            .param("symbol", symbol)
            .param("type", order_type.as_str())
            .param("price", price)
            .param("amount", amount);

        signed_post(self.transport, signer, paths::TRADE).await
    }

    /// Place an order, see [`TradingEndpoints::trade_response`]
    pub async fn trade(
        &self,
        symbol: &str,
        order_type: OrderType,
        price: Decimal,
        amount: Decimal,
    ) -> RestResult<Receipt> {
        self.trade_response(symbol, order_type, price, amount)
            .await?
            .into_result()
    }

    /// Cancel an order
    ///
    /// # Arguments
    /// * `symbol` - Trading pair
    /// * `order_id` - Order ID (the exchange also accepts a comma-separated list)
    #[instrument(skip(self))]
    pub async fn cancel_order_response(
        &self,
        symbol: &str,
        order_id: &str,
    ) -> RestResult<ApiResponse<Receipt>> {
        validate_symbol(symbol)?;
        validate_order_id(order_id)?;

        debug!("Cancelling order {}", order_id);

        let signer = self
            .signer()
            .param("symbol", symbol)
            .param("order_id", order_id);

        signed_post(self.transport, signer, paths::CANCEL_ORDER).await
    }

    /// Cancel an order, see [`TradingEndpoints::cancel_order_response`]
    pub async fn cancel_order(&self, symbol: &str, order_id: &str) -> RestResult<Receipt> {
        self.cancel_order_response(symbol, order_id)
            .await?
            .into_result()
    }

    /// Look up orders by ID
    ///
    /// # Arguments
    /// * `symbol` - Trading pair
    /// * `order_id` - Order ID, or [`ALL_UNFILLED`]
    #[instrument(skip(self))]
    pub async fn order_info_response(
        &self,
        symbol: &str,
        order_id: &str,
    ) -> RestResult<ApiResponse<OrderInfo>> {
        validate_symbol(symbol)?;
        validate_order_id(order_id)?;

        let signer = self
            .signer()
            .param("symbol", symbol)
            .param("order_id", order_id);

        signed_post(self.transport, signer, paths::ORDER_INFO).await
    }

    /// Look up orders by ID, see [`TradingEndpoints::order_info_response`]
    pub async fn get_order_info(&self, symbol: &str, order_id: &str) -> RestResult<OrderInfo> {
        self.order_info_response(symbol, order_id)
            .await?
            .into_result()
    }

    /// Get a page of order history
    ///
    /// # Arguments
    /// * `symbol` - Trading pair
    /// * `status` - Unfilled or filled orders
    /// * `current_page` - Page to fetch
    /// * `page_length` - Orders per page (must be non-zero)
    #[instrument(skip(self))]
    pub async fn order_history_response(
        &self,
        symbol: &str,
        status: HistoryStatus,
        current_page: u32,
        page_length: u32,
    ) -> RestResult<ApiResponse<OrderHistory>> {
        validate_symbol(symbol)?;
        if page_length == 0 {
            return Err(RestError::InvalidParameter(
                "page_length must be greater than zero".to_string(),
            ));
        }

        let signer = self
            .signer()
            .param("symbol", symbol)
            .param("status", status.as_str())
            .param("current_page", current_page.to_string())
            .param("page_length", page_length.to_string());

        signed_post(self.transport, signer, paths::ORDER_HISTORY).await
    }

    /// Get a page of order history, see [`TradingEndpoints::order_history_response`]
    pub async fn get_order_history(
        &self,
        symbol: &str,
        status: HistoryStatus,
        current_page: u32,
        page_length: u32,
    ) -> RestResult<OrderHistory> {
        self.order_history_response(symbol, status, current_page, page_length)
            .await?
            .into_result()
    }
}

fn validate_symbol(symbol: &str) -> RestResult<()> {
    if symbol.trim().is_empty() {
        return Err(RestError::InvalidParameter("symbol is empty".to_string()));
    }
    Ok(())
}

fn validate_order_id(order_id: &str) -> RestResult<()> {
    if order_id.trim().is_empty() {
        return Err(RestError::InvalidParameter("order_id is empty".to_string()));
    }
    Ok(())
}

/// Only the fields the order type reads must be positive: a market buy is sized
/// by `price`, a market sell by `amount`.
fn validate_order_values(order_type: OrderType, price: Decimal, amount: Decimal) -> RestResult<()> {
    match order_type {
        OrderType::BuyMarket => validate_positive("price", price),
        OrderType::SellMarket => validate_positive("amount", amount),
        OrderType::Buy | OrderType::Sell => {
            validate_positive("price", price)?;
            validate_positive("amount", amount)
        }
    }
}

fn validate_positive(name: &str, value: Decimal) -> RestResult<()> {
    if value <= Decimal::ZERO {
        return Err(RestError::InvalidParameter(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    Ok(())
}
