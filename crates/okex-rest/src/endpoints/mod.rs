//! API endpoint implementations

pub mod account;
pub mod trading;

pub use account::AccountEndpoints;
pub use trading::TradingEndpoints;

use crate::decode::{decode_response, ApiResponse};
use crate::error::RestResult;
use crate::transport::Transport;
use okex_auth::RequestSigner;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Endpoint paths, relative to the API base URL
pub mod paths {
    /// Account balances
    pub const USER_INFO: &str = "userinfo.do";
    /// Place an order
    pub const TRADE: &str = "trade.do";
    /// Cancel an order
    pub const CANCEL_ORDER: &str = "cancel_order.do";
    /// Look up orders by ID
    pub const ORDER_INFO: &str = "order_info.do";
    /// Paginated order history
    pub const ORDER_HISTORY: &str = "order_history.do";
}

/// Sign the collected parameters, POST them and decode the body as `T`
pub(crate) async fn signed_post<T: DeserializeOwned>(
    transport: &Transport,
    signer: RequestSigner<'_>,
    path: &str,
) -> RestResult<ApiResponse<T>> {
    let params = signer.sign()?;
    let body = params.encode()?;

    debug!("Making authenticated request to {}", path);

    let raw = transport.post_form(path, body).await?;
    decode_response(&raw)
}
