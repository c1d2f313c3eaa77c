//! Main REST client implementation

use crate::endpoints::{AccountEndpoints, TradingEndpoints};
use crate::error::RestResult;
use crate::transport::Transport;
use crate::types::{OrderHistory, OrderInfo, Receipt, UserInfo};
use okex_auth::Credentials;
use okex_types::{HistoryStatus, OrderType};
use reqwest::Client;
use rust_decimal::Decimal;
use std::time::Duration;
use tracing::info;

/// Production API base URL
pub const DEFAULT_BASE_URL: &str = "https://www.okex.com/api/v1/";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// OKEx v1 REST API client
///
/// Holds read-only credentials and an HTTP client; every operation is one
/// signed POST. The client is cheap to clone and safe to share between tasks.
///
/// # Example
///
/// ```no_run
/// use okex_rest::{OkexRestClient, OrderType};
/// use rust_decimal_macros::dec;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = OkexRestClient::new("my-api-key", "my-secret-key")?;
///
///     let info = client.get_user_info().await?;
///     println!("Free BTC: {}", info.free("btc"));
///
///     let receipt = client
///         .trade("btc_usd", OrderType::Buy, dec!(100.5), dec!(0.01))
///         .await?;
///     println!("Order ID: {}", receipt.order_id);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct OkexRestClient {
    transport: Transport,
    credentials: Credentials,
}

impl OkexRestClient {
    /// Create a client for the production API from an API key and secret key
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> RestResult<Self> {
        let credentials = Credentials::new(api_key, secret_key)?;
        Self::with_credentials(credentials)
    }

    /// Create a client for the production API
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::new(credentials))
    }

    /// Create a client from environment variables
    ///
    /// Reads `OKEX_API_KEY` and `OKEX_SECRET_KEY`.
    pub fn from_env() -> RestResult<Self> {
        Self::with_credentials(Credentials::from_env()?)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_deref().unwrap_or("okex-rest/0.1.0"))
            .build()?;

        info!(base_url = %config.base_url, "Created OKEx REST client");

        Ok(Self {
            transport: Transport::new(http_client, config.base_url),
            credentials: config.credentials,
        })
    }

    /// The API key requests are sent with
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// The base URL requests are sent to
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    // ========================================================================
    // Account Endpoints
    // ========================================================================

    /// Get account endpoints
    pub fn account(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(&self.transport, &self.credentials)
    }

    /// Get account balances
    pub async fn get_user_info(&self) -> RestResult<UserInfo> {
        self.account().get_user_info().await
    }

    // ========================================================================
    // Trading Endpoints
    // ========================================================================

    /// Get trading endpoints
    pub fn trading(&self) -> TradingEndpoints<'_> {
        TradingEndpoints::new(&self.transport, &self.credentials)
    }

    /// Place an order
    ///
    /// # Arguments
    /// * `symbol` - Trading pair (e.g. "btc_usd")
    /// * `order_type` - Buy, sell, or their market variants
    /// * `price` - Limit price
    /// * `amount` - Quantity
    pub async fn trade(
        &self,
        symbol: &str,
        order_type: OrderType,
        price: Decimal,
        amount: Decimal,
    ) -> RestResult<Receipt> {
        self.trading().trade(symbol, order_type, price, amount).await
    }

    /// Cancel an order
    pub async fn cancel_order(&self, symbol: &str, order_id: &str) -> RestResult<Receipt> {
        self.trading().cancel_order(symbol, order_id).await
    }

    /// Look up an order
    pub async fn get_order_info(&self, symbol: &str, order_id: &str) -> RestResult<OrderInfo> {
        self.trading().get_order_info(symbol, order_id).await
    }

    /// Get a page of order history
    pub async fn get_order_history(
        &self,
        symbol: &str,
        status: HistoryStatus,
        current_page: u32,
        page_length: u32,
    ) -> RestResult<OrderHistory> {
        self.trading()
            .get_order_history(symbol, status, current_page, page_length)
            .await
    }
}

impl std::fmt::Debug for OkexRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OkexRestClient")
            .field("base_url", &self.transport.base_url())
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials
    pub credentials: Credentials,
    /// Base URL endpoint paths are appended to
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a configuration with production defaults
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
