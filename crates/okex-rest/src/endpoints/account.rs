//! Private account endpoints

use super::{paths, signed_post};
use crate::decode::ApiResponse;
use crate::error::RestResult;
use crate::transport::Transport;
use crate::types::UserInfo;
use okex_auth::{Credentials, RequestSigner};
use tracing::instrument;

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    transport: &'a Transport,
    credentials: &'a Credentials,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(transport: &'a Transport, credentials: &'a Credentials) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    /// Get account balances, keeping the raw error code alongside the payload
    #[instrument(skip(self))]
    pub async fn user_info_response(&self) -> RestResult<ApiResponse<UserInfo>> {
        let signer = RequestSigner::new(self.credentials);
        signed_post(self.transport, signer, paths::USER_INFO).await
    }

    /// Get account balances (borrowed, free, frozen per currency)
    pub async fn get_user_info(&self) -> RestResult<UserInfo> {
        self.user_info_response().await?.into_result()
    }
}
