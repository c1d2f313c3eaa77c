//! HTTP transport for signed form posts

use crate::error::{RestError, RestResult};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Posts form bodies to endpoints below a base URL
#[derive(Debug, Clone)]
pub struct Transport {
    http: Client,
    base_url: String,
}

impl Transport {
    /// Create a transport over an existing HTTP client
    ///
    /// A trailing `/` is added to `base_url` when missing so endpoint paths
    /// can be appended directly.
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { http, base_url }
    }

    /// Base URL every path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// POST a form-encoded body and return the response text
    ///
    /// Anything but a 200 is an error; the body is kept for diagnostics.
    pub async fn post_form(&self, path: &str, body: String) -> RestResult<String> {
        let url = self.url(path);
        debug!(%url, bytes = body.len(), "POST");

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(RestError::from_transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(%url, status = status.as_u16(), "Non-200 response");
            let body = response.text().await.unwrap_or_default();
            return Err(RestError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.text().await.map_err(RestError::from_transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let transport = Transport::new(Client::new(), "https://www.okex.com/api/v1");
        assert_eq!(transport.base_url(), "https://www.okex.com/api/v1/");
        assert_eq!(
            transport.url("trade.do"),
            "https://www.okex.com/api/v1/trade.do"
        );
        assert_eq!(
            transport.url("/userinfo.do"),
            "https://www.okex.com/api/v1/userinfo.do"
        );
    }
}
