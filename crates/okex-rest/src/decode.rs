//! Response decoding and error code resolution
//!
//! A body is read twice: once for its `error_code`, once for the
//! operation's success shape. A catalogued code becomes an
//! [`OkexApiError`]; codes without an entry (including `0`) mean success.

use crate::error::{RestError, RestResult};
use okex_types::{ErrorCodeValue, OkexApiError};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, Default, Deserialize)]
struct ErrorCodeHolder {
    #[serde(default)]
    error_code: Option<ErrorCodeValue>,
}

/// Both readings of a response body
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// Raw `error_code`, if the body carried one
    pub error_code: Option<ErrorCodeValue>,
    /// The code resolved against the catalog
    pub error: Option<OkexApiError>,
    /// Decoded success shape
    ///
    /// `None` only when the body failed to decode as `T` and carried a
    /// catalogued error.
    pub payload: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Check if the response indicates success
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Get the payload, returning the exchange error if there was one
    pub fn into_result(self) -> RestResult<T> {
        if let Some(error) = self.error {
            return Err(RestError::Api(error));
        }
        self.payload
            .ok_or_else(|| RestError::decode("response carried no payload", ""))
    }
}

/// Decode a raw response body into `T` and resolve its error code
///
/// # Errors
/// [`RestError::Decode`] when the body is not JSON, when `error_code` has an
/// unexpected type, or when `T` does not decode and no catalogued error
/// explains why.
pub fn decode_response<T: DeserializeOwned>(body: &str) -> RestResult<ApiResponse<T>> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| RestError::decode(e.to_string(), body))?;

    let holder = ErrorCodeHolder::deserialize(&value)
        .map_err(|e| RestError::decode(format!("error_code: {}", e), body))?;

    let error = holder.error_code.as_ref().and_then(OkexApiError::resolve);
    if let (Some(code), None) = (&holder.error_code, &error) {
        if !code.is_zero() {
            warn!(%code, "Unrecognized error code, treating as success");
        }
    }

    let payload = match T::deserialize(&value) {
        Ok(payload) => Some(payload),
        Err(e) if error.is_some() => {
            debug!(error = %e, "Payload did not decode alongside exchange error");
            None
        }
        Err(e) => return Err(RestError::decode(e.to_string(), body)),
    };

    Ok(ApiResponse {
        error_code: holder.error_code,
        error,
        payload,
    })
}
