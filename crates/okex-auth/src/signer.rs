//! Signature computation and per-request signer

use md5::{Digest, Md5};
use tracing::trace;

use crate::credentials::Credentials;
use crate::error::{AuthError, AuthResult};
use crate::params::RequestParams;

/// Build the canonical signing string
///
/// Appends `&secret_key=<secret>` to the form-encoded parameters and decodes
/// the result: `+` becomes a space and every `%XX` escape becomes its byte.
/// The decode runs over the whole string, including the raw secret, and
/// yields raw bytes: an escape such as `%FF` need not decode to UTF-8.
pub fn canonicalize(encoded: &str, secret: &str) -> AuthResult<Vec<u8>> {
    let payload = format!("{}&secret_key={}", encoded, secret);
    query_unescape(&payload)
}

/// Upper-case hex MD5 of `payload`
pub fn md5_sign(payload: impl AsRef<[u8]>) -> String {
    hex::encode_upper(Md5::digest(payload.as_ref()))
}

fn query_unescape(s: &str) -> AuthResult<Vec<u8>> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return Err(AuthError::Canonicalize(format!(
                    "invalid percent escape at byte {}",
                    i
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    let spaced = s.replace('+', " ");
    Ok(urlencoding::decode_binary(spaced.as_bytes()).into_owned())
}

/// Request signer for building authenticated requests
///
/// Starts from a parameter set holding the API key; callers add the
/// operation's fields and finish with [`RequestSigner::sign`].
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    params: RequestParams,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer
    pub fn new(credentials: &'a Credentials) -> Self {
        let mut params = RequestParams::new();
        params.set("api_key", credentials.api_key());
        Self { credentials, params }
    }

    /// Add a parameter
    pub fn param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.set(key, value);
        self
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Parameters collected so far
    pub fn params(&self) -> &RequestParams {
        &self.params
    }

    /// Sign and return the parameters with `sign` attached
    pub fn sign(mut self) -> AuthResult<RequestParams> {
        self.credentials.sign_params(&mut self.params)?;
        trace!(fields = self.params.len(), "Signed request parameters");
        Ok(self.params)
    }
}
