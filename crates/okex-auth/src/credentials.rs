//! API credentials for authenticated OKEx requests
//!
//! # Security
//!
//! The secret key is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use secrecy::{ExposeSecret, SecretString};

use crate::error::{AuthError, AuthResult};
use crate::params::RequestParams;
use crate::signer::{canonicalize, md5_sign};

/// API credentials for authenticated requests
///
/// Never mutated after construction, so one instance can be shared by any
/// number of in-flight requests.
pub struct Credentials {
    /// API key (sent with every request)
    api_key: String,
    /// Secret key (only ever hashed, zeroized on drop)
    secret_key: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and a secret key
    ///
    /// # Returns
    /// Result containing Credentials or error if either key is empty
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> AuthResult<Self> {
        let api_key = api_key.into();
        let secret_key = secret_key.into();

        if api_key.trim().is_empty() {
            return Err(AuthError::InvalidCredentials("API key is empty".to_string()));
        }
        if secret_key.is_empty() {
            return Err(AuthError::InvalidCredentials("secret key is empty".to_string()));
        }

        Ok(Self {
            api_key,
            secret_key: SecretString::from(secret_key),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `OKEX_API_KEY` and `OKEX_SECRET_KEY` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var("OKEX_API_KEY")
            .map_err(|_| AuthError::EnvVarNotSet("OKEX_API_KEY".to_string()))?;
        let secret_key = std::env::var("OKEX_SECRET_KEY")
            .map_err(|_| AuthError::EnvVarNotSet("OKEX_SECRET_KEY".to_string()))?;

        Self::new(api_key, secret_key)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Compute the signature for a parameter set
    ///
    /// OKEx v1 signature algorithm:
    /// 1. Form-encode the parameters in sorted key order
    /// 2. Append `&secret_key=<secret>` (the secret is not encoded)
    /// 3. URL-decode the whole string back to literal characters
    /// 4. MD5, hex-encode, upper-case
    ///
    /// A `sign` entry already present in `params` is part of the payload, so
    /// call this on unsigned parameters.
    pub fn sign(&self, params: &RequestParams) -> AuthResult<String> {
        let encoded = params.encode()?;
        let canonical = canonicalize(&encoded, self.secret_key.expose_secret())?;
        Ok(md5_sign(&canonical))
    }

    /// Sign `params` in place by setting its `sign` field
    pub fn sign_params(&self, params: &mut RequestParams) -> AuthResult<()> {
        let signature = self.sign(params)?;
        params.set("sign", signature);
        Ok(())
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            secret_key: SecretString::from(self.secret_key.expose_secret().to_owned()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.api_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", prefix))
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trade_params() -> RequestParams {
        [
            ("api_key", "abc"),
            ("symbol", "btc_usd"),
            ("type", "buy"),
            ("price", "100.5"),
            ("amount", "0.01"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_known_signature() {
        let creds = Credentials::new("abc", "secret").unwrap();

        // md5("amount=0.01&api_key=abc&price=100.5&symbol=btc_usd&type=buy&secret_key=secret")
        assert_eq!(
            creds.sign(&trade_params()).unwrap(),
            "D85E42B5689D93E57115C39B7406F02C"
        );
    }

    #[test]
    fn test_signature_over_decoded_payload() {
        let creds = Credentials::new("abc", "s3cr3t").unwrap();
        let mut params = RequestParams::new();
        params.set("api_key", "abc");
        params.set("note", "a b+c&d");

        // md5("api_key=abc&note=a b+c&d&secret_key=s3cr3t")
        assert_eq!(
            creds.sign(&params).unwrap(),
            "1850DE2AB9A1FD2BE8ACFC67AC929296"
        );
    }

    #[test]
    fn test_signing_is_deterministic() {
        let creds = Credentials::new("abc", "secret").unwrap();
        let first = creds.sign(&trade_params()).unwrap();
        let second = creds.sign(&trade_params()).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 32);
        assert!(first.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_sign_params_sets_sign_field() {
        let creds = Credentials::new("abc", "secret").unwrap();
        let mut params = RequestParams::new();
        params.set("api_key", "abc");

        creds.sign_params(&mut params).unwrap();

        // md5("api_key=abc&secret_key=secret")
        assert_eq!(params.get("sign"), Some("95F8FD4A2A582F3FC9202F07BF2AC54F"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_malformed_secret_escape_fails() {
        let creds = Credentials::new("abc", "bad%zzsecret").unwrap();
        let result = creds.sign(&trade_params());
        assert!(matches!(result, Err(AuthError::Canonicalize(_))));
    }

    #[test]
    fn test_empty_keys_rejected() {
        assert!(matches!(
            Credentials::new("", "secret"),
            Err(AuthError::InvalidCredentials(_))
        ));
        assert!(matches!(
            Credentials::new("abc", ""),
            Err(AuthError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("test_api_key_123", "very_secret_value").unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("very_secret_value"));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("test_api"));
    }
}
