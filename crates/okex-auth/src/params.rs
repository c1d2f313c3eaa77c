//! Form parameters for a single request

use std::collections::BTreeMap;

use crate::error::{AuthError, AuthResult};

/// Request parameters, kept sorted by name
///
/// Sorted order makes the signing payload independent of insertion order,
/// which is what the exchange expects when it recomputes the signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    inner: BTreeMap<String, String>,
}

impl RequestParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), value.into());
    }

    /// Get a parameter value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    /// Check if a parameter is present
    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if no parameters are set
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate parameters in sorted order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Form-encode the parameters (`application/x-www-form-urlencoded`)
    pub fn encode(&self) -> AuthResult<String> {
        serde_urlencoded::to_string(&self.inner).map_err(|e| AuthError::Encode(e.to_string()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}
