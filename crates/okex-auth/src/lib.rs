//! Credentials and request signing for the OKEx v1 REST API
//!
//! Every private OKEx v1 call carries an `api_key` and a `sign` form field.
//! The signature is an upper-case MD5 over the sorted, form-encoded
//! parameters with `&secret_key=<secret>` appended, URL-decoded back to
//! literal characters before hashing.
//!
//! # Example
//!
//! ```no_run
//! use okex_auth::{Credentials, RequestSigner};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!
//!     let params = RequestSigner::new(&creds)
//!         .param("symbol", "btc_usd")
//!         .param("order_id", "12345")
//!         .sign()?;
//!
//!     println!("POST body: {}", params.encode()?);
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod params;
mod signer;

pub use credentials::Credentials;
pub use error::{AuthError, AuthResult};
pub use params::RequestParams;
pub use signer::{canonicalize, md5_sign, RequestSigner};
