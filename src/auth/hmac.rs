//! HMAC-SHA256 signing.
//!
//! # Example
//!
//! ```rust
//! use instagram_api::auth::hmac::compute_signature;
//!
//! let signature = compute_signature("67.79.8.126", "my-client-secret");
//! assert_eq!(signature.len(), 64);
//! assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
//! ```

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Computes an HMAC-SHA256 signature of `message` keyed by `secret`.
///
/// The signature is returned as a lowercase hexadecimal string.
///
/// # Note
///
/// This function uses `expect()` internally but this will never panic because
/// HMAC-SHA256 accepts keys of any length.
#[must_use]
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub fn compute_signature(message: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
