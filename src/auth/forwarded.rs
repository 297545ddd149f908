//! Signed `X-Insta-Forwarded-For` header support.
//!
//! Server-side callers that act on behalf of a user can prove the user's
//! address by sending `X-Insta-Forwarded-For: {ip}|{signature}`, where the
//! signature is the hex HMAC-SHA256 of the address keyed by the client secret.
//!
//! [`HttpClient`](crate::HttpClient) attaches the header to mutating requests
//! when [`ClientConfig::forwarded_for`](crate::ClientConfig::forwarded_for) is
//! set. [`lookup_external_ip`] discovers the caller's public address for it.
//!
//! # Example
//!
//! ```rust,ignore
//! use instagram_api::auth::forwarded::{lookup_external_ip, RetryPolicy};
//! use instagram_api::clients::ReqwestTransport;
//! use instagram_api::{ClientConfig, ClientSecret};
//!
//! let ip = lookup_external_ip(&ReqwestTransport::new(), &RetryPolicy::default()).await?;
//! let config = ClientConfig::builder()
//!     .client_secret(ClientSecret::new("secret").unwrap())
//!     .forwarded_for(ip)
//!     .build()?;
//! ```

use std::collections::BTreeMap;
use std::net::IpAddr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::auth::hmac::compute_signature;
use crate::clients::{HttpMethod, HttpRequest, HttpTransport};

/// Name of the signed forwarding header.
pub const FORWARDED_FOR_HEADER: &str = "X-Insta-Forwarded-For";

/// Service that echoes the caller's public address as plain text.
pub const EXTERNAL_IP_ENDPOINT: &str = "http://myexternalip.com/raw";

/// Formats the `X-Insta-Forwarded-For` value for `ip`.
///
/// ```rust
/// use instagram_api::auth::forwarded::forwarded_for_header;
///
/// let value = forwarded_for_header("67.79.8.126".parse().unwrap(), "secret");
/// let (ip, signature) = value.split_once('|').unwrap();
/// assert_eq!(ip, "67.79.8.126");
/// assert_eq!(signature.len(), 64);
/// ```
#[must_use]
pub fn forwarded_for_header(ip: IpAddr, secret: &str) -> String {
    let ip = ip.to_string();
    let signature = compute_signature(&ip, secret);
    format!("{ip}|{signature}")
}

/// Bounds for [`lookup_external_ip`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first. Zero behaves as one.
    pub max_attempts: u32,
    /// Fixed wait between attempts.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_secs(1),
        }
    }
}

/// Errors returned by [`lookup_external_ip`].
#[derive(Debug, Error)]
pub enum ExternalIpError {
    /// Every attempt failed to produce a 200 response.
    #[error("External IP lookup failed after {attempts} attempts: {last_error}")]
    MaxRetries {
        /// Number of attempts made.
        attempts: u32,
        /// Description of the final failure.
        last_error: String,
    },

    /// The service answered, but not with an IP address.
    #[error("External IP service returned an invalid address: {body:?}")]
    InvalidAddress {
        /// The trimmed response body.
        body: String,
    },

    /// The lookup endpoint is not a valid URL.
    #[error("Invalid external IP endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        /// The endpoint that was provided.
        endpoint: String,
        /// The underlying URL parse error.
        #[source]
        source: url::ParseError,
    },
}

/// Resolves the caller's public address via [`EXTERNAL_IP_ENDPOINT`].
///
/// # Errors
///
/// See [`lookup_external_ip_at`].
pub async fn lookup_external_ip(
    transport: &dyn HttpTransport,
    policy: &RetryPolicy,
) -> Result<IpAddr, ExternalIpError> {
    lookup_external_ip_at(transport, EXTERNAL_IP_ENDPOINT, policy).await
}

/// Resolves the caller's public address from a plain-text echo service.
///
/// Transport failures and non-200 statuses are retried up to
/// `policy.max_attempts` times with `policy.backoff` between attempts. A 200
/// body that is not an address fails immediately.
///
/// # Errors
///
/// - [`ExternalIpError::InvalidEndpoint`] if `endpoint` does not parse
/// - [`ExternalIpError::MaxRetries`] once every attempt has failed
/// - [`ExternalIpError::InvalidAddress`] if the body is not an IP address
pub async fn lookup_external_ip_at(
    transport: &dyn HttpTransport,
    endpoint: &str,
    policy: &RetryPolicy,
) -> Result<IpAddr, ExternalIpError> {
    let url = Url::parse(endpoint).map_err(|source| ExternalIpError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        source,
    })?;
    let request = HttpRequest {
        method: HttpMethod::Get,
        url,
        headers: BTreeMap::from([("Accept".to_string(), "text/plain".to_string())]),
        body: None,
    };

    let attempts = policy.max_attempts.max(1);
    let mut last_error = String::new();

    for attempt in 1..=attempts {
        match transport.send(&request).await {
            Ok(response) if response.is_ok() => {
                let body = response.body.trim();
                return body
                    .parse()
                    .map_err(|_| ExternalIpError::InvalidAddress {
                        body: body.to_string(),
                    });
            }
            Ok(response) => last_error = format!("unexpected status {}", response.status),
            Err(error) => last_error = error.to_string(),
        }

        tracing::warn!(attempt, attempts, error = %last_error, "External IP lookup failed");
        if attempt < attempts {
            tokio::time::sleep(policy.backoff).await;
        }
    }

    Err(ExternalIpError::MaxRetries {
        attempts,
        last_error,
    })
}
