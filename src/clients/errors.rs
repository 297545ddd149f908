//! HTTP-specific error types for the Instagram API client.
//!
//! - [`HttpError::MalformedPath`]: the resource path could not be resolved
//! - [`TransportError`]: the request never produced a response
//! - [`StatusError`]: the API answered with a non-200 status
//! - [`ParseError`]: a structured decode failed (envelope or rate-limit headers)
//!
//! None of these are retried; every failure is returned to the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use instagram_api::HttpError;
//!
//! match client.users().get("").await {
//!     Ok(user) => println!("Hello {}", user.username),
//!     Err(HttpError::Status(e)) if e.error_type() == "OAuthException" => {
//!         println!("Token rejected: {}", e.error_message());
//!     }
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;
use url::Url;

use crate::clients::envelope::ResponseMeta;
use crate::clients::http_request::{HttpMethod, ACCESS_TOKEN_PARAM, CLIENT_SECRET_PARAM};

/// Error returned when the transport could not complete the exchange
/// (connection, DNS, TLS, timeout, or body read failure).
#[derive(Debug, Error)]
#[error("Transport error: {message}")]
pub struct TransportError {
    /// Description of the failure.
    pub message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    /// Creates a transport error from a message alone.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a transport error wrapping an underlying cause.
    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        Self::with_source(error.to_string(), error)
    }
}

/// Error returned for any non-200 response.
///
/// Carries the attempted method and URL, the HTTP status, and the error
/// kind/message recovered from the body. Bodyless 500 responses carry
/// [`ResponseMeta::internal_server_error`].
///
/// ```rust
/// use instagram_api::clients::{HttpMethod, ResponseMeta, StatusError};
///
/// let error = StatusError {
///     method: HttpMethod::Get,
///     url: "https://api.instagram.com/v1/users/self?access_token=abc".parse().unwrap(),
///     status: 500,
///     meta: ResponseMeta::internal_server_error(),
/// };
///
/// assert_eq!(error.error_type(), "Internal Server Error");
/// assert!(!error.to_string().contains("abc"));
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error(
    "{method} {redacted}: {status} {error_type} {error_message}",
    redacted = redact_credentials(.url),
    error_type = .meta.error_type,
    error_message = .meta.error_message
)]
pub struct StatusError {
    /// The method of the failed request.
    pub method: HttpMethod,
    /// The absolute URL of the failed request.
    pub url: Url,
    /// The HTTP status code.
    pub status: u16,
    /// Error details recovered from the response envelope.
    pub meta: ResponseMeta,
}

impl StatusError {
    /// Returns the machine-readable error kind (e.g. `OAuthException`).
    #[must_use]
    pub fn error_type(&self) -> &str {
        &self.meta.error_type
    }

    /// Returns the numeric code from the envelope.
    #[must_use]
    pub const fn code(&self) -> i64 {
        self.meta.code
    }

    /// Returns the human-readable error message.
    #[must_use]
    pub fn error_message(&self) -> &str {
        &self.meta.error_message
    }
}

/// Error returned when a structured decode fails.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A 200 response body did not match the envelope shape.
    #[error("Failed to decode response envelope: {0}")]
    Envelope(#[from] serde_json::Error),

    /// A rate-limit header was missing or not an unsigned integer.
    #[error("Invalid rate limit header '{header}': {value:?}")]
    RateLimitHeader {
        /// The header that failed to parse.
        header: &'static str,
        /// The raw header value, if the header was present.
        value: Option<String>,
    },
}

/// Unified error type for the request/response pipeline.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The resource path could not be parsed as a URL reference.
    #[error("Malformed resource path '{path}': {source}")]
    MalformedPath {
        /// The path that was provided.
        path: String,
        /// The underlying URL parse error.
        #[source]
        source: url::ParseError,
    },

    /// Network or connection error.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Non-200 HTTP response.
    #[error(transparent)]
    Status(#[from] StatusError),

    /// Response decode error.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl HttpError {
    /// Returns the status error, if this is one.
    #[must_use]
    pub const fn as_status(&self) -> Option<&StatusError> {
        match self {
            Self::Status(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(ParseError::Envelope(error))
    }
}

/// Renders a URL with credential values replaced by `*****`.
fn redact_credentials(url: &Url) -> String {
    let Some(query) = url.query() else {
        return url.to_string();
    };

    let redacted: Vec<String> = query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if key == ACCESS_TOKEN_PARAM || key == CLIENT_SECRET_PARAM => {
                format!("{key}=*****")
            }
            _ => pair.to_string(),
        })
        .collect();

    let mut url = url.clone();
    url.set_query(Some(&redacted.join("&")));
    url.to_string()
}
