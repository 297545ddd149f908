//! HTTP response types for the Instagram API client.
//!
//! [`HttpResponse`] is the raw status/headers/body triple returned by a
//! transport. [`RateLimit`] is read from its headers on demand.

use std::collections::HashMap;

use crate::clients::errors::ParseError;

/// Header carrying the total number of calls allowed per hour.
pub const RATE_LIMIT_HEADER: &str = "x-ratelimit-limit";

/// Header carrying the number of calls left in the current window.
pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// API call limits found in the `X-Ratelimit-*` response headers.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use instagram_api::clients::{HttpResponse, RateLimit};
///
/// let mut headers = HashMap::new();
/// headers.insert("x-ratelimit-limit".to_string(), vec!["5000".to_string()]);
/// headers.insert("x-ratelimit-remaining".to_string(), vec!["4999".to_string()]);
///
/// let response = HttpResponse::new(200, headers, String::new());
/// let limit = RateLimit::from_response(&response).unwrap();
/// assert_eq!(limit.limit, 5000);
/// assert_eq!(limit.remaining, 4999);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Total number of possible calls per hour.
    pub limit: u32,
    /// Calls left for this token or client ID.
    pub remaining: u32,
}

impl RateLimit {
    /// Reads both rate-limit headers from a response.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::RateLimitHeader`] if either header is absent or
    /// not an unsigned integer.
    pub fn from_response(response: &HttpResponse) -> Result<Self, ParseError> {
        Ok(Self {
            limit: Self::read(response, RATE_LIMIT_HEADER)?,
            remaining: Self::read(response, RATE_LIMIT_REMAINING_HEADER)?,
        })
    }

    fn read(response: &HttpResponse, header: &'static str) -> Result<u32, ParseError> {
        let value = response.header(header);
        value
            .and_then(|v| v.trim().parse().ok())
            .ok_or_else(|| ParseError::RateLimitHeader {
                header,
                value: value.map(String::from),
            })
    }
}

/// A raw HTTP response as returned by a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers with lower-cased names (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The response body, fully read.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response, lower-casing header names.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        let mut normalized: HashMap<String, Vec<String>> = HashMap::with_capacity(headers.len());
        for (name, values) in headers {
            normalized
                .entry(name.to_ascii_lowercase())
                .or_default()
                .extend(values);
        }

        Self {
            status,
            headers: normalized,
            body,
        }
    }

    /// Returns `true` when the status is exactly 200, the only status the API
    /// uses for success.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
