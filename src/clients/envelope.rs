//! The uniform JSON envelope wrapping every API response.
//!
//! ```json
//! {
//!   "meta": { "code": 400, "error_type": "OAuthException", "error_message": "..." },
//!   "data": { ... },
//!   "pagination": { "next_url": "...", "next_max_id": "..." }
//! }
//! ```
//!
//! Every field may be omitted or `null`. Such scalar fields decode to their
//! zero value; absent `meta` / `pagination` objects decode to `None`.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::clients::errors::ParseError;
use crate::clients::http_response::{HttpResponse, RateLimit};

/// Decodes `null` as `T::default()`.
///
/// Pair with `#[serde(default)]` so that a missing key and an explicit
/// `null` produce the same zero value.
///
/// # Errors
///
/// Propagates the deserializer's error for values that are neither `null`
/// nor a valid `T`.
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Status information about a response.
///
/// On success only `code` (200) is usually present; on failure
/// `error_type` and `error_message` describe what went wrong.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseMeta {
    /// Machine-readable error kind, e.g. `OAuthException`.
    #[serde(deserialize_with = "null_default")]
    pub error_type: String,
    /// Numeric status code echoed by the API.
    #[serde(deserialize_with = "null_default")]
    pub code: i64,
    /// Human-readable error description.
    #[serde(deserialize_with = "null_default")]
    pub error_message: String,
}

impl ResponseMeta {
    /// The meta substituted when the API answers 500 with a bare-text body.
    #[must_use]
    pub fn internal_server_error() -> Self {
        Self {
            error_type: "Internal Server Error".to_string(),
            code: 500,
            error_message: "Oops, an error occurred.".to_string(),
        }
    }

    /// Recovers `meta` fields from an error body field by field.
    ///
    /// Returns `None` when the body is not a JSON object. A field that is
    /// missing or carries the wrong JSON type stays at its zero value.
    #[must_use]
    pub fn recover(body: &str) -> Option<Self> {
        let Ok(Value::Object(envelope)) = serde_json::from_str::<Value>(body) else {
            return None;
        };

        let mut meta = Self::default();
        if let Some(Value::Object(fields)) = envelope.get("meta") {
            if let Some(error_type) = fields.get("error_type").and_then(Value::as_str) {
                meta.error_type = error_type.to_string();
            }
            if let Some(code) = fields.get("code").and_then(Value::as_i64) {
                meta.code = code;
            }
            if let Some(message) = fields.get("error_message").and_then(Value::as_str) {
                meta.error_message = message.to_string();
            }
        }
        Some(meta)
    }

    /// Returns `true` when the meta describes an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        !self.error_type.is_empty() || !self.error_message.is_empty()
    }
}

/// Continuation information for sequential data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// Address of the next page of data.
    #[serde(deserialize_with = "null_default")]
    pub next_url: String,
    /// Identifier to pass as `max_id` for the next request.
    #[serde(deserialize_with = "null_default")]
    pub next_max_id: String,
}

impl Pagination {
    /// Returns `true` when a non-empty continuation address is present.
    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.next_url.is_empty()
    }
}

/// The decoded wire envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
pub struct Envelope<T> {
    /// Status information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
    /// The resource-specific payload; `null` decodes to `T::default()`.
    #[serde(default, deserialize_with = "null_default")]
    pub data: T,
    /// Continuation cursor for paginated endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// A decoded envelope together with the HTTP response it came from.
///
/// Returned by [`HttpClient::execute`](crate::HttpClient::execute) in place
/// of a "last response" slot on the client, so each caller owns the
/// pagination and rate-limit data of its own call.
///
/// `ApiResponse<T>` implements `Deref<Target = T>`:
///
/// ```rust
/// use std::collections::HashMap;
/// use instagram_api::clients::{ApiResponse, Envelope, HttpResponse};
///
/// let envelope = Envelope { meta: None, data: vec![1, 2, 3], pagination: None };
/// let response = ApiResponse::new(envelope, HttpResponse::new(200, HashMap::new(), String::new()));
///
/// assert_eq!(response.len(), 3);
/// assert!(!response.has_next_page());
/// ```
#[derive(Clone, Debug)]
pub struct ApiResponse<T> {
    envelope: Envelope<T>,
    raw: HttpResponse,
}

impl<T> ApiResponse<T> {
    /// Pairs a decoded envelope with its raw response.
    #[must_use]
    pub const fn new(envelope: Envelope<T>, raw: HttpResponse) -> Self {
        Self { envelope, raw }
    }

    /// Returns the envelope metadata, if the API sent any.
    #[must_use]
    pub const fn meta(&self) -> Option<&ResponseMeta> {
        self.envelope.meta.as_ref()
    }

    /// Returns a reference to the payload.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.envelope.data
    }

    /// Consumes the response and returns the payload.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.envelope.data
    }

    /// Returns the pagination cursor, if present.
    #[must_use]
    pub const fn pagination(&self) -> Option<&Pagination> {
        self.envelope.pagination.as_ref()
    }

    /// Returns the address of the next page, or `""` when there is none.
    #[must_use]
    pub fn next_url(&self) -> &str {
        self.pagination().map_or("", |p| p.next_url.as_str())
    }

    /// Returns the `max_id` for the next request, or `""` when there is none.
    #[must_use]
    pub fn next_max_id(&self) -> &str {
        self.pagination().map_or("", |p| p.next_max_id.as_str())
    }

    /// Returns `true` when more pages are available.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.pagination().is_some_and(Pagination::has_next)
    }

    /// Reads the `X-Ratelimit-Limit` / `X-Ratelimit-Remaining` headers.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::RateLimitHeader`] if either header is absent or
    /// non-numeric.
    pub fn rate_limit(&self) -> Result<RateLimit, ParseError> {
        RateLimit::from_response(&self.raw)
    }

    /// Returns the raw HTTP response.
    #[must_use]
    pub const fn raw(&self) -> &HttpResponse {
        &self.raw
    }

    /// Returns the whole decoded envelope.
    #[must_use]
    pub const fn envelope(&self) -> &Envelope<T> {
        &self.envelope
    }
}

impl<T> Deref for ApiResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.envelope.data
    }
}

impl<T> DerefMut for ApiResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.envelope.data
    }
}
