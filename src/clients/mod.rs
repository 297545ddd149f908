//! HTTP client types for Instagram API communication.
//!
//! This module provides the request/response pipeline shared by every
//! resource service. It builds authenticated requests, hands them to a
//! transport, and decodes the JSON envelope the API wraps around every payload.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: builds requests and executes them
//! - [`HttpRequest`]: an absolute, authenticated request
//! - [`HttpResponse`]: the raw status, headers and body of a response
//! - [`HttpMethod`]: supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`HttpTransport`]: the pluggable sender, with [`ReqwestTransport`] as default
//! - [`ApiResponse`]: a decoded [`Envelope`] plus its raw response
//! - [`ResponseMeta`], [`Pagination`], [`RateLimit`]: envelope and header data
//!
//! # Example
//!
//! ```rust,ignore
//! use instagram_api::{AccessToken, ClientConfig, HttpClient};
//! use instagram_api::clients::HttpMethod;
//! use instagram_api::services::Media;
//!
//! let config = ClientConfig::builder()
//!     .access_token(AccessToken::new("token").unwrap())
//!     .build()?;
//! let client = HttpClient::new(config);
//!
//! let request = client.build_request(HttpMethod::Get, "media/popular", "")?;
//! let popular = client.execute::<Vec<Media>>(&request).await?;
//! println!("{} items, {:?}", popular.len(), popular.rate_limit());
//! ```
//!
//! # Error Handling
//!
//! Only status 200 counts as success. Every other status becomes an
//! [`HttpError::Status`] whose [`ResponseMeta`] is recovered from the body.
//! Nothing is retried.

mod envelope;
mod errors;
mod http_client;
mod http_request;
mod http_response;
#[cfg(test)]
pub(crate) mod testing;
mod transport;

pub use envelope::{null_default, ApiResponse, Envelope, Pagination, ResponseMeta};
pub use errors::{HttpError, ParseError, StatusError, TransportError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{
    encode_query, parse_query, HttpMethod, HttpRequest, ACCESS_TOKEN_PARAM, CLIENT_ID_PARAM,
    CLIENT_SECRET_PARAM, FORM_CONTENT_TYPE,
};
pub use http_response::{
    HttpResponse, RateLimit, RATE_LIMIT_HEADER, RATE_LIMIT_REMAINING_HEADER,
};
pub use transport::{HttpTransport, ReqwestTransport};
