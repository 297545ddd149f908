//! # Instagram API Rust Client
//!
//! An async client for the Instagram REST API, providing type-safe
//! configuration, credential injection, envelope decoding and typed access to
//! the user, relationship, media, comment, like, tag, location and geography
//! endpoints.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ClientConfig`] and [`ClientConfigBuilder`]
//! - Validated newtypes for credentials and the base URL
//! - An async [`HttpClient`] that injects credentials, classifies statuses and
//!   decodes the `{meta, data, pagination}` envelope
//! - Per-call [`ApiResponse`] values carrying pagination and rate-limit data
//! - Resource services in [`services`]
//! - Optional signed `X-Insta-Forwarded-For` headers via [`auth::forwarded`]
//!
//! ## Quick Start
//!
//! ```rust
//! use instagram_api::{AccessToken, ClientConfig, HttpClient};
//!
//! let config = ClientConfig::builder()
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(config);
//! assert!(client.user_agent().starts_with("Instagram API Library"));
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use instagram_api::services::Parameters;
//!
//! // Typed endpoints
//! let me = client.users().get("").await?;
//! println!("{} ({})", me.username, me.full_name);
//!
//! // Pagination is carried by each response
//! let mut page = client.tags().recent_media("sunset", None).await?;
//! while let Some(next) = client.next_page(&page).await? {
//!     page = next;
//! }
//!
//! // Rate limits come from the response headers
//! let limit = page.rate_limit()?;
//! println!("{}/{} calls left", limit.remaining, limit.limit);
//! ```
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use instagram_api::HttpError;
//!
//! match client.media().get("123").await {
//!     Ok(media) => println!("{}", media.link),
//!     Err(HttpError::Status(e)) => println!("{} {}: {}", e.status, e.error_type(), e.error_message()),
//!     Err(HttpError::Transport(e)) => println!("network: {e}"),
//!     Err(e) => println!("other: {e}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **No per-call state on the client**: each call returns its own response
//! - **Fail-fast validation**: newtypes validate on construction
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod services;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, BaseUrl, ClientConfig, ClientConfigBuilder, ClientId, ClientSecret};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiResponse, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, HttpTransport,
    Pagination, ParseError, RateLimit, ResponseMeta, StatusError, TransportError,
};

pub use auth::{ExternalIpError, RetryPolicy};
pub use services::Parameters;
