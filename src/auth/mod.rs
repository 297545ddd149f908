//! Request signing helpers for the Instagram API.
//!
//! Credentials themselves (`access_token`, `client_id`, `client_secret`) are
//! plain query parameters injected by [`HttpClient`](crate::HttpClient). This
//! module covers the optional signed forwarding header.
//!
//! # Overview
//!
//! - [`hmac`]: hex-encoded HMAC-SHA256 signatures
//! - [`forwarded`]: the `X-Insta-Forwarded-For` header and public-address lookup

pub mod forwarded;
pub mod hmac;

pub use forwarded::{
    forwarded_for_header, lookup_external_ip, lookup_external_ip_at, ExternalIpError,
    RetryPolicy, EXTERNAL_IP_ENDPOINT, FORWARDED_FOR_HEADER,
};
