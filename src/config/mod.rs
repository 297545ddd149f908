//! Configuration types for the Instagram API client.
//!
//! # Overview
//!
//! - [`ClientConfig`]: base address, credentials and identification settings
//! - [`ClientConfigBuilder`]: fluent builder for [`ClientConfig`]
//! - [`ClientId`], [`ClientSecret`], [`AccessToken`]: validated credentials
//! - [`BaseUrl`]: the address relative resource paths resolve against
//!
//! # Example
//!
//! ```rust
//! use instagram_api::{AccessToken, ClientConfig, ClientId};
//!
//! let config = ClientConfig::builder()
//!     .client_id(ClientId::new("my-client-id").unwrap())
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.instagram.com/v1/");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BaseUrl, ClientId, ClientSecret};

use std::net::IpAddr;

use crate::error::ConfigError;

/// Configuration for an Instagram API client.
///
/// Every credential is optional: the request builder only injects the ones
/// that are present. Credentials can also be replaced later through the
/// setters on [`HttpClient`](crate::HttpClient).
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    base_url: BaseUrl,
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    access_token: Option<AccessToken>,
    user_agent_prefix: Option<String>,
    forwarded_for: Option<IpAddr>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the application client identifier, if configured.
    #[must_use]
    pub const fn client_id(&self) -> Option<&ClientId> {
        self.client_id.as_ref()
    }

    /// Returns the application client secret, if configured.
    #[must_use]
    pub const fn client_secret(&self) -> Option<&ClientSecret> {
        self.client_secret.as_ref()
    }

    /// Returns the user access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the address signed into `X-Insta-Forwarded-For`, if configured.
    #[must_use]
    pub const fn forwarded_for(&self) -> Option<IpAddr> {
        self.forwarded_for
    }

    pub(crate) fn set_client_id(&mut self, id: Option<ClientId>) {
        self.client_id = id;
    }

    pub(crate) fn set_client_secret(&mut self, secret: Option<ClientSecret>) {
        self.client_secret = secret;
    }

    pub(crate) fn set_access_token(&mut self, token: Option<AccessToken>) {
        self.access_token = token;
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

/// Builder for constructing [`ClientConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: `https://api.instagram.com/v1/`
/// - credentials: unset
/// - `user_agent_prefix`: `None`
/// - `forwarded_for`: `None`
///
/// # Example
///
/// ```rust
/// use instagram_api::{BaseUrl, ClientConfig, ClientSecret};
///
/// let config = ClientConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:9000/v1/").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .forwarded_for("203.0.113.7".parse().unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
/// ```
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<BaseUrl>,
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    access_token: Option<AccessToken>,
    user_agent_prefix: Option<String>,
    forwarded_for: Option<IpAddr>,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the application client identifier.
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the application client secret.
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Sets the user access token.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the caller's public address for the signed
    /// `X-Insta-Forwarded-For` header on mutating requests.
    ///
    /// Requires a client secret, which keys the signature.
    #[must_use]
    pub const fn forwarded_for(mut self, ip: IpAddr) -> Self {
        self.forwarded_for = Some(ip);
        self
    }

    /// Builds the [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `forwarded_for` is
    /// set without a `client_secret`.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        if self.forwarded_for.is_some() && self.client_secret.is_none() {
            return Err(ConfigError::MissingRequiredField {
                field: "client_secret",
            });
        }

        Ok(ClientConfig {
            base_url: self.base_url.unwrap_or_default(),
            client_id: self.client_id,
            client_secret: self.client_secret,
            access_token: self.access_token,
            user_agent_prefix: self.user_agent_prefix,
            forwarded_for: self.forwarded_for,
        })
    }
}
