//! Validated newtype wrappers for configuration values.
//!
//! Credentials are validated as non-empty on construction, so "the client
//! holds a value" and "the value is non-empty" are the same thing downstream.

use crate::error::ConfigError;
use std::fmt;
use url::Url;

/// An application client identifier (`client_id`).
///
/// # Example
///
/// ```rust
/// use instagram_api::ClientId;
///
/// let id = ClientId::new("8f2c0ad697ea4094beb2b1753b7cde9c").unwrap();
/// assert_eq!(id.as_ref(), "8f2c0ad697ea4094beb2b1753b7cde9c");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] if the identifier is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyCredential { name: "client id" });
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An application client secret (`client_secret`).
///
/// The `Debug` implementation masks the value, displaying only
/// `ClientSecret(*****)`.
///
/// ```rust
/// use instagram_api::ClientSecret;
///
/// let secret = ClientSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyCredential {
                name: "client secret",
            });
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

/// A user access token obtained out of band (`access_token`).
///
/// Masked in `Debug` output like [`ClientSecret`].
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCredential`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyCredential {
                name: "access token",
            });
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// The base address every relative resource path is resolved against.
///
/// The URL must be absolute with an `http` or `https` scheme. A trailing
/// `/` is appended when missing, so `https://host/v1` and `https://host/v1/`
/// both resolve `users/self` to `https://host/v1/users/self`.
///
/// # Example
///
/// ```rust
/// use instagram_api::BaseUrl;
///
/// let base = BaseUrl::new("http://localhost:8080/v1").unwrap();
/// assert_eq!(base.as_ref(), "http://localhost:8080/v1/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// The production API address.
    pub const DEFAULT: &'static str = "https://api.instagram.com/v1/";

    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL does not parse or
    /// is not http(s).
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let mut raw = url.into().trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }

        let parsed = Url::parse(&raw).map_err(|_| ConfigError::InvalidBaseUrl { url: raw.clone() })?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl { url: raw });
        }

        Ok(Self(parsed))
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(Url::parse(Self::DEFAULT).unwrap_or_else(|_| unreachable!("default base URL is valid")))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
