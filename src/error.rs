//! Error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! credentials or addresses are rejected before any request is built.
//!
//! # Example
//!
//! ```rust
//! use instagram_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyCredential { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`ClientConfig`](crate::ClientConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A credential value was empty.
    #[error("The {name} cannot be empty. Leave it unset instead of passing an empty string.")]
    EmptyCredential {
        /// Which credential was empty (e.g. "access token").
        name: &'static str,
    },

    /// The base URL could not be parsed or is not http(s).
    #[error("Invalid base URL '{url}'. Expected an absolute http(s) URL (e.g. 'https://api.instagram.com/v1/').")]
    InvalidBaseUrl {
        /// The URL that was provided.
        url: String,
    },

    /// A field required by another setting is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_credential_error_message() {
        let error = ConfigError::EmptyCredential {
            name: "access token",
        };
        let message = error.to_string();
        assert!(message.contains("access token"));
        assert!(message.contains("cannot be empty"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "not a url".to_string(),
        };
        assert!(error.to_string().contains("not a url"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "client_secret",
        };
        let message = error.to_string();
        assert!(message.contains("client_secret"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyCredential { name: "client id" };
        let _: &dyn std::error::Error = &error;
    }
}
