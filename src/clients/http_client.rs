//! HTTP client for Instagram API communication.
//!
//! [`HttpClient`] owns the shared request/response pipeline used by every
//! resource service:
//!
//! 1. [`build_request`](HttpClient::build_request) resolves a path against the
//!    base URL, injects credentials and attaches standard headers.
//! 2. [`execute`](HttpClient::execute) sends the request through the
//!    configured [`HttpTransport`], classifies the status and decodes the
//!    envelope.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::auth::forwarded::{forwarded_for_header, FORWARDED_FOR_HEADER};
use crate::clients::envelope::{ApiResponse, Envelope, ResponseMeta};
use crate::clients::errors::{HttpError, ParseError, StatusError};
use crate::clients::http_request::{inject_auth_params, HttpMethod, HttpRequest, FORM_CONTENT_TYPE};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::{HttpTransport, ReqwestTransport};
use crate::config::{AccessToken, ClientConfig, ClientId, ClientSecret};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Client for the Instagram REST API.
///
/// Holds the configuration and a shared transport. It keeps no per-request
/// state: each [`execute`](Self::execute) returns its own [`ApiResponse`], so
/// one client can serve concurrent calls without racing on pagination or
/// rate-limit data.
///
/// # Example
///
/// ```rust,ignore
/// use instagram_api::{AccessToken, ClientConfig, HttpClient};
///
/// let config = ClientConfig::builder()
///     .access_token(AccessToken::new("token").unwrap())
///     .build()?;
/// let client = HttpClient::new(config);
///
/// let media = client.users().recent_media("", None).await?;
/// for item in media.iter() {
///     println!("{} {}", item.id, item.link);
/// }
/// if media.has_next_page() {
///     let older = client.next_page(&media).await?;
/// }
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
    user_agent: String,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client using the default [`ReqwestTransport`].
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created.
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    /// Creates a client that sends requests through `transport`.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Instagram API Library v{SDK_VERSION} | Rust {rust_version}");

        Self {
            config,
            transport,
            user_agent,
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the `User-Agent` sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Replaces the access token used for subsequent requests.
    pub fn set_access_token(&mut self, token: Option<AccessToken>) {
        self.config.set_access_token(token);
    }

    /// Replaces the client identifier used for subsequent requests.
    pub fn set_client_id(&mut self, id: Option<ClientId>) {
        self.config.set_client_id(id);
    }

    /// Replaces the client secret used for subsequent requests.
    pub fn set_client_secret(&mut self, secret: Option<ClientSecret>) {
        self.config.set_client_secret(secret);
    }

    /// Builds an absolute, authenticated request.
    ///
    /// `path` is either relative to the base URL (without a leading `/`) or
    /// absolute, such as a pagination `next_url`. Credentials held by the
    /// client are added to the query string unless the path already sets
    /// them. Mutating methods carry `body` as form data; reads carry none.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::MalformedPath`] if `path` is not a valid URL
    /// reference.
    pub fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: &str,
    ) -> Result<HttpRequest, HttpError> {
        let mut url = self
            .config
            .base_url()
            .as_url()
            .join(path)
            .map_err(|source| HttpError::MalformedPath {
                path: path.to_string(),
                source,
            })?;
        inject_auth_params(&mut url, &self.config);

        let mut headers = BTreeMap::new();
        headers.insert("User-Agent".to_string(), self.user_agent.clone());
        headers.insert("Accept".to_string(), "application/json".to_string());

        let body = if method.is_mutating() {
            headers.insert("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string());
            if let (Some(ip), Some(secret)) =
                (self.config.forwarded_for(), self.config.client_secret())
            {
                headers.insert(
                    FORWARDED_FOR_HEADER.to_string(),
                    forwarded_for_header(ip, secret.as_ref()),
                );
            }
            Some(body.to_string())
        } else {
            None
        };

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Sends a request and decodes the envelope's `data` as `T`.
    ///
    /// # Errors
    ///
    /// - [`HttpError::Transport`] if no response was received
    /// - [`HttpError::Status`] for any status other than 200
    /// - [`HttpError::Parse`] if a 200 body is not a valid envelope for `T`
    pub async fn execute<T>(&self, request: &HttpRequest) -> Result<ApiResponse<T>, HttpError>
    where
        T: DeserializeOwned + Default,
    {
        let response = self.send(request).await?;
        let envelope: Envelope<T> =
            serde_json::from_str(&response.body).map_err(ParseError::Envelope)?;

        if let Some(pagination) = envelope.pagination.as_ref().filter(|p| p.has_next()) {
            tracing::debug!(
                path = request.url.path(),
                next_max_id = %pagination.next_max_id,
                "More pages available"
            );
        }

        Ok(ApiResponse::new(envelope, response))
    }

    /// Sends a request whose payload the caller does not need.
    ///
    /// Only the status is checked; the body of a 200 response is not decoded.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute), minus envelope decoding.
    pub async fn execute_without_body(&self, request: &HttpRequest) -> Result<(), HttpError> {
        self.send(request).await.map(|_| ())
    }

    /// Fetches the page after `previous`, if there is one.
    ///
    /// Returns `Ok(None)` when `previous` carries no `next_url`.
    ///
    /// # Errors
    ///
    /// Same as [`build_request`](Self::build_request) and
    /// [`execute`](Self::execute).
    pub async fn next_page<T, P>(
        &self,
        previous: &ApiResponse<P>,
    ) -> Result<Option<ApiResponse<T>>, HttpError>
    where
        T: DeserializeOwned + Default,
    {
        if !previous.has_next_page() {
            return Ok(None);
        }
        let request = self.build_request(HttpMethod::Get, previous.next_url(), "")?;
        self.execute(&request).await.map(Some)
    }

    /// Dispatches `request` and classifies the status.
    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        tracing::debug!(method = %request.method, path = request.url.path(), "Sending request");

        let response = self.transport.send(request).await?;
        if response.is_ok() {
            return Ok(response);
        }

        let error = Self::classify_error(request, &response);
        tracing::warn!(
            method = %request.method,
            path = request.url.path(),
            status = error.status,
            error_type = %error.meta.error_type,
            "Request failed"
        );
        Err(error.into())
    }

    /// Builds the [`StatusError`] for a non-200 response.
    ///
    /// A JSON-object body supplies whatever `meta` fields it has. Any other
    /// body yields the fixed 500 fallback for status 500 and an empty meta
    /// otherwise.
    fn classify_error(request: &HttpRequest, response: &HttpResponse) -> StatusError {
        let meta = ResponseMeta::recover(&response.body).unwrap_or_else(|| {
            if response.status == 500 {
                ResponseMeta::internal_server_error()
            } else {
                ResponseMeta::default()
            }
        });

        StatusError {
            method: request.method,
            url: request.url.clone(),
            status: response.status,
            meta,
        }
    }
}
