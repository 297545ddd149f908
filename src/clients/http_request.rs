//! HTTP request types for the Instagram API client.
//!
//! This module provides [`HttpRequest`], the fully-addressed request handed to
//! an [`HttpTransport`](crate::clients::HttpTransport), and the query-string
//! merging used when credentials are injected.

use std::collections::BTreeMap;
use std::fmt;

use url::form_urlencoded;
use url::Url;

use crate::config::ClientConfig;

/// Content type sent with every mutating request.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Query parameter carrying the user access token.
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

/// Query parameter carrying the application identifier.
pub const CLIENT_ID_PARAM: &str = "client_id";

/// Query parameter carrying the application secret.
pub const CLIENT_SECRET_PARAM: &str = "client_secret";

/// HTTP methods used by the Instagram API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources or performing actions.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` for methods that change server state and carry a
    /// form-encoded body.
    #[must_use]
    pub const fn is_mutating(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Delete)
    }

    /// Returns the method name as sent on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully-addressed, authenticated request.
///
/// Built by [`HttpClient::build_request`](crate::HttpClient::build_request)
/// and immutable once issued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// Absolute URL including the merged query string.
    pub url: Url,
    /// Request headers, keyed by canonical header name.
    pub headers: BTreeMap<String, String>,
    /// Form-encoded body; `Some` only for mutating methods.
    pub body: Option<String>,
}

impl HttpRequest {
    /// Returns the value of a header set on this request.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns the first value of a query parameter on this request's URL.
    #[must_use]
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}

/// Parses a query string into a key-sorted multimap.
///
/// Values for a repeated key keep their original order.
#[must_use]
pub fn parse_query(query: &str) -> BTreeMap<String, Vec<String>> {
    let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        params
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    params
}

/// Encodes a multimap as `application/x-www-form-urlencoded`, sorted by key.
#[must_use]
pub fn encode_query(params: &BTreeMap<String, Vec<String>>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, values) in params {
        for value in values {
            serializer.append_pair(key, value);
        }
    }
    serializer.finish()
}

/// Merges the configured credentials into `url`'s query string.
///
/// A credential is added only when the client holds it and the query does not
/// already carry a non-empty value for that key. The query is then re-encoded
/// in key order, and removed entirely when empty.
pub(crate) fn inject_auth_params(url: &mut Url, config: &ClientConfig) {
    let mut params = parse_query(url.query().unwrap_or_default());

    let credentials = [
        (ACCESS_TOKEN_PARAM, config.access_token().map(AsRef::as_ref)),
        (CLIENT_ID_PARAM, config.client_id().map(AsRef::as_ref)),
        (CLIENT_SECRET_PARAM, config.client_secret().map(AsRef::as_ref)),
    ];

    for (key, value) in credentials {
        let Some(value) = value else { continue };
        let already_set = params
            .get(key)
            .and_then(|values| values.first())
            .is_some_and(|existing| !existing.is_empty());
        if !already_set {
            params.insert(key.to_string(), vec![value.to_string()]);
        }
    }

    let encoded = encode_query(&params);
    if encoded.is_empty() {
        url.set_query(None);
    } else {
        url.set_query(Some(&encoded));
    }
}
