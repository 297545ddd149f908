//! Instagram resource services.
//!
//! Each service borrows an [`HttpClient`] and maps one group of endpoints to
//! typed calls. Services are obtained from the client:
//!
//! - [`HttpClient::users`] → [`UsersService`]
//! - [`HttpClient::relationships`] → [`RelationshipsService`]
//! - [`HttpClient::media`] → [`MediaService`]
//! - [`HttpClient::comments`] → [`CommentsService`]
//! - [`HttpClient::likes`] → [`LikesService`]
//! - [`HttpClient::tags`] → [`TagsService`]
//! - [`HttpClient::locations`] → [`LocationsService`]
//! - [`HttpClient::geographies`] → [`GeographiesService`]
//!
//! List endpoints return [`ApiResponse<Vec<_>>`](ApiResponse), which carries
//! the pagination cursor for [`HttpClient::next_page`].
//!
//! # Example
//!
//! ```rust,ignore
//! use instagram_api::services::Parameters;
//!
//! let params = Parameters {
//!     count: Some(20),
//!     ..Default::default()
//! };
//! let feed = client.users().media_feed(Some(&params)).await?;
//! for media in feed.iter() {
//!     println!("{} by {:?}", media.id, media.user.as_ref().map(|u| &u.username));
//! }
//! ```

mod comments;
mod geographies;
mod likes;
mod locations;
mod media;
mod relationships;
mod tags;
pub mod timestamp;
mod users;

pub use comments::{Comment, CommentsService};
pub use geographies::GeographiesService;
pub use likes::LikesService;
pub use locations::{Location, LocationsService, MAX_SEARCH_DISTANCE};
pub use media::{
    Media, MediaCaption, MediaComments, MediaImage, MediaImages, MediaLikes, MediaLocation,
    MediaService, MediaVideo, MediaVideos, Position, UserInPhoto,
};
pub use relationships::{Relationship, RelationshipsService};
pub use tags::{Tag, TagsService};
pub use users::{User, UserCounts, UsersService};

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::Display;

use serde::de::DeserializeOwned;

use crate::clients::{encode_query, ApiResponse, HttpClient, HttpError, HttpMethod};

/// Optional query arguments shared by the list endpoints.
///
/// Each endpoint reads only the fields it supports and ignores the rest.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Parameters {
    /// Maximum number of results to return.
    pub count: Option<u64>,
    /// Return results after this identifier.
    pub min_id: Option<String>,
    /// Return results before this identifier.
    pub max_id: Option<String>,
    /// Return results created after this Unix time.
    pub min_timestamp: Option<i64>,
    /// Return results created before this Unix time.
    pub max_timestamp: Option<i64>,
    /// Latitude of the search center.
    pub lat: Option<f64>,
    /// Longitude of the search center.
    pub lng: Option<f64>,
    /// Search radius in meters.
    pub distance: Option<f64>,
}

impl HttpClient {
    /// Returns the users service.
    #[must_use]
    pub const fn users(&self) -> UsersService<'_> {
        UsersService::new(self)
    }

    /// Returns the relationships service.
    #[must_use]
    pub const fn relationships(&self) -> RelationshipsService<'_> {
        RelationshipsService::new(self)
    }

    /// Returns the media service.
    #[must_use]
    pub const fn media(&self) -> MediaService<'_> {
        MediaService::new(self)
    }

    /// Returns the comments service.
    #[must_use]
    pub const fn comments(&self) -> CommentsService<'_> {
        CommentsService::new(self)
    }

    /// Returns the likes service.
    #[must_use]
    pub const fn likes(&self) -> LikesService<'_> {
        LikesService::new(self)
    }

    /// Returns the tags service.
    #[must_use]
    pub const fn tags(&self) -> TagsService<'_> {
        TagsService::new(self)
    }

    /// Returns the locations service.
    #[must_use]
    pub const fn locations(&self) -> LocationsService<'_> {
        LocationsService::new(self)
    }

    /// Returns the geographies service.
    #[must_use]
    pub const fn geographies(&self) -> GeographiesService<'_> {
        GeographiesService::new(self)
    }
}

/// Query arguments appended to a resource path.
#[derive(Debug, Default)]
pub(crate) struct Query {
    params: BTreeMap<String, Vec<String>>,
}

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds `key=value`.
    pub(crate) fn set(mut self, key: &str, value: impl Display) -> Self {
        self.params
            .entry(key.to_string())
            .or_default()
            .push(value.to_string());
        self
    }

    /// Adds `key=value` when `value` is present.
    pub(crate) fn set_opt(self, key: &str, value: Option<impl Display>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    /// Adds a coordinate or distance with 7 fractional digits.
    pub(crate) fn set_fixed(self, key: &str, value: Option<f64>) -> Self {
        self.set_opt(key, value.map(fixed))
    }

    /// Renders `path` with the encoded query, omitting `?` when empty.
    pub(crate) fn apply(self, path: String) -> String {
        if self.params.is_empty() {
            path
        } else {
            format!("{path}?{}", encode_query(&self.params))
        }
    }
}

/// Formats `value` with exactly 7 fractional digits.
pub(crate) fn fixed(value: f64) -> String {
    format!("{value:.7}")
}

/// Percent-encodes a single path segment.
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Percent-encodes a user id, using `self` for the empty id.
pub(crate) fn user_segment(id: &str) -> Cow<'_, str> {
    if id.is_empty() {
        Cow::Borrowed("self")
    } else {
        segment(id)
    }
}

/// Builds and executes a request, decoding `data` as `T`.
pub(crate) async fn call<T>(
    client: &HttpClient,
    method: HttpMethod,
    path: &str,
    body: &str,
) -> Result<ApiResponse<T>, HttpError>
where
    T: DeserializeOwned + Default,
{
    let request = client.build_request(method, path, body)?;
    client.execute(&request).await
}

/// Builds and executes a request whose payload is discarded.
pub(crate) async fn call_without_body(
    client: &HttpClient,
    method: HttpMethod,
    path: &str,
    body: &str,
) -> Result<(), HttpError> {
    let request = client.build_request(method, path, body)?;
    client.execute_without_body(&request).await
}
