//! User endpoints.
//!
//! Every method taking a user id treats `""` as the authenticated user
//! (`users/self`).
//!
//! # Example
//!
//! ```rust,ignore
//! let me = client.users().get("").await?;
//! println!("{} follows {}", me.username, me.counts.as_ref().map_or(0, |c| c.follows));
//!
//! let found = client.users().search("jack", None).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{null_default, ApiResponse, HttpClient, HttpError, HttpMethod};
use crate::services::media::Media;
use crate::services::{call, user_segment, Parameters, Query};

/// An Instagram account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// The user identifier.
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    /// The account handle.
    #[serde(deserialize_with = "null_default")]
    pub username: String,
    /// Display name.
    #[serde(deserialize_with = "null_default")]
    pub full_name: String,
    /// Avatar URL.
    #[serde(deserialize_with = "null_default")]
    pub profile_picture: String,
    /// Profile biography.
    #[serde(deserialize_with = "null_default")]
    pub bio: String,
    /// Profile website.
    #[serde(deserialize_with = "null_default")]
    pub website: String,
    /// Activity counters; only sent by the user-info endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<UserCounts>,
}

/// Activity counters of a [`User`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserCounts {
    /// Number of media items posted.
    #[serde(deserialize_with = "null_default")]
    pub media: i64,
    /// Number of accounts this user follows.
    #[serde(deserialize_with = "null_default")]
    pub follows: i64,
    /// Number of followers.
    #[serde(deserialize_with = "null_default")]
    pub followed_by: i64,
}

/// Access to the `users/*` endpoints.
#[derive(Clone, Copy, Debug)]
pub struct UsersService<'a> {
    client: &'a HttpClient,
}

impl<'a> UsersService<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Fetches basic information about a user.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, user_id: &str) -> Result<ApiResponse<User>, HttpError> {
        let path = format!("users/{}", user_segment(user_id));
        call(self.client, HttpMethod::Get, &path, "").await
    }

    /// Fetches the authenticated user's feed.
    ///
    /// Reads `count`, `min_id` and `max_id` from `params`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn media_feed(
        &self,
        params: Option<&Parameters>,
    ) -> Result<ApiResponse<Vec<Media>>, HttpError> {
        let mut query = Query::new();
        if let Some(p) = params {
            query = query
                .set_opt("count", p.count)
                .set_opt("min_id", p.min_id.as_deref())
                .set_opt("max_id", p.max_id.as_deref());
        }
        let path = query.apply("users/self/feed".to_string());
        call(self.client, HttpMethod::Get, &path, "").await
    }

    /// Fetches the most recent media published by a user.
    ///
    /// Reads `count`, `max_timestamp`, `min_timestamp`, `min_id` and `max_id`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn recent_media(
        &self,
        user_id: &str,
        params: Option<&Parameters>,
    ) -> Result<ApiResponse<Vec<Media>>, HttpError> {
        let mut query = Query::new();
        if let Some(p) = params {
            query = query
                .set_opt("count", p.count)
                .set_opt("max_timestamp", p.max_timestamp)
                .set_opt("min_timestamp", p.min_timestamp)
                .set_opt("min_id", p.min_id.as_deref())
                .set_opt("max_id", p.max_id.as_deref());
        }
        let path = query.apply(format!("users/{}/media/recent", user_segment(user_id)));
        call(self.client, HttpMethod::Get, &path, "").await
    }

    /// Fetches media the authenticated user has liked.
    ///
    /// Reads `count`; `max_id` is sent as `max_like_id`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn liked_media(
        &self,
        params: Option<&Parameters>,
    ) -> Result<ApiResponse<Vec<Media>>, HttpError> {
        let mut query = Query::new();
        if let Some(p) = params {
            query = query
                .set_opt("count", p.count)
                .set_opt("max_like_id", p.max_id.as_deref());
        }
        let path = query.apply("users/self/media/liked".to_string());
        call(self.client, HttpMethod::Get, &path, "").await
    }

    /// Searches users by name.
    ///
    /// Reads `count` from `params`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn search(
        &self,
        q: &str,
        params: Option<&Parameters>,
    ) -> Result<ApiResponse<Vec<User>>, HttpError> {
        let path = Query::new()
            .set("q", q)
            .set_opt("count", params.and_then(|p| p.count))
            .apply("users/search".to_string());
        call(self.client, HttpMethod::Get, &path, "").await
    }
}
