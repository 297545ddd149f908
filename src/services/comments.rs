//! Comment endpoints.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{
    encode_query, null_default, ApiResponse, HttpClient, HttpError, HttpMethod,
};
use crate::services::users::User;
use crate::services::{call, call_without_body, segment, timestamp};

/// A comment on a media item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    /// The comment identifier.
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    /// Comment text.
    #[serde(deserialize_with = "null_default")]
    pub text: String,
    /// The commenter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    /// When the comment was posted.
    #[serde(with = "timestamp")]
    pub created_time: Option<DateTime<Utc>>,
}

/// Access to the `media/{id}/comments` endpoints.
#[derive(Clone, Copy, Debug)]
pub struct CommentsService<'a> {
    client: &'a HttpClient,
}

impl<'a> CommentsService<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists the comments on a media item.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn media_comments(
        &self,
        media_id: &str,
    ) -> Result<ApiResponse<Vec<Comment>>, HttpError> {
        let path = format!("media/{}/comments", segment(media_id));
        call(self.client, HttpMethod::Get, &path, "").await
    }

    /// Posts a comment as the authenticated user.
    ///
    /// Each entry of `text` is sent as one `text` form field.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn add(&self, media_id: &str, text: &[&str]) -> Result<(), HttpError> {
        let path = format!("media/{}/comments", segment(media_id));
        let fields: BTreeMap<String, Vec<String>> = BTreeMap::from([(
            "text".to_string(),
            text.iter().map(ToString::to_string).collect(),
        )]);
        call_without_body(self.client, HttpMethod::Post, &path, &encode_query(&fields)).await
    }

    /// Removes a comment, either on the authenticated user's media or
    /// authored by them.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, media_id: &str, comment_id: &str) -> Result<(), HttpError> {
        let path = format!(
            "media/{}/comments/{}",
            segment(media_id),
            segment(comment_id)
        );
        call_without_body(self.client, HttpMethod::Delete, &path, "").await
    }
}
