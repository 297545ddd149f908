//! Tag endpoints.

use serde::{Deserialize, Serialize};

use crate::clients::{null_default, ApiResponse, HttpClient, HttpError, HttpMethod};
use crate::services::media::Media;
use crate::services::{call, segment, Parameters, Query};

/// A hashtag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    /// The tag name, without `#`.
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    /// Number of media items carrying the tag.
    #[serde(deserialize_with = "null_default")]
    pub media_count: i64,
}

/// Access to the `tags/*` endpoints.
#[derive(Clone, Copy, Debug)]
pub struct TagsService<'a> {
    client: &'a HttpClient,
}

impl<'a> TagsService<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Fetches information about a tag.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, name: &str) -> Result<ApiResponse<Tag>, HttpError> {
        let path = format!("tags/{}", segment(name));
        call(self.client, HttpMethod::Get, &path, "").await
    }

    /// Fetches recently tagged media.
    ///
    /// Reads `min_id` and `max_id` from `params`; continue with the
    /// response's [`next_max_id`](ApiResponse::next_max_id).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn recent_media(
        &self,
        name: &str,
        params: Option<&Parameters>,
    ) -> Result<ApiResponse<Vec<Media>>, HttpError> {
        let mut query = Query::new();
        if let Some(p) = params {
            query = query
                .set_opt("min_id", p.min_id.as_deref())
                .set_opt("max_id", p.max_id.as_deref());
        }
        let path = query.apply(format!("tags/{}/media/recent", segment(name)));
        call(self.client, HttpMethod::Get, &path, "").await
    }

    /// Searches tags by name prefix.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn search(&self, q: &str) -> Result<ApiResponse<Vec<Tag>>, HttpError> {
        let path = Query::new().set("q", q).apply("tags/search".to_string());
        call(self.client, HttpMethod::Get, &path, "").await
    }
}
