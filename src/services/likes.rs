//! Like endpoints.

use crate::clients::{ApiResponse, HttpClient, HttpError, HttpMethod};
use crate::services::users::User;
use crate::services::{call, call_without_body, segment};

/// Access to the `media/{id}/likes` endpoints.
#[derive(Clone, Copy, Debug)]
pub struct LikesService<'a> {
    client: &'a HttpClient,
}

impl<'a> LikesService<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists the users who liked a media item.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn media_likes(&self, media_id: &str) -> Result<ApiResponse<Vec<User>>, HttpError> {
        let path = format!("media/{}/likes", segment(media_id));
        call(self.client, HttpMethod::Get, &path, "").await
    }

    /// Likes a media item as the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn like(&self, media_id: &str) -> Result<(), HttpError> {
        self.toggle(media_id, HttpMethod::Post).await
    }

    /// Removes the authenticated user's like from a media item.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn unlike(&self, media_id: &str) -> Result<(), HttpError> {
        self.toggle(media_id, HttpMethod::Delete).await
    }

    async fn toggle(&self, media_id: &str, method: HttpMethod) -> Result<(), HttpError> {
        let path = format!("media/{}/likes", segment(media_id));
        call_without_body(self.client, method, &path, "").await
    }
}
