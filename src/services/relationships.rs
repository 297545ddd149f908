//! Relationship endpoints.
//!
//! Listing methods treat `""` as the authenticated user. Actions are sent
//! as `POST users/{id}/relationship` with an `action=<verb>` form body.

use serde::{Deserialize, Serialize};

use crate::clients::{null_default, ApiResponse, HttpClient, HttpError, HttpMethod};
use crate::services::users::User;
use crate::services::{call, segment, user_segment};

/// The authenticated user's relationship with another user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Relationship {
    /// `follows`, `requested` or `none`.
    #[serde(deserialize_with = "null_default")]
    pub outgoing_status: String,
    /// `followed_by`, `requested_by`, `blocked_by_you` or `none`.
    #[serde(deserialize_with = "null_default")]
    pub incoming_status: String,
}

/// Access to the follow graph endpoints.
#[derive(Clone, Copy, Debug)]
pub struct RelationshipsService<'a> {
    client: &'a HttpClient,
}

impl<'a> RelationshipsService<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Lists the users a user follows.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn follows(&self, user_id: &str) -> Result<ApiResponse<Vec<User>>, HttpError> {
        let path = format!("users/{}/follows", user_segment(user_id));
        call(self.client, HttpMethod::Get, &path, "").await
    }

    /// Lists the users following a user.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn followed_by(&self, user_id: &str) -> Result<ApiResponse<Vec<User>>, HttpError> {
        let path = format!("users/{}/followed-by", user_segment(user_id));
        call(self.client, HttpMethod::Get, &path, "").await
    }

    /// Lists users who have requested to follow the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn requested_by(&self) -> Result<ApiResponse<Vec<User>>, HttpError> {
        call(self.client, HttpMethod::Get, "users/self/requested-by", "").await
    }

    /// Fetches the relationship with `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn relationship(&self, user_id: &str) -> Result<ApiResponse<Relationship>, HttpError> {
        call(self.client, HttpMethod::Get, &Self::path(user_id), "").await
    }

    /// Follows a user.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn follow(&self, user_id: &str) -> Result<ApiResponse<Relationship>, HttpError> {
        self.act(user_id, "follow").await
    }

    /// Unfollows a user.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn unfollow(&self, user_id: &str) -> Result<ApiResponse<Relationship>, HttpError> {
        self.act(user_id, "unfollow").await
    }

    /// Blocks a user.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn block(&self, user_id: &str) -> Result<ApiResponse<Relationship>, HttpError> {
        self.act(user_id, "block").await
    }

    /// Unblocks a user.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn unblock(&self, user_id: &str) -> Result<ApiResponse<Relationship>, HttpError> {
        self.act(user_id, "unblock").await
    }

    /// Approves a pending follow request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn approve(&self, user_id: &str) -> Result<ApiResponse<Relationship>, HttpError> {
        self.act(user_id, "approve").await
    }

    /// Denies a pending follow request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn deny(&self, user_id: &str) -> Result<ApiResponse<Relationship>, HttpError> {
        self.act(user_id, "deny").await
    }

    async fn act(&self, user_id: &str, action: &str) -> Result<ApiResponse<Relationship>, HttpError> {
        let body = format!("action={action}");
        call(self.client, HttpMethod::Post, &Self::path(user_id), &body).await
    }

    fn path(user_id: &str) -> String {
        format!("users/{}/relationship", segment(user_id))
    }
}
