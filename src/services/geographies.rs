//! Geography endpoints.
//!
//! Geographies are areas registered by an application through the realtime
//! subscription API; only their media timeline is readable here.

use crate::clients::{ApiResponse, HttpClient, HttpError, HttpMethod};
use crate::services::media::Media;
use crate::services::{call, segment, Parameters, Query};

/// Access to the `geographies/*` endpoints.
#[derive(Clone, Copy, Debug)]
pub struct GeographiesService<'a> {
    client: &'a HttpClient,
}

impl<'a> GeographiesService<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Fetches recent media in a geography.
    ///
    /// Reads `min_id` and `count` from `params`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn recent_media(
        &self,
        geo_id: &str,
        params: Option<&Parameters>,
    ) -> Result<ApiResponse<Vec<Media>>, HttpError> {
        let mut query = Query::new();
        if let Some(p) = params {
            query = query
                .set_opt("min_id", p.min_id.as_deref())
                .set_opt("count", p.count);
        }
        let path = query.apply(format!("geographies/{}/media/recent", segment(geo_id)));
        call(self.client, HttpMethod::Get, &path, "").await
    }
}
