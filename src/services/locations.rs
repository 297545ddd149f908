//! Location endpoints.

use serde::{Deserialize, Serialize};

use crate::clients::{null_default, ApiResponse, HttpClient, HttpError, HttpMethod};
use crate::services::media::Media;
use crate::services::{call, segment, Parameters, Query};

/// Largest radius, in meters, accepted by location search.
pub const MAX_SEARCH_DISTANCE: f64 = 5000.0;

/// A named place.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    /// The location identifier.
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    /// Place name.
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    /// Latitude in degrees.
    #[serde(deserialize_with = "null_default")]
    pub latitude: f64,
    /// Longitude in degrees.
    #[serde(deserialize_with = "null_default")]
    pub longitude: f64,
}

/// Access to the `locations/*` endpoints.
#[derive(Clone, Copy, Debug)]
pub struct LocationsService<'a> {
    client: &'a HttpClient,
}

impl<'a> LocationsService<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Fetches a location.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, location_id: &str) -> Result<ApiResponse<Location>, HttpError> {
        let path = format!("locations/{}", segment(location_id));
        call(self.client, HttpMethod::Get, &path, "").await
    }

    /// Fetches recent media taken at a location.
    ///
    /// Reads `min_timestamp`, `max_timestamp`, `min_id` and `max_id`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn recent_media(
        &self,
        location_id: &str,
        params: Option<&Parameters>,
    ) -> Result<ApiResponse<Vec<Media>>, HttpError> {
        let mut query = Query::new();
        if let Some(p) = params {
            query = query
                .set_opt("min_timestamp", p.min_timestamp)
                .set_opt("max_timestamp", p.max_timestamp)
                .set_opt("min_id", p.min_id.as_deref())
                .set_opt("max_id", p.max_id.as_deref());
        }
        let path = query.apply(format!("locations/{}/media/recent", segment(location_id)));
        call(self.client, HttpMethod::Get, &path, "").await
    }

    /// Searches locations around a point.
    ///
    /// Reads `distance` from `params`, capped at [`MAX_SEARCH_DISTANCE`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn search(
        &self,
        lat: f64,
        lng: f64,
        params: Option<&Parameters>,
    ) -> Result<ApiResponse<Vec<Location>>, HttpError> {
        let distance = params
            .and_then(|p| p.distance)
            .map(|d| d.min(MAX_SEARCH_DISTANCE));
        let path = Query::new()
            .set_fixed("lat", Some(lat))
            .set_fixed("lng", Some(lng))
            .set_fixed("distance", distance)
            .apply("locations/search".to_string());
        call(self.client, HttpMethod::Get, &path, "").await
    }
}
