//! Media endpoints and the media data model.
//!
//! [`Media`] is shared by every endpoint that returns posts: user feeds,
//! tag and location timelines, search, and the popular list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::{null_default, ApiResponse, HttpClient, HttpError, HttpMethod};
use crate::services::comments::Comment;
use crate::services::users::User;
use crate::services::{call, segment, timestamp, Parameters, Query};

/// A photo or video post.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    /// The media identifier.
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    /// `"image"` or `"video"`.
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub media_type: String,
    /// Users tagged in the photo.
    #[serde(deserialize_with = "null_default")]
    pub users_in_photo: Vec<UserInPhoto>,
    /// Name of the applied filter.
    #[serde(deserialize_with = "null_default")]
    pub filter: String,
    /// Hashtags, without `#`.
    #[serde(deserialize_with = "null_default")]
    pub tags: Vec<String>,
    /// Comment summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<MediaComments>,
    /// The caption, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<MediaCaption>,
    /// Like summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<MediaLikes>,
    /// Permalink on instagram.com.
    #[serde(deserialize_with = "null_default")]
    pub link: String,
    /// The author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Whether the authenticated user liked this media.
    #[serde(deserialize_with = "null_default")]
    pub user_has_liked: bool,
    /// Publication time.
    #[serde(with = "timestamp")]
    pub created_time: Option<DateTime<Utc>>,
    /// Image renditions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<MediaImages>,
    /// Video renditions, for videos only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videos: Option<MediaVideos>,
    /// Where the media was taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<MediaLocation>,
}

impl Media {
    /// Returns `true` for video posts.
    #[must_use]
    pub fn is_video(&self) -> bool {
        self.media_type == "video"
    }
}

/// Comment count and the most recent comments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaComments {
    /// Total number of comments.
    #[serde(deserialize_with = "null_default")]
    pub count: i64,
    /// A sample of comments.
    #[serde(deserialize_with = "null_default")]
    pub data: Vec<Comment>,
}

/// Like count and a sample of likers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaLikes {
    /// Total number of likes.
    #[serde(deserialize_with = "null_default")]
    pub count: i64,
    /// A sample of users who liked the media.
    #[serde(deserialize_with = "null_default")]
    pub data: Vec<User>,
}

/// A media caption, which the API models as a comment by the author.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaCaption {
    /// The caption identifier.
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    /// Caption text.
    #[serde(deserialize_with = "null_default")]
    pub text: String,
    /// The author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<User>,
    /// When the caption was written.
    #[serde(with = "timestamp")]
    pub created_time: Option<DateTime<Utc>>,
}

/// A user tagged in a photo.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInPhoto {
    /// The tagged user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Where the tag sits on the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Relative coordinates on an image, from 0.0 to 1.0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    /// Horizontal offset.
    #[serde(deserialize_with = "null_default")]
    pub x: f64,
    /// Vertical offset.
    #[serde(deserialize_with = "null_default")]
    pub y: f64,
}

/// Available image renditions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaImages {
    /// 306 pixels square.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_resolution: Option<MediaImage>,
    /// 150 pixels square.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<MediaImage>,
    /// 612 pixels square.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_resolution: Option<MediaImage>,
}

/// A single image rendition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaImage {
    /// Where the file is served from.
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    /// Width in pixels.
    #[serde(deserialize_with = "null_default")]
    pub width: u32,
    /// Height in pixels.
    #[serde(deserialize_with = "null_default")]
    pub height: u32,
}

/// Available video renditions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaVideos {
    /// The smaller encoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_resolution: Option<MediaVideo>,
    /// The full-size encoding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_resolution: Option<MediaVideo>,
}

/// A single video rendition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaVideo {
    /// Where the file is served from.
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    /// Width in pixels.
    #[serde(deserialize_with = "null_default")]
    pub width: u32,
    /// Height in pixels.
    #[serde(deserialize_with = "null_default")]
    pub height: u32,
}

/// The place a media item was taken.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaLocation {
    /// The location identifier.
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
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

/// Access to the `media/*` endpoints.
#[derive(Clone, Copy, Debug)]
pub struct MediaService<'a> {
    client: &'a HttpClient,
}

impl<'a> MediaService<'a> {
    pub(crate) const fn new(client: &'a HttpClient) -> Self {
        Self { client }
    }

    /// Fetches a single media item.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn get(&self, media_id: &str) -> Result<ApiResponse<Media>, HttpError> {
        let path = format!("media/{}", segment(media_id));
        call(self.client, HttpMethod::Get, &path, "").await
    }

    /// Searches recent media around a point.
    ///
    /// Reads `lat`, `lng`, `min_timestamp`, `max_timestamp`, `distance` and
    /// `count` from `params`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn search(
        &self,
        params: Option<&Parameters>,
    ) -> Result<ApiResponse<Vec<Media>>, HttpError> {
        let mut query = Query::new();
        if let Some(p) = params {
            query = query
                .set_fixed("lat", p.lat)
                .set_fixed("lng", p.lng)
                .set_opt("min_timestamp", p.min_timestamp)
                .set_opt("max_timestamp", p.max_timestamp)
                .set_fixed("distance", p.distance)
                .set_opt("count", p.count);
        }
        let path = query.apply("media/search".to_string());
        call(self.client, HttpMethod::Get, &path, "").await
    }

    /// Fetches the currently popular media.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn popular(&self) -> Result<ApiResponse<Vec<Media>>, HttpError> {
        call(self.client, HttpMethod::Get, "media/popular", "").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::testing::stub_client;
    use crate::config::ClientConfig;

    const MEDIA_JSON: &str = r#"{
        "type": "image",
        "users_in_photo": [{"user": {"username": "kevin"}, "position": {"x": 0.315, "y": 0.9111}}],
        "filter": "Walden",
        "tags": ["expobar"],
        "comments": {"count": 1, "data": [{"id": "420", "text": "Really amazing art work", "created_time": "1280780324", "from": {"username": "mikeyk"}}]},
        "caption": null,
        "likes": {"count": 1, "data": [{"username": "jack"}]},
        "link": "http://instagr.am/p/D/",
        "user": {"username": "kevin", "id": "3"},
        "created_time": "1279340983",
        "images": {
            "low_resolution": {"url": "http://example.com/low.jpg", "width": 306, "height": 306},
            "thumbnail": {"url": "http://example.com/thumb.jpg", "width": 150, "height": 150},
            "standard_resolution": {"url": "http://example.com/std.jpg", "width": 612, "height": 612}
        },
        "id": "3",
        "location": {"id": 520640, "name": "Le Truc", "latitude": 37.7, "longitude": -122.4},
        "user_has_liked": true
    }"#;

    #[test]
    fn test_media_deserialization() {
        let media: Media = serde_json::from_str(MEDIA_JSON).unwrap();

        assert_eq!(media.id, "3");
        assert_eq!(media.media_type, "image");
        assert!(!media.is_video());
        assert_eq!(media.filter, "Walden");
        assert_eq!(media.tags, vec!["expobar".to_string()]);
        assert!(media.caption.is_none());
        assert!(media.user_has_liked);
        assert_eq!(media.created_time.unwrap().timestamp(), 1_279_340_983);

        let comments = media.comments.unwrap();
        assert_eq!(comments.count, 1);
        assert_eq!(comments.data[0].from.as_ref().unwrap().username, "mikeyk");

        let tagged = &media.users_in_photo[0];
        assert_eq!(tagged.position, Some(Position { x: 0.315, y: 0.9111 }));

        let images = media.images.unwrap();
        assert_eq!(images.standard_resolution.unwrap().width, 612);
        assert!(media.videos.is_none());

        let location = media.location.unwrap();
        assert_eq!(location.id, 520_640);
        assert_eq!(location.name, "Le Truc");
    }

    #[test]
    fn test_null_fields_decode_to_zero_values() {
        let media: Media = serde_json::from_str(
            r#"{"id":"5","type":null,"tags":null,"users_in_photo":null,"user_has_liked":null,"created_time":null,"location":{"id":null,"name":"Somewhere","latitude":null}}"#,
        )
        .unwrap();

        assert_eq!(media.id, "5");
        assert_eq!(media.media_type, "");
        assert!(media.tags.is_empty());
        assert!(media.users_in_photo.is_empty());
        assert!(!media.user_has_liked);
        assert!(media.created_time.is_none());
        let location = media.location.unwrap();
        assert_eq!(location.id, 0);
        assert_eq!(location.name, "Somewhere");
        assert!(location.latitude.abs() < f64::EPSILON);
    }

    #[test]
    fn test_null_list_payload_is_empty() {
        let (client, _transport) =
            stub_client(ClientConfig::default(), r#"{"meta":{"code":200},"data":null}"#);

        let popular = tokio_test::block_on(client.media().popular()).unwrap();

        assert!(popular.is_empty());
        assert_eq!(popular.meta().unwrap().code, 200);
    }

    #[test]
    fn test_video_media() {
        let media: Media = serde_json::from_str(
            r#"{"type":"video","videos":{"standard_resolution":{"url":"http://example.com/v.mp4","width":640,"height":640}}}"#,
        )
        .unwrap();

        assert!(media.is_video());
        assert_eq!(
            media.videos.unwrap().standard_resolution.unwrap().url,
            "http://example.com/v.mp4"
        );
    }

    #[test]
    fn test_get_encodes_id() {
        let (client, transport) = stub_client(ClientConfig::default(), r#"{"data":{"id":"1_2"}}"#);

        let media = tokio_test::block_on(client.media().get("1_2")).unwrap();

        assert_eq!(media.id, "1_2");
        assert_eq!(transport.last_request().url.path(), "/v1/media/1_2");
    }

    #[test]
    fn test_search_formats_coordinates() {
        let (client, transport) = stub_client(ClientConfig::default(), r#"{"data":[]}"#);
        let params = Parameters {
            lat: Some(48.858844),
            lng: Some(2.294351),
            distance: Some(1000.0),
            count: Some(3),
            ..Default::default()
        };

        tokio_test::block_on(client.media().search(Some(&params))).unwrap();

        assert_eq!(
            transport.last_request().url.query(),
            Some("count=3&distance=1000.0000000&lat=48.8588440&lng=2.2943510")
        );
    }

    #[test]
    fn test_popular() {
        let (client, transport) = stub_client(ClientConfig::default(), &format!(r#"{{"data":[{MEDIA_JSON}]}}"#));

        let popular = tokio_test::block_on(client.media().popular()).unwrap();

        assert_eq!(popular.len(), 1);
        assert_eq!(transport.last_request().url.as_str(), "https://api.instagram.com/v1/media/popular");
    }
}
