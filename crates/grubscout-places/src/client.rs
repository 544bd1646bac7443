//! HTTP client for the Google Places API (New).
//!
//! Wraps `reqwest` with the Places-specific header conventions (API key and
//! field-mask headers), the `"error"` JSON envelope check, and typed response
//! deserialization. The photo media endpoint returns binary image data and
//! deliberately bypasses the JSON path entirely.

use serde::Serialize;

use crate::error::PlacesError;
use crate::types::{LatLng, Place, SearchNearbyResponse};

const DEFAULT_BASE_URL: &str = "https://places.googleapis.com/v1";

const API_KEY_HEADER: &str = "X-Goog-Api-Key";
const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";

/// Response fields requested from nearby search. Fixed regardless of the
/// search arguments; anything outside this list never reaches the client.
const NEARBY_SEARCH_FIELD_MASK: &str = "places.id,places.primaryType,places.displayName,places.websiteUri,places.location,places.googleMapsUri,places.businessStatus,places.addressComponents";

/// Response fields requested from place details: just enough to enumerate a
/// place's photo resources.
const PLACE_DETAILS_FIELD_MASK: &str = "id,displayName,photos";

/// Search radius in meters used when the caller does not pick one.
pub const DEFAULT_RADIUS_M: u32 = 1500;

/// Result cap used when the caller does not pick one.
pub const DEFAULT_MAX_RESULTS: u32 = 20;

/// Pixel caps applied to photo downloads when the caller does not pick them.
pub const DEFAULT_PHOTO_MAX_HEIGHT_PX: u32 = 400;
pub const DEFAULT_PHOTO_MAX_WIDTH_PX: u32 = 400;

/// Client for the Google Places API (New).
///
/// Holds the HTTP client, API key, and base URL. Use [`PlacesClient::new`]
/// for production or [`PlacesClient::with_base_url`] to point at a mock
/// server in tests. The key is immutable once the client is built.
pub struct PlacesClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

/// Request body for `places:searchNearby`.
///
/// `included_types` is serialized as `null` when unset rather than omitted,
/// which lets the backend apply its own type defaults.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchNearbyBody {
    included_types: Option<Vec<String>>,
    max_result_count: u32,
    location_restriction: LocationRestriction,
}

#[derive(Debug, Serialize)]
struct LocationRestriction {
    circle: Circle,
}

#[derive(Debug, Serialize)]
struct Circle {
    center: LatLng,
    radius: u32,
}

impl PlacesClient {
    /// Creates a new client pointed at the production Places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::MissingApiKey`] if `api_key` is empty, or
    /// [`PlacesError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn new(api_key: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::MissingApiKey`] if `api_key` is empty,
    /// [`PlacesError::InvalidBaseUrl`] if `base_url` is not a valid URL, or
    /// [`PlacesError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, PlacesError> {
        if api_key.is_empty() {
            return Err(PlacesError::MissingApiKey);
        }

        reqwest::Url::parse(base_url).map_err(|e| PlacesError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        let client = reqwest::Client::builder()
            .user_agent("grubscout/0.1 (restaurant-discovery)")
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Searches for places within `radius_m` meters of a coordinate.
    ///
    /// `included_types` restricts results to the given place types; `None`
    /// leaves the choice to the backend. Results come back in provider order,
    /// capped at `max_results`, and an absent `places` key in the response
    /// yields an empty list rather than an error.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if the response carries an `"error"` field.
    /// - [`PlacesError::Http`] on network failure.
    /// - [`PlacesError::Deserialize`] if the body is not valid JSON or does
    ///   not match the expected shape.
    pub async fn search_nearby(
        &self,
        lat: f64,
        lng: f64,
        radius_m: u32,
        included_types: Option<Vec<String>>,
        max_results: u32,
    ) -> Result<Vec<Place>, PlacesError> {
        let body = SearchNearbyBody {
            included_types,
            max_result_count: max_results,
            location_restriction: LocationRestriction {
                circle: Circle {
                    center: LatLng {
                        latitude: lat,
                        longitude: lng,
                    },
                    radius: radius_m,
                },
            },
        };

        let context = format!("searchNearby(lat={lat}, lng={lng})");
        let response = self
            .client
            .post(self.endpoint("places:searchNearby"))
            .header(API_KEY_HEADER, &self.api_key)
            .header(FIELD_MASK_HEADER, NEARBY_SEARCH_FIELD_MASK)
            .json(&body)
            .send()
            .await?;

        let body = Self::read_json(response, &context).await?;
        Self::check_api_error(&body)?;

        let parsed: SearchNearbyResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context,
                source: e,
            })?;

        Ok(parsed.places)
    }

    /// Fetches a place's photo metadata by place ID.
    ///
    /// The field mask limits the response to the place ID, display name, and
    /// photo list. The record is returned as parsed JSON without further
    /// shaping; callers pull photo resource names out of the `photos` array
    /// and pass them to [`PlacesClient::get_place_photo`].
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Api`] if the response carries an `"error"` field.
    /// - [`PlacesError::Http`] on network failure.
    /// - [`PlacesError::Deserialize`] if the body is not valid JSON.
    pub async fn get_place_details(
        &self,
        place_id: &str,
    ) -> Result<serde_json::Value, PlacesError> {
        let context = format!("getPlaceDetails(id={place_id})");
        let response = self
            .client
            .get(self.endpoint(&format!("places/{place_id}")))
            .header(API_KEY_HEADER, &self.api_key)
            .header(FIELD_MASK_HEADER, PLACE_DETAILS_FIELD_MASK)
            .send()
            .await?;

        let body = Self::read_json(response, &context).await?;
        Self::check_api_error(&body)?;
        Ok(body)
    }

    /// Downloads a place photo as raw image bytes.
    ///
    /// `photo_name` is the fully-qualified resource name from place details,
    /// e.g. `places/{id}/photos/{photoId}`. Unlike the JSON endpoints, the
    /// media endpoint authenticates through a `key` query parameter, takes no
    /// field mask, and returns binary data — the body is passed back verbatim
    /// and never routed through the JSON envelope check.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] on network failure.
    pub async fn get_place_photo(
        &self,
        photo_name: &str,
        max_height_px: u32,
        max_width_px: u32,
    ) -> Result<Vec<u8>, PlacesError> {
        let response = self
            .client
            .get(self.endpoint(&format!("{photo_name}/media")))
            .query(&[
                ("maxHeightPx", max_height_px.to_string()),
                ("maxWidthPx", max_width_px.to_string()),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await?;

        Ok(response.bytes().await?.to_vec())
    }

    /// Joins a path onto the base URL. The base is stored without a trailing
    /// slash, so this is plain string concatenation; `reqwest` validates the
    /// result when the request is sent.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Reads the response body and parses it as JSON. The HTTP status is not
    /// consulted: backend errors ride on non-2xx responses with a JSON body,
    /// and that body must reach [`Self::check_api_error`] intact.
    async fn read_json(
        response: reqwest::Response,
        context: &str,
    ) -> Result<serde_json::Value, PlacesError> {
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| PlacesError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }

    /// Returns an error if the body carries the backend's `"error"` envelope,
    /// preserving the error payload verbatim.
    fn check_api_error(body: &serde_json::Value) -> Result<(), PlacesError> {
        if let Some(payload) = body.get("error") {
            return Err(PlacesError::Api {
                payload: payload.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> PlacesClient {
        PlacesClient::with_base_url("test-key", base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let result = PlacesClient::new("");
        assert!(matches!(result, Err(PlacesError::MissingApiKey)));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = PlacesClient::with_base_url("test-key", "not a url");
        assert!(matches!(result, Err(PlacesError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = test_client("https://places.googleapis.com/v1");
        assert_eq!(
            client.endpoint("places:searchNearby"),
            "https://places.googleapis.com/v1/places:searchNearby"
        );
    }

    #[test]
    fn endpoint_strips_trailing_slash_from_base() {
        let client = test_client("https://places.googleapis.com/v1/");
        assert_eq!(
            client.endpoint("places/abc123"),
            "https://places.googleapis.com/v1/places/abc123"
        );
    }

    #[test]
    fn check_api_error_passes_clean_body() {
        let body = serde_json::json!({ "places": [] });
        assert!(PlacesClient::check_api_error(&body).is_ok());
    }

    #[test]
    fn check_api_error_carries_payload() {
        let body = serde_json::json!({
            "error": { "code": 403, "message": "denied" }
        });
        let err = PlacesClient::check_api_error(&body).unwrap_err();
        match err {
            PlacesError::Api { payload } => {
                assert_eq!(payload["code"], 403);
                assert_eq!(payload["message"], "denied");
            }
            other => panic!("expected PlacesError::Api, got: {other:?}"),
        }
    }

    #[test]
    fn search_body_serializes_null_included_types() {
        let body = SearchNearbyBody {
            included_types: None,
            max_result_count: 20,
            location_restriction: LocationRestriction {
                circle: Circle {
                    center: LatLng {
                        latitude: 34.050481,
                        longitude: -118.248526,
                    },
                    radius: 1500,
                },
            },
        };
        let json = serde_json::to_value(&body).expect("body should serialize");
        assert!(json["includedTypes"].is_null());
        assert_eq!(json["maxResultCount"], 20);
        assert_eq!(
            json["locationRestriction"]["circle"]["center"]["latitude"],
            34.050481
        );
        assert_eq!(json["locationRestriction"]["circle"]["radius"], 1500);
    }
}
