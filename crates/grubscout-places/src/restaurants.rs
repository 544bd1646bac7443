//! Restaurant discovery built on nearby search.

use crate::client::{PlacesClient, DEFAULT_MAX_RESULTS};
use crate::error::PlacesError;
use crate::types::{Place, RestaurantSummary};

/// Fallback search center: downtown Los Angeles.
pub const DEFAULT_LATITUDE: f64 = 34.050481;
pub const DEFAULT_LONGITUDE: f64 = -118.248526;

/// Searches for restaurants near a coordinate and returns those that list a
/// website.
///
/// Runs a nearby search restricted to the `restaurant` place type, then keeps
/// only results with a non-empty `websiteUri`, preserving the backend's
/// ordering among the survivors. The count of raw search hits is logged at
/// info level; it is not part of the return value.
///
/// # Errors
///
/// Propagates any [`PlacesError`] from the underlying search.
pub async fn find_restaurant_urls(
    client: &PlacesClient,
    lat: f64,
    lng: f64,
    radius_m: u32,
) -> Result<Vec<RestaurantSummary>, PlacesError> {
    let places = client
        .search_nearby(
            lat,
            lng,
            radius_m,
            Some(vec!["restaurant".to_owned()]),
            DEFAULT_MAX_RESULTS,
        )
        .await?;

    tracing::info!(count = places.len(), "found nearby places");

    Ok(places.into_iter().filter_map(summarize).collect())
}

/// Maps a place to a [`RestaurantSummary`], or `None` when it has no website.
fn summarize(place: Place) -> Option<RestaurantSummary> {
    let website = place.website_uri.filter(|w| !w.is_empty())?;
    Some(RestaurantSummary {
        name: place.display_name.map(|n| n.text).unwrap_or_default(),
        website,
        maps_url: place.google_maps_uri,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(value: serde_json::Value) -> Place {
        serde_json::from_value(value).expect("place fixture should deserialize")
    }

    #[test]
    fn summarize_maps_all_fields() {
        let summary = summarize(place(serde_json::json!({
            "id": "p1",
            "displayName": { "text": "Taco Stand", "languageCode": "en" },
            "websiteUri": "https://tacostand.example",
            "googleMapsUri": "https://maps.google.com/?cid=1"
        })))
        .expect("place with website should summarize");

        assert_eq!(summary.name, "Taco Stand");
        assert_eq!(summary.website, "https://tacostand.example");
        assert_eq!(
            summary.maps_url.as_deref(),
            Some("https://maps.google.com/?cid=1")
        );
    }

    #[test]
    fn summarize_drops_place_without_website() {
        let result = summarize(place(serde_json::json!({
            "id": "p2",
            "displayName": { "text": "Cash Only Diner" }
        })));
        assert!(result.is_none());
    }

    #[test]
    fn summarize_drops_empty_website() {
        let result = summarize(place(serde_json::json!({
            "id": "p3",
            "websiteUri": ""
        })));
        assert!(result.is_none());
    }

    #[test]
    fn summarize_defaults_missing_name_to_empty() {
        let summary = summarize(place(serde_json::json!({
            "id": "p4",
            "websiteUri": "https://unnamed.example"
        })))
        .expect("place with website should summarize");
        assert_eq!(summary.name, "");
        assert!(summary.maps_url.is_none());
    }
}
