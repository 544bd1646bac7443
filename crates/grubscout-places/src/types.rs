//! Places API (New) response types.
//!
//! All types model the JSON structures returned by the Places API. The
//! nearby-search response is shaped by the request field mask, so every
//! field is optional or defaulted; a record missing a field deserializes
//! cleanly rather than failing the whole response.

use serde::{Deserialize, Serialize};

/// Top-level body of a `places:searchNearby` response.
///
/// The backend omits the `places` key entirely when nothing matched;
/// `#[serde(default)]` turns that into an empty list.
#[derive(Debug, Deserialize)]
pub struct SearchNearbyResponse {
    #[serde(default)]
    pub places: Vec<Place>,
}

/// A point of interest returned by nearby search.
///
/// Only the eight fields named in the search field mask are populated;
/// everything else never appears on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub primary_type: Option<String>,
    #[serde(default)]
    pub display_name: Option<LocalizedText>,
    #[serde(default)]
    pub website_uri: Option<String>,
    #[serde(default)]
    pub location: Option<LatLng>,
    #[serde(default)]
    pub google_maps_uri: Option<String>,
    #[serde(default)]
    pub business_status: Option<String>,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

/// Localized text, e.g. a place's display name.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    pub text: String,
    #[serde(default)]
    pub language_code: Option<String>,
}

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// One component of a place's structured address.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressComponent {
    #[serde(default)]
    pub long_text: Option<String>,
    #[serde(default)]
    pub short_text: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub language_code: Option<String>,
}

/// A restaurant that exposes a website, derived from a nearby-search result.
///
/// `name` is empty when the backend omitted the display name; `maps_url`
/// is `None` when the maps link was absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestaurantSummary {
    pub name: String,
    pub website: String,
    pub maps_url: Option<String>,
}
