//! Client for the Google Places API (New).
//!
//! Three read operations against the backend — nearby search, place details
//! (photo metadata), and photo media download — plus a helper that searches
//! for nearby restaurants and keeps those exposing a website. Every call is a
//! single request/response round trip: no retry, no caching, no pagination.

mod client;
mod error;
mod restaurants;
mod types;

pub use client::{
    PlacesClient, DEFAULT_MAX_RESULTS, DEFAULT_PHOTO_MAX_HEIGHT_PX, DEFAULT_PHOTO_MAX_WIDTH_PX,
    DEFAULT_RADIUS_M,
};
pub use error::PlacesError;
pub use restaurants::{find_restaurant_urls, DEFAULT_LATITUDE, DEFAULT_LONGITUDE};
pub use types::{
    AddressComponent, LatLng, LocalizedText, Place, RestaurantSummary, SearchNearbyResponse,
};
