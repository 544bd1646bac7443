//! Subcommand implementations.

use std::path::Path;

use grubscout_places::{find_restaurant_urls, PlacesClient};

/// Searches for nearby restaurants and prints those with a website as JSON.
///
/// # Errors
///
/// Returns an error if the search fails or the summaries cannot be printed.
pub(crate) async fn run_restaurants(
    client: &PlacesClient,
    lat: f64,
    lng: f64,
    radius_m: u32,
) -> anyhow::Result<()> {
    let restaurants = find_restaurant_urls(client, lat, lng, radius_m).await?;
    println!("{}", serde_json::to_string_pretty(&restaurants)?);
    Ok(())
}

/// Prints a place's photo-metadata record as JSON.
///
/// # Errors
///
/// Returns an error if the details request fails.
pub(crate) async fn run_details(client: &PlacesClient, place_id: &str) -> anyhow::Result<()> {
    let details = client.get_place_details(place_id).await?;
    println!("{}", serde_json::to_string_pretty(&details)?);
    Ok(())
}

/// Downloads a place photo and writes the raw bytes to `output`.
///
/// # Errors
///
/// Returns an error if the download or the file write fails.
pub(crate) async fn run_photo(
    client: &PlacesClient,
    photo_name: &str,
    max_height_px: u32,
    max_width_px: u32,
    output: &Path,
) -> anyhow::Result<()> {
    let bytes = client
        .get_place_photo(photo_name, max_height_px, max_width_px)
        .await?;
    std::fs::write(output, &bytes)?;
    tracing::info!(
        bytes = bytes.len(),
        path = %output.display(),
        "photo written"
    );
    Ok(())
}
