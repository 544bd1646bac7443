use std::path::PathBuf;

use clap::{Parser, Subcommand};
use grubscout_places::{
    PlacesClient, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_PHOTO_MAX_HEIGHT_PX,
    DEFAULT_PHOTO_MAX_WIDTH_PX, DEFAULT_RADIUS_M,
};

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "grubscout-cli")]
#[command(about = "Nearby-restaurant lookup over the Google Places API")]
struct Cli {
    /// Places API key; falls back to the GOOGLE_PLACES_API_KEY env var.
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for nearby restaurants that list a website.
    Restaurants {
        #[arg(long, default_value_t = DEFAULT_LATITUDE)]
        lat: f64,
        #[arg(long, default_value_t = DEFAULT_LONGITUDE)]
        lng: f64,
        /// Search radius in meters.
        #[arg(long, default_value_t = DEFAULT_RADIUS_M)]
        radius: u32,
    },
    /// Fetch a place's photo metadata by place ID.
    Details { place_id: String },
    /// Download a place photo to disk.
    Photo {
        /// Fully-qualified photo resource name, e.g. places/{id}/photos/{photoId}.
        photo_name: String,
        #[arg(long, default_value_t = DEFAULT_PHOTO_MAX_HEIGHT_PX)]
        max_height: u32,
        #[arg(long, default_value_t = DEFAULT_PHOTO_MAX_WIDTH_PX)]
        max_width: u32,
        /// Output file path.
        #[arg(long, default_value = "photo.jpg")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let api_key = config::resolve_api_key(cli.api_key)?;
    let client = PlacesClient::new(&api_key)?;

    match cli.command {
        Commands::Restaurants { lat, lng, radius } => {
            commands::run_restaurants(&client, lat, lng, radius).await
        }
        Commands::Details { place_id } => commands::run_details(&client, &place_id).await,
        Commands::Photo {
            photo_name,
            max_height,
            max_width,
            output,
        } => commands::run_photo(&client, &photo_name, max_height, max_width, &output).await,
    }
}
