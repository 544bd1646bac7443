use thiserror::Error;

/// Errors returned by the Places API client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// The API key was empty or missing at construction time.
    #[error("Places API key must not be empty")]
    MissingApiKey,

    /// The base URL passed to [`crate::PlacesClient::with_base_url`] did not parse.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a JSON body with an `"error"` field. Carries the
    /// error payload exactly as the backend sent it.
    #[error("Places API error: {payload}")]
    Api { payload: serde_json::Value },

    /// The response body could not be parsed as the expected JSON shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
