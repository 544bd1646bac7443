//! API-key resolution at the process boundary.
//!
//! The library client takes an explicit key; this module owns the "read it
//! from the environment" behavior. Resolution order: explicit CLI override,
//! then the `GOOGLE_PLACES_API_KEY` environment variable. Empty values count
//! as absent.

use thiserror::Error;

pub const API_KEY_ENV_VAR: &str = "GOOGLE_PLACES_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// Resolves the Places API key from an explicit override or the environment.
///
/// # Errors
///
/// Returns [`ConfigError::MissingEnvVar`] when neither source supplies a
/// non-empty key.
pub fn resolve_api_key(explicit: Option<String>) -> Result<String, ConfigError> {
    resolve_api_key_with(explicit, |var| std::env::var(var))
}

/// Core resolution logic, decoupled from the actual environment so it can be
/// tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn resolve_api_key_with<F>(explicit: Option<String>, lookup: F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    if let Some(key) = explicit.filter(|k| !k.is_empty()) {
        return Ok(key);
    }
    lookup(API_KEY_ENV_VAR)
        .ok()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(API_KEY_ENV_VAR.to_owned()))
}
