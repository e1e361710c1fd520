//! Configuration management for the HTTP client.
//!
//! This module provides settings loading, validation, and access through a
//! singleton pattern. Settings are loaded from a JSON value under the
//! "simple-http" key and merged with defaults; each client snapshots the
//! global settings when it is built.

pub mod schema;

pub use schema::ClientSettings;

use once_cell::sync::Lazy;
use serde_json::Value;
use std::sync::RwLock;

/// Global settings instance.
///
/// Lazily initialized on first access and updated when settings are
/// reloaded.
static SETTINGS: Lazy<RwLock<ClientSettings>> =
    Lazy::new(|| RwLock::new(ClientSettings::default()));

/// Loads settings from a JSON value.
///
/// Reads the "simple-http" key, merges with defaults, validates the
/// result, and updates the global settings.
///
/// # Arguments
///
/// * `settings_json` - Optional JSON value containing user settings
///   under the "simple-http" key
///
/// # Returns
///
/// `Ok(ClientSettings)` with the loaded settings, or `Err` if
/// validation fails.
///
/// # Example
///
/// ```
/// use simple_http::config::load_settings;
/// use serde_json::json;
///
/// let settings = json!({
///     "simple-http": {
///         "timeout": 60000,
///         "followRedirects": false
///     }
/// });
///
/// let settings = load_settings(Some(settings)).unwrap();
/// assert_eq!(settings.timeout, 60000);
/// ```
pub fn load_settings(settings_json: Option<Value>) -> Result<ClientSettings, String> {
    let mut settings = ClientSettings::default();

    if let Some(json) = settings_json {
        if let Some(user_json) = json.get("simple-http") {
            match serde_json::from_value::<ClientSettings>(user_json.clone()) {
                Ok(user_settings) => {
                    settings = settings.merge(&user_settings);
                }
                Err(e) => {
                    log::warn!("failed to parse simple-http settings: {}, using defaults", e);
                }
            }
        }
    }

    settings
        .validate()
        .map_err(|e| format!("Invalid configuration: {}", e))?;

    if let Ok(mut global) = SETTINGS.write() {
        *global = settings.clone();
    }

    Ok(settings)
}

/// Gets the current global settings.
///
/// Singleton accessor that returns a clone of the current settings. If
/// nothing has been loaded yet, returns the defaults.
pub fn get_settings() -> ClientSettings {
    SETTINGS
        .read()
        .map(|s| s.clone())
        .unwrap_or_else(|_| ClientSettings::default())
}

/// Updates a specific setting in place.
///
/// # Arguments
///
/// * `updater` - A closure that modifies the settings
///
/// # Example
///
/// ```
/// use simple_http::config::update_settings;
///
/// update_settings(|settings| {
///     settings.max_redirects = 5;
/// });
/// ```
pub fn update_settings<F>(updater: F)
where
    F: FnOnce(&mut ClientSettings),
{
    if let Ok(mut settings) = SETTINGS.write() {
        updater(&mut settings);

        if let Err(e) = settings.validate() {
            log::warn!("settings validation failed after update: {}, reverting", e);
            *settings = ClientSettings::default();
        }
    }
}
