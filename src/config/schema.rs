//! Configuration schema for the HTTP client.
//!
//! This module defines the settings structure and validation logic for
//! all tunable client defaults. Every [`Client`](crate::Client) takes a
//! snapshot of these settings at construction time.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default settings for HTTP clients.
///
/// Settings can be loaded from a JSON document under the "simple-http"
/// key. Missing or invalid settings fall back to sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSettings {
    /// Request timeout in milliseconds.
    ///
    /// Maximum time to wait for a complete response (including
    /// connection, headers, and body download). Defaults to 30000ms.
    ///
    /// Must be greater than 0.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Connect timeout in milliseconds.
    ///
    /// Maximum time to wait for the TCP connection to be established.
    /// Defaults to 10000ms. Must be greater than 0.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// Whether to automatically follow HTTP redirects.
    ///
    /// When enabled, the client follows 3xx redirect responses up to
    /// `max_redirects` times. Defaults to true.
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,

    /// Maximum number of redirects to follow.
    ///
    /// Only used when `follow_redirects` is true. Defaults to 10.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: u32,

    /// Maximum size of a response head (status line plus headers) in
    /// bytes.
    ///
    /// Responses whose head exceeds this limit are rejected as a
    /// protocol error. Defaults to 64 KiB. Must be > 0.
    #[serde(default = "default_max_head_size")]
    pub max_head_size: usize,

    /// User-Agent header value sent when the caller does not supply one.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Default headers to include in all requests.
    ///
    /// These headers are added to every request unless overridden by
    /// request-specific headers. Defaults to empty.
    #[serde(default = "default_headers")]
    pub default_headers: HashMap<String, String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
            follow_redirects: default_follow_redirects(),
            max_redirects: default_max_redirects(),
            max_head_size: default_max_head_size(),
            user_agent: default_user_agent(),
            default_headers: default_headers(),
        }
    }
}

impl ClientSettings {
    /// Validates the settings and returns errors if any are invalid.
    ///
    /// # Returns
    ///
    /// `Ok(())` if all settings are valid, or `Err` with a descriptive
    /// error message.
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout == 0 {
            return Err("timeout must be greater than 0".to_string());
        }
        if self.connect_timeout == 0 {
            return Err("connectTimeout must be greater than 0".to_string());
        }
        if self.max_head_size == 0 {
            return Err("maxHeadSize must be greater than 0".to_string());
        }
        if self.user_agent.is_empty() {
            return Err("userAgent must not be empty".to_string());
        }
        Ok(())
    }

    /// Merges another settings object into this one, with the other's
    /// values taking precedence.
    pub fn merge(&self, other: &ClientSettings) -> ClientSettings {
        let mut merged = other.clone();
        if merged.default_headers.is_empty() {
            merged.default_headers = self.default_headers.clone();
        }
        merged
    }
}

fn default_timeout() -> u64 {
    30_000
}

fn default_connect_timeout() -> u64 {
    10_000
}

fn default_follow_redirects() -> bool {
    true
}

fn default_max_redirects() -> u32 {
    10
}

fn default_max_head_size() -> usize {
    64 * 1024
}

fn default_user_agent() -> String {
    concat!("simple-http/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_headers() -> HashMap<String, String> {
    HashMap::new()
}
