//! Per-client configuration.
//!
//! A `ClientConfig` is a snapshot of the global [`ClientSettings`]
//! taken when the client is built, further adjusted by builder methods
//! and client setters.
//!
//! [`ClientSettings`]: crate::config::ClientSettings

use crate::config::get_settings;
use crate::redirect::RedirectPolicy;
use crate::transport::Proxy;
use std::collections::HashMap;
use std::time::Duration;

/// Configuration for a single client instance.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Read/write timeout for a request/response cycle.
    pub timeout: Duration,

    /// TCP connect timeout.
    pub connect_timeout: Duration,

    /// Redirect following policy.
    pub redirect: RedirectPolicy,

    /// Optional forward proxy all requests are routed through.
    pub proxy: Option<Proxy>,

    /// User-Agent value used when the caller supplies none.
    pub user_agent: String,

    /// Cap on the response head size in bytes.
    pub max_head_size: usize,

    /// Headers added to every request unless overridden per call.
    pub default_headers: HashMap<String, String>,
}

impl ClientConfig {
    /// Creates a config from the global settings.
    pub fn from_global_settings() -> Self {
        let settings = get_settings();
        Self {
            timeout: Duration::from_millis(settings.timeout),
            connect_timeout: Duration::from_millis(settings.connect_timeout),
            redirect: RedirectPolicy {
                follow: settings.follow_redirects,
                max_redirects: settings.max_redirects,
            },
            proxy: None,
            user_agent: settings.user_agent,
            max_head_size: settings.max_head_size,
            default_headers: settings.default_headers,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_global_settings()
    }
}
