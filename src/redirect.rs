//! Redirect policy and hop resolution.
//!
//! Decides whether a 3xx response produces a follow-up request, what
//! URL it targets, and how the method and body are rewritten. The hop
//! loop itself lives in the client.

use crate::models::{Headers, HttpMethod};
use url::Url;

/// Controls automatic redirect following.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectPolicy {
    /// Whether 3xx responses are followed at all.
    pub follow: bool,

    /// Maximum number of hops before giving up.
    pub max_redirects: u32,
}

impl RedirectPolicy {
    /// Follows redirects up to `max_redirects` hops.
    pub fn follow(max_redirects: u32) -> Self {
        Self {
            follow: true,
            max_redirects,
        }
    }

    /// Returns 3xx responses to the caller unchanged.
    pub fn none() -> Self {
        Self {
            follow: false,
            max_redirects: 0,
        }
    }
}

impl Default for RedirectPolicy {
    fn default() -> Self {
        Self::follow(10)
    }
}

/// The follow-up request derived from a redirect response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectAction {
    /// Absolute URL of the next hop.
    pub url: Url,

    /// Method for the next hop, after any rewrite.
    pub method: HttpMethod,

    /// Whether the request body is dropped for the next hop.
    pub drop_body: bool,
}

/// Computes the follow-up request for a redirect response.
///
/// Returns `None` when the status is not a redirect the client
/// follows, when there is no `Location` header, or when the location
/// does not resolve against the current URL. Callers treat `None` as
/// "hand the response to the caller as-is".
///
/// Method rewriting follows mainstream client behavior: 303 always
/// becomes GET, 301/302 rewrite POST to GET, 307/308 preserve the
/// method and body. HEAD is never rewritten.
pub fn redirect_action(
    method: HttpMethod,
    status_code: u16,
    headers: &Headers,
    current: &Url,
) -> Option<RedirectAction> {
    if !matches!(status_code, 301 | 302 | 303 | 307 | 308) {
        return None;
    }

    let location = headers.get("Location")?;
    let url = current.join(location).ok()?;

    let (method, drop_body) = match status_code {
        303 if method != HttpMethod::HEAD => (HttpMethod::GET, true),
        301 | 302 if method == HttpMethod::POST => (HttpMethod::GET, true),
        _ => (method, false),
    };

    Some(RedirectAction {
        url,
        method,
        drop_body,
    })
}
