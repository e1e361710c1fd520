//! HTTP request data models.
//!
//! This module defines the core data structures for representing an
//! outgoing HTTP request: the method, the resolved absolute URL, headers,
//! and an optional body.

use crate::models::headers::Headers;
use url::Url;

/// HTTP request method.
///
/// Only the methods the client issues (directly or after a redirect
/// rewrite) are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method - retrieve a resource
    GET,
    /// HTTP POST method - submit data to create a resource
    POST,
    /// HTTP HEAD method - retrieve headers only
    HEAD,
}

impl HttpMethod {
    /// Returns the string representation of the HTTP method.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::HEAD => "HEAD",
        }
    }

    /// Parses a string into an HttpMethod.
    ///
    /// # Returns
    ///
    /// `Some(HttpMethod)` if the string is a supported method, `None`
    /// otherwise.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Some(HttpMethod::GET),
            "POST" => Some(HttpMethod::POST),
            "HEAD" => Some(HttpMethod::HEAD),
            _ => None,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An HTTP request ready to be serialized onto a connection.
///
/// The URL is always absolute by the time an `HttpRequest` exists; path
/// resolution against the client's base URL happens in the client layer.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: HttpMethod,

    /// Absolute target URL.
    pub url: Url,

    /// Request headers.
    ///
    /// Contains the caller's custom headers plus library defaults
    /// (Host, User-Agent, Content-Length) filled in where the caller
    /// did not supply them.
    pub headers: Headers,

    /// Optional request body.
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a new request with no headers or body.
    pub fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Headers::new(),
            body: None,
        }
    }

    /// The request target in origin-form: path plus optional query.
    pub fn origin_form(&self) -> String {
        let mut target = self.url.path().to_string();
        if let Some(query) = self.url.query() {
            target.push('?');
            target.push_str(query);
        }
        target
    }

    /// The `Host` header value for this request's URL, including a
    /// non-default port.
    pub fn host_header(&self) -> String {
        let host = self.url.host_str().unwrap_or_default();
        match self.url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        }
    }
}
