//! HTTP client error types.
//!
//! This module defines the single error type surfaced by the client,
//! covering construction, connection, protocol, redirect, and proxy
//! failures.

use std::fmt;
use std::io;

/// Errors that can occur while building or executing an HTTP request.
///
/// Every failure in the library funnels into this type so that callers
/// can handle (and print) a single error at the top level.
#[derive(Debug)]
pub enum HttpError {
    /// Network error occurred during request execution.
    ///
    /// This includes connection failures, DNS resolution errors,
    /// and other socket-level issues.
    Network(String),

    /// Request timed out before completion.
    ///
    /// Raised when connecting, writing, or reading exceeds the
    /// configured timeout duration.
    Timeout,

    /// Invalid URL provided for the base address, a request path,
    /// or a proxy.
    InvalidUrl(String),

    /// URL scheme is not supported.
    ///
    /// Only plain `http` is supported; anything else (including
    /// `https`) is rejected at parse time.
    UnsupportedScheme(String),

    /// HTTP protocol error.
    ///
    /// Malformed status line, header line, or chunked framing in the
    /// server's response.
    Protocol(String),

    /// Request building error.
    ///
    /// Errors that occur when serializing the request head, such as a
    /// header name or value containing control characters.
    Build(String),

    /// Proxy configuration or connection error.
    Proxy(String),

    /// The redirect hop limit was exceeded.
    TooManyRedirects(usize),

    /// Response body is not valid UTF-8.
    ///
    /// Returned by [`HttpResponse::utf8`]; the raw bytes remain
    /// accessible through [`HttpResponse::bytes`].
    ///
    /// [`HttpResponse::utf8`]: crate::models::HttpResponse::utf8
    /// [`HttpResponse::bytes`]: crate::models::HttpResponse::bytes
    NonUtf8Body,
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::Network(msg) => write!(f, "Network error: {}", msg),
            HttpError::Timeout => write!(f, "Request timed out"),
            HttpError::InvalidUrl(url) => write!(f, "Invalid URL: {}", url),
            HttpError::UnsupportedScheme(scheme) => {
                write!(f, "Unsupported URL scheme: {}", scheme)
            }
            HttpError::Protocol(msg) => write!(f, "HTTP protocol error: {}", msg),
            HttpError::Build(msg) => write!(f, "Request build error: {}", msg),
            HttpError::Proxy(msg) => write!(f, "Proxy error: {}", msg),
            HttpError::TooManyRedirects(limit) => {
                write!(f, "Redirect limit of {} hops exceeded", limit)
            }
            HttpError::NonUtf8Body => write!(f, "Response body is not valid UTF-8"),
        }
    }
}

impl std::error::Error for HttpError {}

/// Convert I/O errors to HttpError.
///
/// Timeouts keep their own variant so callers can distinguish a slow
/// server from an unreachable one.
impl From<io::Error> for HttpError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => HttpError::Timeout,
            _ => HttpError::Network(err.to_string()),
        }
    }
}

/// Convert URL parsing errors to HttpError.
impl From<url::ParseError> for HttpError {
    fn from(err: url::ParseError) -> Self {
        HttpError::InvalidUrl(err.to_string())
    }
}
