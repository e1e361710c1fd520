//! HTTP response data models.
//!
//! This module defines the buffered response returned by the client,
//! including status information, headers, the body buffer, and the
//! accessors that materialize the body in different representations.

use crate::error::HttpError;
use crate::models::headers::Headers;
use std::borrow::Cow;
use std::time::Duration;

/// Represents a fully buffered HTTP response received from a server.
///
/// The body is always read to completion before an `HttpResponse` is
/// handed to the caller, so every accessor operates on an in-memory
/// buffer and never touches the network.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code (e.g., 200, 404, 500).
    pub status_code: u16,

    /// HTTP status text (e.g., "OK", "Not Found").
    ///
    /// Taken verbatim from the status line; may be empty, as the reason
    /// phrase is optional.
    pub status_text: String,

    /// Protocol version from the status line, e.g. "HTTP/1.1".
    pub version: String,

    /// Response headers returned by the server.
    pub headers: Headers,

    /// Response body as raw bytes.
    ///
    /// `Vec<u8>` rather than `String` so binary responses are
    /// representable; use [`text`](Self::text) or [`utf8`](Self::utf8)
    /// for textual views.
    pub body: Vec<u8>,

    /// Total request duration from connect to last body byte.
    pub duration: Duration,

    /// Total response size in bytes, headers included.
    pub size: usize,
}

impl HttpResponse {
    /// Creates a new HttpResponse with the given status code and text.
    pub fn new(status_code: u16, status_text: String) -> Self {
        Self {
            status_code,
            status_text,
            version: "HTTP/1.1".to_string(),
            headers: Headers::new(),
            body: Vec::new(),
            duration: Duration::from_secs(0),
            size: 0,
        }
    }

    /// Checks if the response status indicates success (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Checks if the response status is a redirect (3xx).
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status_code)
    }

    /// Returns the value of a response header, if present.
    ///
    /// Lookup is case-insensitive.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Returns the body as a string, replacing invalid UTF-8 sequences
    /// with the replacement character.
    ///
    /// This accessor never fails; use [`utf8`](Self::utf8) when invalid
    /// UTF-8 should be an error instead.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Returns the body as a UTF-8 string slice.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::NonUtf8Body`] if the body is not valid
    /// UTF-8. The raw bytes remain accessible through
    /// [`bytes`](Self::bytes).
    pub fn utf8(&self) -> Result<&str, HttpError> {
        std::str::from_utf8(&self.body).map_err(|_| HttpError::NonUtf8Body)
    }

    /// Returns the body as a borrowed byte slice.
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// Consumes the response and returns the owned body buffer.
    ///
    /// This is the ownership-transfer analog of a caller-freed raw
    /// buffer: the caller takes the allocation and drops it when done.
    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }

    /// Length of the body in bytes.
    pub fn content_length(&self) -> usize {
        self.body.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with_body(body: &[u8]) -> HttpResponse {
        let mut response = HttpResponse::new(200, "OK".to_string());
        response.body = body.to_vec();
        response
    }

    #[test]
    fn test_is_success() {
        assert!(HttpResponse::new(200, "OK".to_string()).is_success());
        assert!(HttpResponse::new(204, "No Content".to_string()).is_success());
        assert!(!HttpResponse::new(404, "Not Found".to_string()).is_success());
        assert!(!HttpResponse::new(302, "Found".to_string()).is_success());
    }

    #[test]
    fn test_is_redirect() {
        assert!(HttpResponse::new(301, "Moved Permanently".to_string()).is_redirect());
        assert!(HttpResponse::new(308, "Permanent Redirect".to_string()).is_redirect());
        assert!(!HttpResponse::new(200, "OK".to_string()).is_redirect());
    }

    #[test]
    fn test_text_lossy() {
        let response = response_with_body(b"hello \xFF world");
        assert_eq!(response.text(), "hello \u{FFFD} world");
    }

    #[test]
    fn test_utf8_valid() {
        let response = response_with_body("héllo".as_bytes());
        assert_eq!(response.utf8().unwrap(), "héllo");
    }

    #[test]
    fn test_utf8_invalid_is_error() {
        let response = response_with_body(b"\xC3\x28");
        assert!(matches!(response.utf8(), Err(HttpError::NonUtf8Body)));
    }

    #[test]
    fn test_into_bytes_transfers_ownership() {
        let response = response_with_body(b"raw payload");
        let buffer = response.into_bytes();
        assert_eq!(buffer, b"raw payload");
    }

    #[test]
    fn test_empty_body_accessors() {
        let response = response_with_body(b"");
        assert_eq!(response.text(), "");
        assert_eq!(response.bytes(), b"");
        assert_eq!(response.content_length(), 0);
    }

    #[test]
    fn test_header_lookup_case_insensitive() {
        let mut response = HttpResponse::new(200, "OK".to_string());
        response
            .headers
            .insert("Content-Type", "application/json");
        assert_eq!(response.header("content-type"), Some("application/json"));
    }
}
