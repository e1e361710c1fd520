//! Simple HTTP - a small synchronous HTTP/1.1 client library
//!
//! This crate implements a blocking HTTP client bound to a base URL:
//! issue GET and POST requests to paths relative to that base, with
//! optional custom headers, and read the fully buffered response body
//! in several representations.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - **models**: Core data structures for HTTP requests, responses, and headers
//! - **client**: The `Client` bound to a base URL, with its builder and send loop
//! - **transport**: Blocking TCP connector and forward-proxy configuration
//! - **protocol**: HTTP/1.1 request serialization, response head parsing, body framing
//! - **redirect**: Redirect policy and hop resolution
//! - **config**: Global default settings with serde-backed loading
//! - **error**: The single `HttpError` type every failure funnels into
//!
//! # Usage
//!
//! ```no_run
//! use simple_http::{Client, Headers};
//!
//! # fn main() -> Result<(), simple_http::HttpError> {
//! // Create an HTTP client bound to a base URL.
//! let mut client = Client::new("http://127.0.0.1:9933")?;
//!
//! // Optional settings.
//! client.set_follow_redirects(false); // Disable auto-redirect
//! client.set_proxy("127.0.0.1:8080")?; // Set proxy
//!
//! // GET request, body as text.
//! let body = client.get("/get")?.text().into_owned();
//! println!("GET /get:\n{}", body);
//!
//! // GET request with custom headers.
//! let mut headers = Headers::new();
//! headers.insert("Custom-Header", "Hello");
//! let body = client.get_with_headers("/", headers)?.text().into_owned();
//! println!("GET / with custom header:\n{}", body);
//!
//! // POST request.
//! let post_data = "token=123456&name=example";
//! let response = client.post("/post", post_data)?;
//! println!("POST /post:\n{}", response.text());
//!
//! // POST request with custom headers.
//! let headers = Headers::from([
//!     ("Content-Type", "application/x-www-form-urlencoded"),
//!     ("Custom-Header", "TestValue"),
//! ]);
//! let response = client.post_with_headers("/post", post_data, headers)?;
//!
//! // Strict UTF-8 view, or take ownership of the raw buffer.
//! let _s = response.utf8()?;
//! let _raw: Vec<u8> = response.into_bytes();
//! # Ok(())
//! # }
//! ```
//!
//! Every failure surfaces as a single [`HttpError`], so a caller can
//! wrap a whole request sequence in one `match` or `?` chain and print
//! the error at the top level.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod protocol;
pub mod redirect;
pub mod transport;

pub use client::{Client, ClientBuilder, ClientConfig};
pub use error::HttpError;
pub use models::{Headers, HttpMethod, HttpRequest, HttpResponse};
pub use redirect::RedirectPolicy;
pub use transport::Proxy;
