//! Core data structures for HTTP requests and responses.

pub mod headers;
pub mod request;
pub mod response;

pub use headers::Headers;
pub use request::{HttpMethod, HttpRequest};
pub use response::HttpResponse;
