//! HTTP/1.1 wire protocol: request serialization, response head
//! parsing, and body framing.

pub mod body;
pub mod request;
pub mod response;

pub use body::{read_body, BodyFraming};
pub use request::serialize_request;
pub use response::{read_response_head, ResponseHead};
