//! HTTP request serialization.
//!
//! Turns an [`HttpRequest`] into the bytes written to the connection:
//! request line, header block, CRLF terminator, and body. Through a
//! proxy the request line uses absolute-form; otherwise origin-form.

use crate::error::HttpError;
use crate::models::HttpRequest;

/// Serializes a request into its on-the-wire representation.
///
/// # Arguments
///
/// * `request` - The request to serialize; headers are written in
///   insertion order.
/// * `via_proxy` - When true, the request target is written in
///   absolute-form (`http://host:port/path`) as required for requests
///   through a forward proxy.
///
/// # Errors
///
/// Returns [`HttpError::Build`] if a header name or value contains
/// characters that would corrupt the head framing.
pub fn serialize_request(request: &HttpRequest, via_proxy: bool) -> Result<Vec<u8>, HttpError> {
    let target = if via_proxy {
        format!("http://{}{}", request.host_header(), request.origin_form())
    } else {
        request.origin_form()
    };

    let mut head = String::with_capacity(256);
    head.push_str(request.method.as_str());
    head.push(' ');
    head.push_str(&target);
    head.push_str(" HTTP/1.1\r\n");

    for (name, value) in request.headers.iter() {
        validate_header_name(name)?;
        validate_header_value(name, value)?;
        head.push_str(name);
        head.push_str(": ");
        head.push_str(value);
        head.push_str("\r\n");
    }
    head.push_str("\r\n");

    let mut wire = head.into_bytes();
    if let Some(body) = &request.body {
        wire.extend_from_slice(body);
    }
    Ok(wire)
}

/// Header names are RFC 9110 tokens.
fn validate_header_name(name: &str) -> Result<(), HttpError> {
    let valid = !name.is_empty()
        && name.bytes().all(|b| {
            b.is_ascii_alphanumeric()
                || matches!(
                    b,
                    b'!' | b'#'
                        | b'$'
                        | b'%'
                        | b'&'
                        | b'\''
                        | b'*'
                        | b'+'
                        | b'-'
                        | b'.'
                        | b'^'
                        | b'_'
                        | b'`'
                        | b'|'
                        | b'~'
                )
        });
    if valid {
        Ok(())
    } else {
        Err(HttpError::Build(format!("invalid header name: {:?}", name)))
    }
}

/// Header values must not contain CR, LF, or NUL.
fn validate_header_value(name: &str, value: &str) -> Result<(), HttpError> {
    if value.bytes().any(|b| matches!(b, b'\r' | b'\n' | b'\0')) {
        return Err(HttpError::Build(format!(
            "invalid value for header {:?}",
            name
        )));
    }
    Ok(())
}
