//! HTTP response body framing.
//!
//! Determines how a response body is delimited (Content-Length, chunked
//! transfer coding, or connection close) and reads it to completion.

use crate::error::HttpError;
use crate::models::{Headers, HttpMethod};
use std::io::{BufRead, Read};

/// Cap on a single chunk-size or trailer line. Real framing lines are
/// tens of bytes; anything near this limit is a misbehaving server.
const MAX_FRAMING_LINE: u64 = 1024;

/// How the response body is delimited on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFraming {
    /// No body: HEAD responses, 1xx, 204, 304.
    Empty,
    /// Exactly this many bytes follow the head.
    ContentLength(u64),
    /// Chunked transfer coding.
    Chunked,
    /// Body runs until the server closes the connection.
    UntilClose,
}

impl BodyFraming {
    /// Determines the framing for a response per RFC 9112 §6.3.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Protocol`] for an unparseable
    /// Content-Length value.
    pub fn for_response(
        method: HttpMethod,
        status_code: u16,
        headers: &Headers,
    ) -> Result<Self, HttpError> {
        if method == HttpMethod::HEAD
            || (100..200).contains(&status_code)
            || status_code == 204
            || status_code == 304
        {
            return Ok(BodyFraming::Empty);
        }

        if let Some(te) = headers.get("Transfer-Encoding") {
            if te
                .split(',')
                .any(|tok| tok.trim().eq_ignore_ascii_case("chunked"))
            {
                return Ok(BodyFraming::Chunked);
            }
        }

        if let Some(len) = headers.get("Content-Length") {
            let len = len.trim().parse::<u64>().map_err(|_| {
                HttpError::Protocol(format!("invalid Content-Length: {:?}", len))
            })?;
            return Ok(BodyFraming::ContentLength(len));
        }

        Ok(BodyFraming::UntilClose)
    }
}

/// Reads the complete response body according to `framing`.
///
/// The returned buffer holds the decoded body: chunk framing is
/// stripped, trailers are consumed and discarded.
///
/// Server-declared sizes (Content-Length, chunk sizes) are not trusted
/// for allocation: the buffer grows only with bytes actually received,
/// so a lying size ends in [`HttpError::Protocol`] at EOF rather than
/// an oversized allocation.
pub fn read_body<R: BufRead>(reader: &mut R, framing: BodyFraming) -> Result<Vec<u8>, HttpError> {
    match framing {
        BodyFraming::Empty => Ok(Vec::new()),
        BodyFraming::ContentLength(len) => {
            let mut body = Vec::new();
            let read = reader.by_ref().take(len).read_to_end(&mut body)? as u64;
            if read < len {
                return Err(HttpError::Protocol(
                    "connection closed before end of body".to_string(),
                ));
            }
            Ok(body)
        }
        BodyFraming::Chunked => read_chunked_body(reader),
        BodyFraming::UntilClose => {
            let mut body = Vec::new();
            reader.read_to_end(&mut body)?;
            Ok(body)
        }
    }
}

/// Decodes a chunked transfer coding stream.
fn read_chunked_body<R: BufRead>(reader: &mut R) -> Result<Vec<u8>, HttpError> {
    let mut body = Vec::new();
    loop {
        let size_line = read_crlf_line(reader)?;
        // Chunk extensions after ';' are ignored.
        let size_str = size_line
            .split(';')
            .next()
            .unwrap_or("")
            .trim();
        let size = u64::from_str_radix(size_str, 16).map_err(|_| {
            HttpError::Protocol(format!("invalid chunk size: {:?}", size_line))
        })?;

        if size == 0 {
            // Trailer section runs until a blank line.
            loop {
                let trailer = read_crlf_line(reader)?;
                if trailer.is_empty() {
                    return Ok(body);
                }
            }
        }

        let read = reader.by_ref().take(size).read_to_end(&mut body)? as u64;
        if read < size {
            return Err(HttpError::Protocol(
                "connection closed inside chunk".to_string(),
            ));
        }

        let sep = read_crlf_line(reader)?;
        if !sep.is_empty() {
            return Err(HttpError::Protocol(
                "missing CRLF after chunk data".to_string(),
            ));
        }
    }
}

/// Reads one framing line as raw bytes, decoded lossily so obs-text in
/// trailers does not reject the response, with a length cap so a line
/// that never terminates cannot grow without bound.
fn read_crlf_line<R: BufRead>(reader: &mut R) -> Result<String, HttpError> {
    let mut buf = Vec::new();
    let read = reader.by_ref().take(MAX_FRAMING_LINE).read_until(b'\n', &mut buf)?;
    if read == 0 {
        return Err(HttpError::Protocol(
            "connection closed inside chunked framing".to_string(),
        ));
    }
    if !buf.ends_with(b"\n") && read as u64 == MAX_FRAMING_LINE {
        return Err(HttpError::Protocol(
            "chunked framing line too long".to_string(),
        ));
    }
    let mut line = String::from_utf8_lossy(&buf).into_owned();
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}
