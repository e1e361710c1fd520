//! HTTP response head parsing.
//!
//! Reads and parses the status line and header block from a buffered
//! stream, enforcing a size cap on the whole head so a misbehaving
//! server cannot exhaust memory with an unbounded header block.

use crate::error::HttpError;
use crate::models::Headers;
use std::io::{BufRead, Read};

/// Parsed status line and headers of a response.
#[derive(Debug)]
pub struct ResponseHead {
    /// Protocol version from the status line, e.g. "HTTP/1.1".
    pub version: String,

    /// Three-digit status code.
    pub status_code: u16,

    /// Reason phrase; may be empty.
    pub reason: String,

    /// Response headers in the order the server sent them.
    pub headers: Headers,

    /// Number of bytes the head occupied on the wire.
    pub head_size: usize,
}

/// Reads the status line and header block from `reader`.
///
/// Stops after the blank line that terminates the head; the body (if
/// any) is left unread for the framing layer.
///
/// # Errors
///
/// Returns [`HttpError::Protocol`] on a malformed status line, a header
/// line without a colon, or a head larger than `max_head_size` bytes.
pub fn read_response_head<R: BufRead>(
    reader: &mut R,
    max_head_size: usize,
) -> Result<ResponseHead, HttpError> {
    let mut head_size = 0;

    let status_line = read_head_line(reader, max_head_size, &mut head_size)?;
    let (version, status_code, reason) = parse_status_line(&status_line)?;

    let mut headers = Headers::new();
    let mut last_name: Option<String> = None;
    loop {
        let line = read_head_line(reader, max_head_size, &mut head_size)?;
        if line.is_empty() {
            break;
        }

        // Obsolete line folding: a continuation line extends the
        // previous header's value.
        if line.starts_with(' ') || line.starts_with('\t') {
            match &last_name {
                Some(name) => {
                    let folded = format!(
                        "{} {}",
                        headers.get(name).unwrap_or_default(),
                        line.trim()
                    );
                    headers.insert(name.clone(), folded);
                    continue;
                }
                None => {
                    return Err(HttpError::Protocol(
                        "continuation line before any header".to_string(),
                    ))
                }
            }
        }

        let (name, value) = line.split_once(':').ok_or_else(|| {
            HttpError::Protocol(format!("header line missing colon: {:?}", line))
        })?;
        let name = name.trim_end();
        if name.is_empty() || name.contains(' ') {
            return Err(HttpError::Protocol(format!(
                "invalid header name: {:?}",
                name
            )));
        }
        headers.insert(name, value.trim());
        last_name = Some(name.to_string());
    }

    Ok(ResponseHead {
        version,
        status_code,
        reason,
        headers,
        head_size,
    })
}

/// Reads one CRLF-terminated line, enforcing the head size budget.
///
/// Lines are read as raw bytes and decoded lossily: RFC 9110 permits
/// obs-text in field values and reason phrases, so latin-1 bytes must
/// not reject the whole response. The read itself is budgeted, so a
/// line that never terminates cannot outgrow the cap before the
/// post-read check.
fn read_head_line<R: BufRead>(
    reader: &mut R,
    max_head_size: usize,
    head_size: &mut usize,
) -> Result<String, HttpError> {
    let budget = (max_head_size - *head_size + 1) as u64;
    let mut buf = Vec::new();
    let read = reader.by_ref().take(budget).read_until(b'\n', &mut buf)?;
    if read == 0 {
        return Err(HttpError::Protocol(
            "connection closed before end of response head".to_string(),
        ));
    }
    *head_size += read;
    if *head_size > max_head_size {
        return Err(HttpError::Protocol(format!(
            "response head exceeds {} bytes",
            max_head_size
        )));
    }
    let mut line = String::from_utf8_lossy(&buf).into_owned();
    // Tolerate bare LF line endings.
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Parses `HTTP/1.x SP code SP reason` with the reason phrase optional.
fn parse_status_line(line: &str) -> Result<(String, u16, String), HttpError> {
    let mut parts = line.splitn(3, ' ');
    let version = parts
        .next()
        .filter(|v| v.starts_with("HTTP/1."))
        .ok_or_else(|| HttpError::Protocol(format!("invalid status line: {:?}", line)))?;
    let code = parts
        .next()
        .and_then(|c| c.parse::<u16>().ok())
        .filter(|c| (100..=599).contains(c))
        .ok_or_else(|| HttpError::Protocol(format!("invalid status code in: {:?}", line)))?;
    let reason = parts.next().unwrap_or("").to_string();
    Ok((version.to_string(), code, reason))
}
