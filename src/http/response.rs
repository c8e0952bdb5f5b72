//! HTTP response parsing
//!
//! Works on the complete response bytes, read until the peer closed the
//! connection. `Content-Length` and chunked encoding are not interpreted:
//! the body is everything after the first blank line.

use bytes::Bytes;
use thiserror::Error;

/// Header/body separator
const HEADER_END: &[u8] = b"\r\n\r\n";

/// Reasons a response could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The buffer contains no complete status line
    #[error("response has no status line")]
    MissingStatusLine,

    /// The second token of the status line is not a status code
    #[error("invalid status code in status line: {0:?}")]
    InvalidStatusCode(String),
}

/// Status code and body of a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse {
    /// Numeric status code from the status line
    pub status_code: u16,
    /// Raw message body
    pub body: Bytes,
}

impl ParsedResponse {
    /// Body size in bytes
    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    /// Body decoded as UTF-8, invalid sequences replaced
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Parse a raw response into status code and body
///
/// A response with a valid status line but no blank line yields an empty body.
pub fn parse_response(raw: &[u8]) -> Result<ParsedResponse, ParseError> {
    let line_end = raw
        .iter()
        .position(|&b| b == b'\n')
        .ok_or(ParseError::MissingStatusLine)?;

    let status_code = parse_status_code(&raw[..line_end])?;

    let body = raw
        .windows(HEADER_END.len())
        .position(|window| window == HEADER_END)
        .map(|pos| Bytes::copy_from_slice(&raw[pos + HEADER_END.len()..]))
        .unwrap_or_default();

    Ok(ParsedResponse { status_code, body })
}

fn parse_status_code(line: &[u8]) -> Result<u16, ParseError> {
    let line = String::from_utf8_lossy(line);
    let token = line.split_whitespace().nth(1).unwrap_or_default();

    token
        .parse::<u16>()
        .map_err(|_| ParseError::InvalidStatusCode(token.to_string()))
}
