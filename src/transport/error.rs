//! Per-request failure types
//!
//! Failures are tagged so callers can tell a refused connection from a
//! garbled response. For reporting, every failure still maps to the single
//! legacy status code [`SENTINEL_STATUS`].

use std::time::Duration;
use thiserror::Error;

use crate::http::{ParseError, ParsedResponse};

/// Status code reported for any request that did not produce a parsed response
///
/// It is indistinguishable from a genuine upstream `400 Bad Request`.
pub const SENTINEL_STATUS: u16 = 400;

/// Why a single request produced no response
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// DNS failure, refused connection, TLS handshake failure or I/O error
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The peer answered with something that is not an HTTP response
    #[error("unparseable response: {0}")]
    ParseFailed(#[from] ParseError),

    /// The configured request timeout expired
    #[error("request timed out after {0:?}")]
    TimedOut(Duration),
}

impl FetchError {
    /// Status code this failure is reported as
    pub fn status_code(&self) -> u16 {
        SENTINEL_STATUS
    }
}

/// Outcome of one request
pub type FetchResult = std::result::Result<ParsedResponse, FetchError>;

/// Status code of an outcome, collapsing failures to [`SENTINEL_STATUS`]
pub fn reported_status(result: &FetchResult) -> u16 {
    match result {
        Ok(response) => response.status_code,
        Err(e) => e.status_code(),
    }
}
