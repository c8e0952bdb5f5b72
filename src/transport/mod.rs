//! Transport module
//!
//! A [`Transport`] turns a decomposed target into one response. The real
//! implementation is [`HttpClient`]; tests plug in their own.

mod client;
mod error;

pub use client::HttpClient;
pub use error::{reported_status, FetchError, FetchResult, SENTINEL_STATUS};

use std::fmt;
use std::future::Future;

use crate::config::ClientConfig;
use crate::http::Target;

/// Plain TCP or TLS transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Plain HTTP
    Http,
    /// HTTP over TLS
    Https,
}

impl Scheme {
    /// Select the scheme from the `--https` flag
    pub fn from_https_flag(https: bool) -> Self {
        if https { Scheme::Https } else { Scheme::Http }
    }

    /// Port used when the URL names none
    pub fn default_port(&self, config: &ClientConfig) -> u16 {
        match self {
            Scheme::Http => config.http_port,
            Scheme::Https => config.https_port,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Http => write!(f, "http"),
            Scheme::Https => write!(f, "https"),
        }
    }
}

/// Issues a single request and returns its outcome
///
/// Implementations must never panic on network errors; every failure is
/// reported through the returned [`FetchResult`].
pub trait Transport: Send + Sync {
    /// Fetch `target` once
    fn fetch(&self, target: &Target) -> impl Future<Output = FetchResult> + Send;
}
