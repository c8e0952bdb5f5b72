//! Client configuration structure

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::defaults;

/// Client configuration
///
/// Every field has a default, so a partial file or an empty environment
/// still produces a usable configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Port for plain HTTP when the URL has no explicit port
    #[serde(default = "defaults::http_port")]
    pub http_port: u16,

    /// Port for HTTPS when the URL has no explicit port
    #[serde(default = "defaults::https_port")]
    pub https_port: u16,

    /// Chunk size used when reading a response
    #[serde(default = "defaults::buffer_size")]
    pub buffer_size: usize,

    /// Optional bound on a whole request (connect, write, read)
    #[serde(default = "defaults::request_timeout_secs")]
    pub request_timeout_secs: Option<u64>,

    /// Optional cap on in-flight profiling requests
    #[serde(default = "defaults::max_concurrency")]
    pub max_concurrency: Option<usize>,

    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "defaults::log_level")]
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::http_port(),
            https_port: defaults::https_port(),
            buffer_size: defaults::buffer_size(),
            request_timeout_secs: defaults::request_timeout_secs(),
            max_concurrency: defaults::max_concurrency(),
            log_level: defaults::log_level(),
        }
    }
}

impl ClientConfig {
    /// Request timeout as a `Duration`, if one is configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Apply command-line overrides on top of the loaded values
    ///
    /// `None` leaves the corresponding field untouched.
    pub fn with_overrides(
        mut self,
        log_level: Option<String>,
        request_timeout_secs: Option<u64>,
        max_concurrency: Option<usize>,
    ) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if request_timeout_secs.is_some() {
            self.request_timeout_secs = request_timeout_secs;
        }
        if max_concurrency.is_some() {
            self.max_concurrency = max_concurrency;
        }
        self
    }
}
