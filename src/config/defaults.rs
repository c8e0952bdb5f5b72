//! Default configuration values
//!
//! This module is the single source of truth for defaults, shared by
//! serde, the loader and the command line.

/// Environment variable prefix for all configuration options
pub const ENV_PREFIX: &str = "WEBPROF";

/// Default log level as string
pub const LOG_LEVEL_STR: &str = "warn";

/// Port used for plain HTTP when the URL carries none
pub fn http_port() -> u16 {
    80
}

/// Port used for HTTPS when the URL carries none
pub fn https_port() -> u16 {
    443
}

/// Default read buffer size (8KB)
pub fn buffer_size() -> usize {
    8192
}

/// No per-request timeout: a stalled server blocks its request indefinitely
pub fn request_timeout_secs() -> Option<u64> {
    None
}

/// No concurrency cap: every profiling request is in flight at once
pub fn max_concurrency() -> Option<usize> {
    None
}

/// Default log level
pub fn log_level() -> String {
    LOG_LEVEL_STR.to_string()
}
