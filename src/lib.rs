//! webprof: minimal HTTP/HTTPS fetcher with a concurrent latency profiler
//!
//! Requests are hand-built HTTP/1.0 `GET`s written to a raw TCP or TLS
//! stream; responses are read until the server closes the connection and
//! parsed byte by byte for the status code and body.
//!
//! # Main Features
//!
//! - Single fetch that prints the body of a `200` response
//! - Concurrent profiling with fastest/slowest/mean/median latency and body sizes
//! - Plain TCP or TLS (system trust store) transport
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use webprof::{ClientConfig, HttpClient, Profiler, Result, Scheme};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Arc::new(ClientConfig::default());
//!     let client = HttpClient::new(Scheme::Https, config)?;
//!
//!     let report = Profiler::new(Arc::new(client))
//!         .run("https://example.com/", 20)
//!         .await;
//!
//!     print!("{}", report);
//!     Ok(())
//! }
//! ```

// Public modules
pub mod common;
pub mod config;
pub mod http;
pub mod runner;
pub mod tls;
pub mod transport;

// Re-export commonly used structures and functions for convenience
pub use common::{ClientError, Result};
pub use config::ClientConfig;
pub use http::{parse_response, parse_url, ParsedResponse, Target};
pub use runner::{run_single, Profiler, ProfileReport};
pub use transport::{FetchError, FetchResult, HttpClient, Scheme, Transport};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
