//! TLS handling module
//!
//! This module creates the client-side TLS connector and performs handshakes.

mod connector;

pub use connector::{create_tls_connector, connect_tls};
