//! Common module
//!
//! This module contains the shared error type and logging setup used throughout the application.

pub mod error;
pub mod log;

// Re-export commonly used types and functions
pub use error::{ClientError, Result};
pub use log::init_logger;
