//! Runner module
//!
//! The two ways of using the client: a single fetch, or a concurrent
//! profiling run with aggregate statistics.

mod profile;
mod single;
pub mod stats;

pub use profile::{Profiler, ProfileReport};
pub use single::run_single;
pub use stats::{median, AggregateStats, LatencySummary, ProfileSample};
