//! Aggregate latency and size statistics for a profiling run

use std::fmt;

use crate::transport::{reported_status, FetchResult};

/// Initial value of the smallest body size
///
/// If every successful body is larger than this, the reported minimum stays
/// at this value. It is a reporting artifact, not a measured size.
pub const MIN_BODY_SIZE_SENTINEL: usize = 100_000;

/// Status code counted as a success
pub const SUCCESS_STATUS: u16 = 200;

/// Outcome of one profiled request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSample {
    /// Reported status code (the sentinel for failed requests)
    pub status_code: u16,
    /// Body size in bytes
    pub body_size: usize,
    /// Wall-clock duration of the request in milliseconds
    pub elapsed_ms: u64,
}

impl ProfileSample {
    /// Build a sample from a fetch outcome
    pub fn from_result(result: &FetchResult, elapsed_ms: u64) -> Self {
        Self {
            status_code: reported_status(result),
            body_size: result.as_ref().map(|r| r.body_len()).unwrap_or(0),
            elapsed_ms,
        }
    }

    /// Whether the request succeeded
    pub fn is_success(&self) -> bool {
        self.status_code == SUCCESS_STATUS
    }
}

/// Running totals over all samples of a run
///
/// `success_count == response_times.len()` and
/// `total_count == success_count + error_codes.len()` hold at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateStats {
    pub success_count: usize,
    pub total_count: usize,
    /// Successful response times in ms, sorted once the run is finalized
    pub response_times: Vec<u64>,
    /// Non-success codes in completion order
    pub error_codes: Vec<u16>,
    pub max_body_size: usize,
    pub min_body_size: usize,
    pub sum_response_time_ms: u64,
}

impl Default for AggregateStats {
    fn default() -> Self {
        Self {
            success_count: 0,
            total_count: 0,
            response_times: Vec::new(),
            error_codes: Vec::new(),
            max_body_size: 0,
            min_body_size: MIN_BODY_SIZE_SENTINEL,
            sum_response_time_ms: 0,
        }
    }
}

impl AggregateStats {
    /// Fold one sample into the totals
    pub fn record(&mut self, sample: ProfileSample) {
        self.total_count += 1;

        if !sample.is_success() {
            self.error_codes.push(sample.status_code);
            return;
        }

        self.success_count += 1;
        self.sum_response_time_ms += sample.elapsed_ms;
        self.max_body_size = self.max_body_size.max(sample.body_size);
        self.min_body_size = self.min_body_size.min(sample.body_size);
        self.response_times.push(sample.elapsed_ms);
    }

    /// Sort response times; call once after the last sample
    pub fn finalize(&mut self) {
        self.response_times.sort_unstable();
    }

    /// Latency summary, or `None` when nothing succeeded
    ///
    /// Expects finalized (sorted) response times.
    pub fn summary(&self) -> Option<LatencySummary> {
        if self.success_count == 0 {
            return None;
        }

        Some(LatencySummary {
            fastest_ms: *self.response_times.first()?,
            slowest_ms: *self.response_times.last()?,
            mean_ms: self.sum_response_time_ms as f64 / self.success_count as f64,
            median_ms: median(&self.response_times)?,
        })
    }
}

/// Latency figures of the successful requests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencySummary {
    pub fastest_ms: u64,
    pub slowest_ms: u64,
    pub mean_ms: f64,
    pub median_ms: u64,
}

/// Median of sorted values using integer arithmetic throughout
///
/// For an even count this is the floor of the mean of the two middle values.
pub fn median(sorted: &[u64]) -> Option<u64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    Some((sorted[n / 2] + sorted[(n - 1) / 2]) / 2)
}

impl fmt::Display for LatencySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fastest Response time : {}", self.fastest_ms)?;
        writeln!(f, "Slowest Response time : {}", self.slowest_ms)?;
        writeln!(f, "Mean Response time : {}", self.mean_ms)?;
        writeln!(f, "Median Response time : {}", self.median_ms)
    }
}
