//! Profiling engine
//!
//! Issues the same request many times concurrently, one task per request,
//! and folds the per-request samples into [`AggregateStats`]. Each task
//! returns its sample through the `JoinSet`; the collecting loop is the only
//! owner of the aggregate, so no lock is involved.

use log::{debug, error, info};
use std::fmt;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::Instant;

use crate::http::parse_url;
use crate::transport::{Transport, SENTINEL_STATUS};

use super::stats::{AggregateStats, LatencySummary, ProfileSample};

/// Final result of a profiling run
#[derive(Debug, Clone)]
pub struct ProfileReport {
    /// URL as given by the user
    pub url: String,
    /// Number of requests issued
    pub request_count: usize,
    /// Finalized statistics
    pub stats: AggregateStats,
}

impl ProfileReport {
    /// Latency summary, or `None` when no request succeeded
    pub fn summary(&self) -> Option<LatencySummary> {
        self.stats.summary()
    }
}

impl fmt::Display for ProfileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "URL : {}", self.url)?;
        writeln!(f, "Num of requests : {}", self.request_count)?;
        writeln!(f, "Num of successes : {}", self.stats.success_count)?;

        if let Some(summary) = self.summary() {
            write!(f, "{}", summary)?;
            writeln!(f, "Non-Success error codes : {:?}", self.stats.error_codes)?;
            writeln!(f, "Largest Response size(Only message-body considered) : {}", self.stats.max_body_size)?;
            writeln!(f, "Smallest Response size(Only message-body considered) : {}", self.stats.min_body_size)?;
        }

        Ok(())
    }
}

/// Concurrent request profiler
pub struct Profiler<T> {
    /// Transport shared by all request tasks
    transport: Arc<T>,
    /// Optional cap on in-flight requests
    max_concurrency: Option<usize>,
}

impl<T> Profiler<T>
where
    T: Transport + 'static,
{
    /// Create a profiler with unbounded fan-out
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            transport,
            max_concurrency: None,
        }
    }

    /// Limit how many requests are in flight at once
    ///
    /// Caps above `Semaphore::MAX_PERMITS` are clamped to it.
    pub fn with_max_concurrency(mut self, max_concurrency: Option<usize>) -> Self {
        self.max_concurrency = max_concurrency.map(|cap| cap.min(Semaphore::MAX_PERMITS));
        self
    }

    /// Send `request_count` concurrent requests to `url` and wait for all of them
    ///
    /// Failed requests are never retried; they contribute only their status
    /// code. A request task that panics is counted as a sentinel failure.
    pub async fn run(&self, url: &str, request_count: usize) -> ProfileReport {
        let target = parse_url(url);
        let limiter = self.max_concurrency.map(|n| Arc::new(Semaphore::new(n)));

        info!("Profiling {} with {} requests", target, request_count);

        let mut tasks = JoinSet::new();
        for id in 0..request_count {
            let transport = Arc::clone(&self.transport);
            let target = target.clone();
            let limiter = limiter.clone();

            tasks.spawn(async move {
                // Held until the request completes
                let _permit = match limiter {
                    Some(limiter) => limiter.acquire_owned().await.ok(),
                    None => None,
                };

                let start = Instant::now();
                let result = transport.fetch(&target).await;
                let elapsed_ms = start.elapsed().as_millis() as u64;

                if let Err(e) = &result {
                    debug!("Request {} failed: {}", id, e);
                }
                ProfileSample::from_result(&result, elapsed_ms)
            });
        }

        let mut stats = AggregateStats::default();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(sample) => stats.record(sample),
                Err(e) => {
                    error!("Request task error: {}", e);
                    stats.record(ProfileSample {
                        status_code: SENTINEL_STATUS,
                        body_size: 0,
                        elapsed_ms: 0,
                    });
                }
            }
        }
        stats.finalize();

        info!(
            "Profiling finished: {} of {} requests succeeded",
            stats.success_count, stats.total_count
        );

        ProfileReport {
            url: url.to_string(),
            request_count,
            stats,
        }
    }
}
