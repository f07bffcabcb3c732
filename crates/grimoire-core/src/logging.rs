use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Cache counters for structured logging.
///
/// The duplicate scan memoizes token sets per idea; these counters show how
/// much re-tokenization the memo saved for a given call.
#[derive(Debug, Default)]
pub struct ResourceMetrics {
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
}

impl ResourceMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cache hit
    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a cache miss
    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn cache_hits(&self) -> u64 {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn cache_misses(&self) -> u64 {
        self.cache_misses.load(Ordering::Relaxed)
    }

    /// Get cache hit rate as a percentage (0.0-100.0)
    pub fn cache_hit_rate(&self) -> f64 {
        let hits = self.cache_hits();
        let total = hits + self.cache_misses();
        if total == 0 {
            0.0
        } else {
            (hits as f64 / total as f64) * 100.0
        }
    }
}

/// Log resource metrics at debug level.
///
/// Usage:
/// ```rust,ignore
/// let metrics = ResourceMetrics::new();
/// // ... record some metrics ...
/// log_resource_metrics!(&metrics, "find_duplicates");
/// ```
#[macro_export]
macro_rules! log_resource_metrics {
    ($metrics:expr, $name:expr) => {
        tracing::debug!(
            operation = $name,
            cache_hits = $metrics.cache_hits(),
            cache_misses = $metrics.cache_misses(),
            cache_hit_rate = $metrics.cache_hit_rate(),
            "resource_metrics"
        );
    };
}

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "clusterize");
/// // Or with additional fields:
/// trace_time!(start, "clusterize", clusters = clusters.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (true, None) => "grimoire=debug",
        (false, None) => "grimoire=warn",
        (_, Some(level)) => return init_with_level(level, log_json),
    };

    init_with_level(level, log_json)
}

/// Build the filter directive for a bare level or a full directive string.
/// Target matching is by prefix, so `grimoire` also covers `grimoire_core`.
fn filter_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("grimoire={}", level)
    }
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // GRIMOIRE_LOG is consulted after RUST_LOG
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("GRIMOIRE_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
