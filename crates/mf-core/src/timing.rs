//! Wall-clock timing for solver runs.
//!
//! `Timer` always measures, because callers of the cross-check receive the
//! elapsed durations as part of the result. Printing of timing summaries is
//! gated by `MF_TIMING` or `enable_timing()`.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

static ENABLED: AtomicBool = AtomicBool::new(false);

/// Enable timing summaries globally.
pub fn enable_timing() {
    ENABLED.store(true, Ordering::Relaxed);
}

/// Disable timing summaries globally.
pub fn disable_timing() {
    ENABLED.store(false, Ordering::Relaxed);
}

/// Check if timing summaries are enabled.
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed) || std::env::var("MF_TIMING").is_ok()
}

/// A simple timer that measures elapsed time.
pub struct Timer {
    label: &'static str,
    start: Instant,
}

impl Timer {
    /// Create and start a new timer with the given label.
    pub fn start(label: &'static str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    /// Label this timer was started with.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Stop the timer and return the elapsed time.
    pub fn stop(self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer, print the result if summaries are enabled, and return it.
    pub fn stop_and_print(self) -> Duration {
        let label = self.label;
        let elapsed = self.stop();
        if is_enabled() {
            println!("[TIMING] {}: {:.3}ms", label, elapsed.as_secs_f64() * 1e3);
        }
        elapsed
    }
}

/// Accumulating timer for tracking total time across multiple calls.
pub struct AccumulatingTimer {
    total_ns: AtomicU64,
    count: AtomicU64,
}

impl Default for AccumulatingTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl AccumulatingTimer {
    /// Create a new accumulating timer.
    pub const fn new() -> Self {
        Self {
            total_ns: AtomicU64::new(0),
            count: AtomicU64::new(0),
        }
    }

    /// Record a timing measurement.
    pub fn record(&self, elapsed: Duration) {
        let nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        self.total_ns.fetch_add(nanos, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    /// Total time recorded.
    pub fn total(&self) -> Duration {
        Duration::from_nanos(self.total_ns.load(Ordering::Relaxed))
    }

    /// Get number of calls.
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Average time per call, zero if nothing was recorded.
    pub fn average(&self) -> Duration {
        let count = self.count();
        if count > 0 {
            Duration::from_nanos(self.total_ns.load(Ordering::Relaxed) / count)
        } else {
            Duration::ZERO
        }
    }

    /// Reset the timer.
    pub fn reset(&self) {
        self.total_ns.store(0, Ordering::Relaxed);
        self.count.store(0, Ordering::Relaxed);
    }
}
