//! Sink metrics for observability
//!
//! Counters describing what the logger did with each accepted call: which
//! sink classes received it and which writes failed.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for sink activity
///
/// # Example
///
/// ```
/// use session_logger::SinkMetrics;
///
/// let metrics = SinkMetrics::new();
///
/// metrics.record_call();
/// metrics.record_file_line();
/// metrics.record_additional_failure();
///
/// assert_eq!(metrics.calls(), 1);
/// assert_eq!(metrics.file_lines(), 1);
/// assert_eq!(metrics.additional_failures(), 1);
/// ```
#[derive(Debug)]
pub struct SinkMetrics {
    /// Number of log calls accepted
    calls: AtomicU64,

    /// Lines written to the console
    console_lines: AtomicU64,

    /// Lines written to the session file
    file_lines: AtomicU64,

    /// Lines written to additional streams (one per stream)
    additional_lines: AtomicU64,

    /// File writes that failed or found no open file
    file_failures: AtomicU64,

    /// Additional stream writes that failed
    additional_failures: AtomicU64,
}

impl SinkMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            calls: AtomicU64::new(0),
            console_lines: AtomicU64::new(0),
            file_lines: AtomicU64::new(0),
            additional_lines: AtomicU64::new(0),
            file_failures: AtomicU64::new(0),
            additional_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn console_lines(&self) -> u64 {
        self.console_lines.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_lines(&self) -> u64 {
        self.file_lines.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn additional_lines(&self) -> u64 {
        self.additional_lines.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_failures(&self) -> u64 {
        self.file_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn additional_failures(&self) -> u64 {
        self.additional_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_call(&self) -> u64 {
        self.calls.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_console_line(&self) -> u64 {
        self.console_lines.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_file_line(&self) -> u64 {
        self.file_lines.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_additional_line(&self) -> u64 {
        self.additional_lines.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_file_failure(&self) -> u64 {
        self.file_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_additional_failure(&self) -> u64 {
        self.additional_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Total failed writes across the file and additional streams
    pub fn failures(&self) -> u64 {
        self.file_failures() + self.additional_failures()
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.calls.store(0, Ordering::Relaxed);
        self.console_lines.store(0, Ordering::Relaxed);
        self.file_lines.store(0, Ordering::Relaxed);
        self.additional_lines.store(0, Ordering::Relaxed);
        self.file_failures.store(0, Ordering::Relaxed);
        self.additional_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for SinkMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SinkMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            calls: AtomicU64::new(self.calls()),
            console_lines: AtomicU64::new(self.console_lines()),
            file_lines: AtomicU64::new(self.file_lines()),
            additional_lines: AtomicU64::new(self.additional_lines()),
            file_failures: AtomicU64::new(self.file_failures()),
            additional_failures: AtomicU64::new(self.additional_failures()),
        }
    }
}
