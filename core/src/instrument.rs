//! Instrumentation boundary for the resource handler.
//!
//! The handler emits exactly one event per operation through an injected
//! `InstrumentationSink`; how those events are aggregated or exported is the
//! sink's business. `RequestMetrics` is the counter-style sink backing the
//! server's `/metrics` endpoint; `NoopSink` is the stub for embedding and
//! tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Classification of an operation's result, consumed by the external
/// interface mapping and by instrumentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    NotFound,
    InvalidInput,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::NotFound => "not_found",
            Outcome::InvalidInput => "invalid_input",
        }
    }
}

/// Receiver for per-operation telemetry events.
pub trait InstrumentationSink: Send + Sync {
    fn record(&self, operation: &str, outcome: Outcome, elapsed: Duration);
}

/// Sink that discards every event.
#[derive(Debug, Default)]
pub struct NoopSink;

impl InstrumentationSink for NoopSink {
    fn record(&self, _operation: &str, _outcome: Outcome, _elapsed: Duration) {}
}

/// Counter-style sink: per-outcome request counts.
///
/// Counters only increase and reset on process start. Relaxed ordering is
/// fine; metrics need eventual consistency, not exactness across threads.
#[derive(Debug, Default)]
pub struct RequestMetrics {
    success: AtomicU64,
    not_found: AtomicU64,
    invalid_input: AtomicU64,
}

/// Point-in-time copy of the counters, serialized by the metrics endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub success: u64,
    pub not_found: u64,
    pub invalid_input: u64,
}

impl RequestMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let success = self.success.load(Ordering::Relaxed);
        let not_found = self.not_found.load(Ordering::Relaxed);
        let invalid_input = self.invalid_input.load(Ordering::Relaxed);
        MetricsSnapshot {
            requests_total: success + not_found + invalid_input,
            success,
            not_found,
            invalid_input,
        }
    }
}

impl InstrumentationSink for RequestMetrics {
    fn record(&self, _operation: &str, outcome: Outcome, _elapsed: Duration) {
        let counter = match outcome {
            Outcome::Success => &self.success,
            Outcome::NotFound => &self.not_found,
            Outcome::InvalidInput => &self.invalid_input,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}
