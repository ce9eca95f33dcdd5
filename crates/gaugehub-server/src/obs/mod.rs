//! Pull-based exposition (Prometheus text format 0.0.4).
//!
//! `exposition` renders the registry snapshot with its origin label;
//! `metrics` holds the service's own request counters, kept under the
//! reserved `gaugehub_` prefix so they cannot collide with user gauges.

pub mod exposition;
pub mod metrics;

pub use exposition::render;
pub use metrics::{ApiMetrics, CounterVec};

/// Escape a label value for the text format.
pub(crate) fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}
