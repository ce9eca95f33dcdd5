//! Service self-metrics.
//!
//! Counters with dynamic labels backed by `DashMap`, so request handlers can
//! record outcomes without touching the registry lock. Labels are flattened
//! into sorted key vectors to keep deterministic ordering.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use super::escape_label;

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let mut key: Vec<(String, String)> = labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        key.sort();

        let counter = self.map.entry(key).or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value for one label set (0 when never incremented).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        let mut key: Vec<(String, String)> = labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        key.sort();
        self.map
            .get(&key)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render in Prometheus text exposition format.
    pub(crate) fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} counter", name);

        let mut rows: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|r| {
                let label_str = r
                    .key()
                    .iter()
                    .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                    .collect::<Vec<_>>()
                    .join(",");
                (label_str, r.value().load(Ordering::Relaxed))
            })
            .collect();
        rows.sort();

        for (label_str, val) in rows {
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str, val);
        }
    }
}

/// Counters recorded by the HTTP layer.
#[derive(Default)]
pub struct ApiMetrics {
    /// `route`, `status`.
    pub requests: CounterVec,
    /// `op`, `code` for failed registry/directory operations.
    pub registry_errors: CounterVec,
    /// Kick notifications issued (`scope` = `agent` | `all`).
    pub kicks: CounterVec,
}

impl ApiMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn render(&self, out: &mut String) {
        self.requests.render(
            "gaugehub_api_requests_total",
            "API requests by route and status.",
            out,
        );
        self.registry_errors.render(
            "gaugehub_registry_errors_total",
            "Rejected registry operations by error code.",
            out,
        );
        self.kicks.render("gaugehub_kicks_total", "Kick notifications issued.", out);
    }
}
