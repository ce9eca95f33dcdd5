//! Name and value validation (panic-free).
//!
//! Rules:
//! - Metric names follow the exposition grammar `[a-zA-Z_:][a-zA-Z0-9_:]*`.
//! - The `gaugehub_` prefix belongs to the service's own metrics.
//! - Gauge values must be finite; `NaN` and infinities are rejected.

use crate::error::{GaugeHubError, Result};

/// Prefix reserved for metrics emitted by the service itself.
pub const RESERVED_PREFIX: &str = "gaugehub_";

/// Upper bound for metric names and agent ids, in bytes.
pub const MAX_NAME_BYTES: usize = 200;

/// Check a metric name against the exposition grammar.
pub fn validate_metric_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(GaugeHubError::InvalidName("metric name must not be empty".into()));
    }
    if name.len() > MAX_NAME_BYTES {
        return Err(GaugeHubError::InvalidName(format!(
            "metric name longer than {MAX_NAME_BYTES} bytes"
        )));
    }

    let mut chars = name.chars();
    let first_ok = chars
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_' || c == ':')
        .unwrap_or(false);
    if !first_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':') {
        return Err(GaugeHubError::InvalidName(format!(
            "{name} (expected [a-zA-Z_:][a-zA-Z0-9_:]*)"
        )));
    }

    if name.starts_with(RESERVED_PREFIX) {
        return Err(GaugeHubError::InvalidName(format!(
            "{name} uses reserved prefix {RESERVED_PREFIX}"
        )));
    }
    Ok(())
}

/// Check an agent identifier: non-empty, bounded, no whitespace or control chars.
pub fn validate_agent_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(GaugeHubError::InvalidName("agent id must not be empty".into()));
    }
    if id.len() > MAX_NAME_BYTES {
        return Err(GaugeHubError::InvalidName(format!(
            "agent id longer than {MAX_NAME_BYTES} bytes"
        )));
    }
    if id.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(GaugeHubError::InvalidName(format!("agent id {id:?} contains whitespace")));
    }
    Ok(())
}

/// Reject values that cannot be stored as a gauge.
pub fn check_gauge_value(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GaugeHubError::InvalidValue(format!("{value} is not a finite number")))
    }
}

/// Parse caller-supplied text into a gauge value.
///
/// Input is taken verbatim: surrounding whitespace is not trimmed.
pub fn parse_gauge_value(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .parse()
        .map_err(|_| GaugeHubError::InvalidValue(format!("{raw:?} is not a number")))?;
    check_gauge_value(value)
}
