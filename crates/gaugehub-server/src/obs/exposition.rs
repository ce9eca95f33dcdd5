use std::fmt::Write;

use gaugehub_core::error::Result;

use super::{escape_label, ApiMetrics};
use crate::registry::{AgentDirectory, MetricRegistry};

/// Label carrying the registry origin on every exported gauge.
pub const ORIGIN_LABEL: &str = "metricOrigin";

/// Render the full exposition body.
///
/// User gauges come from one `list()` snapshot, sorted by name. Service
/// metrics follow.
pub fn render(
    registry: &MetricRegistry,
    agents: &AgentDirectory,
    api: &ApiMetrics,
) -> Result<String> {
    let mut samples = registry.list()?;
    samples.sort_by(|a, b| a.name.cmp(&b.name));
    let agent_count = agents.len()?;

    let origin = escape_label(registry.origin());
    let mut out = String::new();

    for s in &samples {
        let _ = writeln!(out, "# HELP {} Metric {}", s.name, s.name);
        let _ = writeln!(out, "# TYPE {} gauge", s.name);
        let _ = writeln!(
            out,
            "{}{{{}=\"{}\"}} {}",
            s.name,
            ORIGIN_LABEL,
            origin,
            format_value(s.value)
        );
    }

    api.render(&mut out);

    let _ = writeln!(out, "# HELP gaugehub_metrics_registered Gauges currently registered.");
    let _ = writeln!(out, "# TYPE gaugehub_metrics_registered gauge");
    let _ = writeln!(out, "gaugehub_metrics_registered {}", samples.len());
    let _ = writeln!(out, "# HELP gaugehub_agents_registered Agents currently registered.");
    let _ = writeln!(out, "# TYPE gaugehub_agents_registered gauge");
    let _ = writeln!(out, "gaugehub_agents_registered {}", agent_count);

    Ok(out)
}

/// Sample value text: plain decimal in the usual range, exponent form for
/// very large or very small magnitudes.
pub fn format_value(v: f64) -> String {
    let abs = v.abs();
    if abs != 0.0 && !(1e-6..1e21).contains(&abs) {
        format!("{v:e}")
    } else {
        format!("{v}")
    }
}
