//! JSON wire models exchanged over the HTTP API.
//!
//! Registry snapshots are returned as owned values so callers never hold a
//! reference into registry storage.

pub mod agent;
pub mod metric;

pub use agent::{AgentRecord, KickEvent, KickSummary};
pub use metric::MetricSample;

use serde::{Deserialize, Serialize};

use crate::error::GaugeHubError;

/// Error body returned by the HTTP layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl From<&GaugeHubError> for ErrorBody {
    fn from(e: &GaugeHubError) -> Self {
        Self {
            code: e.client_code().as_str().to_string(),
            message: e.to_string(),
        }
    }
}
