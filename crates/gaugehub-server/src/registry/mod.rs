//! In-memory registries owned by the server.
//!
//! `MetricRegistry` maps metric names to gauge values, `AgentDirectory` maps
//! agent ids to registration records. Each guards its map with its own
//! `RwLock`; the two are never mutated together.

pub mod agents;
pub mod metrics;

pub use agents::AgentDirectory;
pub use metrics::MetricRegistry;
