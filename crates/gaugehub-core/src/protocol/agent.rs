use serde::{Deserialize, Serialize};

/// A registered agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRecord {
    /// Agent identifier (unique key).
    pub id: String,
    /// Registration time, unix epoch milliseconds.
    pub registered_at_ms: u64,
}

/// Notification published when agents are kicked out of the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KickEvent {
    /// A single agent must reconnect.
    Agent { id: String },
    /// Every agent registered at kick time must reconnect.
    All { count: usize },
}

/// Response body for kick requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KickSummary {
    pub kicked: usize,
}
