use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::broadcast;

use gaugehub_core::error::{GaugeHubError, Result};
use gaugehub_core::protocol::{AgentRecord, KickEvent};
use gaugehub_core::validate::validate_agent_id;

/// Agent directory: `agent_id -> AgentRecord`.
///
/// Same locking discipline as the metric registry, with its own lock.
/// Kicks are announced on a broadcast channel after the lock is released;
/// whatever transport delivers them to remote agents subscribes here.
pub struct AgentDirectory {
    agents: RwLock<HashMap<String, AgentRecord>>,
    kicks: broadcast::Sender<KickEvent>,
}

impl AgentDirectory {
    pub fn new(kick_capacity: usize) -> Self {
        let (kicks, _) = broadcast::channel(kick_capacity.max(1));
        Self {
            agents: RwLock::new(HashMap::new()),
            kicks,
        }
    }

    /// Subscribe to kick notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<KickEvent> {
        self.kicks.subscribe()
    }

    /// Snapshot of registered agent ids. Order is unspecified.
    pub fn list(&self) -> Result<Vec<String>> {
        Ok(self.read()?.keys().cloned().collect())
    }

    /// Snapshot of registered agents with their metadata.
    pub fn records(&self) -> Result<Vec<AgentRecord>> {
        Ok(self.read()?.values().cloned().collect())
    }

    pub fn register(&self, id: &str) -> Result<AgentRecord> {
        validate_agent_id(id)?;
        let record = AgentRecord {
            id: id.to_string(),
            registered_at_ms: now_ms(),
        };

        let mut agents = self.write()?;
        if agents.contains_key(id) {
            return Err(GaugeHubError::AlreadyExists(format!("agent {id}")));
        }
        agents.insert(id.to_string(), record.clone());
        Ok(record)
    }

    pub fn deregister(&self, id: &str) -> Result<()> {
        self.remove(id).map(|_| ())
    }

    /// Force one agent out of the directory and announce it.
    pub fn kick(&self, id: &str) -> Result<()> {
        let record = self.remove(id)?;
        self.publish(KickEvent::Agent { id: record.id });
        Ok(())
    }

    /// Clear the directory and announce that every agent must re-register.
    /// Returns how many agents were removed.
    pub fn kick_all(&self) -> Result<usize> {
        let count = {
            let mut agents = self.write()?;
            let count = agents.len();
            agents.clear();
            count
        };
        self.publish(KickEvent::All { count });
        Ok(count)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn remove(&self, id: &str) -> Result<AgentRecord> {
        self.write()?
            .remove(id)
            .ok_or_else(|| GaugeHubError::NotFound(format!("agent {id}")))
    }

    fn publish(&self, event: KickEvent) {
        // No subscribers is not an error.
        if let Err(e) = self.kicks.send(event) {
            tracing::debug!(event = ?e.0, "kick published with no subscribers");
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, AgentRecord>>> {
        self.agents
            .read()
            .map_err(|_| GaugeHubError::Internal("agent directory lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, AgentRecord>>> {
        self.agents
            .write()
            .map_err(|_| GaugeHubError::Internal("agent directory lock poisoned".into()))
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
