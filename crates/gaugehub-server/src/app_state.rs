//! Shared application state for the gaugehub server.
//!
//! The registry and directory are owned here and handed to handlers by
//! reference through `Arc`s; there is no process-wide global state, so every
//! `AppState::new` starts from empty maps.

use std::sync::Arc;

use gaugehub_core::error::Result;

use crate::config::ServerConfig;
use crate::obs::ApiMetrics;
use crate::registry::{AgentDirectory, MetricRegistry};

#[derive(Clone)]
pub struct AppState {
    metrics: Arc<MetricRegistry>,
    agents: Arc<AgentDirectory>,
    api_metrics: Arc<ApiMetrics>,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can report a bad config instead of panicking.
    pub fn new(cfg: &ServerConfig) -> Result<Self> {
        cfg.validate()?;

        let metrics = Arc::new(MetricRegistry::new(cfg.registry.metric_origin.as_str()));
        let agents = Arc::new(AgentDirectory::new(cfg.registry.kick_channel_capacity));

        tracing::info!(origin = %metrics.origin(), "metric registry ready");

        Ok(Self {
            metrics,
            agents,
            api_metrics: Arc::new(ApiMetrics::new()),
        })
    }

    pub fn metrics(&self) -> &MetricRegistry {
        &self.metrics
    }

    pub fn agents(&self) -> &AgentDirectory {
        &self.agents
    }

    pub fn api_metrics(&self) -> &ApiMetrics {
        &self.api_metrics
    }
}
