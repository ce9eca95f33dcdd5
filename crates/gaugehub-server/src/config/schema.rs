use std::net::SocketAddr;

use serde::Deserialize;
use gaugehub_core::error::{GaugeHubError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub registry: RegistrySection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            registry: RegistrySection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(GaugeHubError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.registry.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    /// CRUD API listener.
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Pull-based exposition listener (`GET /metrics`).
    #[serde(default = "default_exposition_listen")]
    pub exposition_listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            exposition_listen: default_exposition_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        let api = self.listen_addr()?;
        let expo = self.exposition_addr()?;
        if api == expo {
            return Err(GaugeHubError::BadRequest(
                "server.listen and server.exposition_listen must differ".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        parse_addr("server.listen", &self.listen)
    }

    pub fn exposition_addr(&self) -> Result<SocketAddr> {
        parse_addr("server.exposition_listen", &self.exposition_listen)
    }
}

fn parse_addr(field: &str, raw: &str) -> Result<SocketAddr> {
    raw.parse().map_err(|_| {
        GaugeHubError::BadRequest(format!("{field} must be a valid socket address: {raw}"))
    })
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_exposition_listen() -> String {
    "0.0.0.0:8081".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrySection {
    /// Value of the `metricOrigin` label on every exported gauge.
    #[serde(default = "default_metric_origin")]
    pub metric_origin: String,

    #[serde(default = "default_kick_channel_capacity")]
    pub kick_channel_capacity: usize,
}

impl Default for RegistrySection {
    fn default() -> Self {
        Self {
            metric_origin: default_metric_origin(),
            kick_channel_capacity: default_kick_channel_capacity(),
        }
    }
}

impl RegistrySection {
    pub fn validate(&self) -> Result<()> {
        if self.metric_origin.is_empty() {
            return Err(GaugeHubError::BadRequest(
                "registry.metric_origin must not be empty".into(),
            ));
        }
        if self.metric_origin.chars().any(char::is_control) {
            return Err(GaugeHubError::BadRequest(
                "registry.metric_origin must not contain control characters".into(),
            ));
        }
        if !(1..=4096).contains(&self.kick_channel_capacity) {
            return Err(GaugeHubError::BadRequest(
                "registry.kick_channel_capacity must be between 1 and 4096".into(),
            ));
        }
        Ok(())
    }
}

fn default_metric_origin() -> String {
    "src".into()
}
fn default_kick_channel_capacity() -> usize {
    64
}
