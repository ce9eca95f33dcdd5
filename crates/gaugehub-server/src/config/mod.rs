//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use gaugehub_core::error::{GaugeHubError, Result};

pub use schema::{RegistrySection, ServerConfig, ServerSection};

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "GAUGEHUB_CONFIG";
/// Config file used when the environment variable is unset.
pub const DEFAULT_CONFIG_PATH: &str = "gaugehub.yaml";

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| GaugeHubError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load the config named by `GAUGEHUB_CONFIG` (or `gaugehub.yaml`).
pub fn load_from_env() -> Result<ServerConfig> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_from_path(&path)
}

/// Load a config file. A missing file falls back to defaults; an unreadable
/// or invalid one is an error.
pub fn load_from_path(path: &str) -> Result<ServerConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(%path, "config file not found, using defaults");
            let cfg = ServerConfig::default();
            cfg.validate()?;
            Ok(cfg)
        }
        Err(e) => Err(GaugeHubError::Internal(format!("read config {path} failed: {e}"))),
    }
}
