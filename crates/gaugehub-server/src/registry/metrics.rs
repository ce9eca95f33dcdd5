use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use gaugehub_core::error::{GaugeHubError, Result};
use gaugehub_core::protocol::MetricSample;
use gaugehub_core::validate::{check_gauge_value, parse_gauge_value, validate_metric_name};

/// Metric registry: `name -> gauge value`.
///
/// A single registry-wide lock guards the map. Readers share it, writers hold
/// it exclusively, so `list` always returns a whole-map snapshot taken at one
/// instant. Names and values are validated before the lock is taken and no
/// logging happens while it is held.
pub struct MetricRegistry {
    origin: Arc<str>,
    gauges: RwLock<HashMap<String, f64>>,
}

impl MetricRegistry {
    /// Create an empty registry whose metrics all carry `origin` as their
    /// origin label.
    pub fn new(origin: impl Into<Arc<str>>) -> Self {
        Self {
            origin: origin.into(),
            gauges: RwLock::new(HashMap::new()),
        }
    }

    /// Origin label attached to every metric in this registry.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Snapshot of all metrics. Order is unspecified.
    pub fn list(&self) -> Result<Vec<MetricSample>> {
        let gauges = self.read()?;
        Ok(gauges
            .iter()
            .map(|(name, value)| MetricSample::new(name.as_str(), *value))
            .collect())
    }

    /// Register `name` with an initial value.
    pub fn create(&self, name: &str, initial: f64) -> Result<()> {
        validate_metric_name(name)?;
        let initial = check_gauge_value(initial)?;

        let mut gauges = self.write()?;
        if gauges.contains_key(name) {
            return Err(GaugeHubError::AlreadyExists(format!("metric {name}")));
        }
        gauges.insert(name.to_string(), initial);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<f64> {
        self.read()?
            .get(name)
            .copied()
            .ok_or_else(|| not_found(name))
    }

    /// Replace the value of `name` with the number parsed from `raw`.
    ///
    /// A value that does not parse is rejected before the map is touched, so
    /// the stored value stays as it was. Returns the value now stored.
    pub fn update(&self, name: &str, raw: &str) -> Result<f64> {
        let value = parse_gauge_value(raw)?;
        self.set(name, value)?;
        Ok(value)
    }

    /// Typed form of [`MetricRegistry::update`].
    pub fn set(&self, name: &str, value: f64) -> Result<()> {
        let value = check_gauge_value(value)?;

        let mut gauges = self.write()?;
        let slot = gauges.get_mut(name).ok_or_else(|| not_found(name))?;
        *slot = value;
        Ok(())
    }

    /// Remove `name`. The exposition surface renders from the registry, so the
    /// metric stops being exported at the same instant.
    pub fn delete(&self, name: &str) -> Result<()> {
        self.write()?
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| not_found(name))
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<String, f64>>> {
        self.gauges
            .read()
            .map_err(|_| GaugeHubError::Internal("metric registry lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, f64>>> {
        self.gauges
            .write()
            .map_err(|_| GaugeHubError::Internal("metric registry lock poisoned".into()))
    }
}

fn not_found(name: &str) -> GaugeHubError {
    GaugeHubError::NotFound(format!("metric {name}"))
}
