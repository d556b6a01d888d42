//! Engine configuration knobs.

use std::sync::{Arc, Mutex};

use crate::logging::Logger;
use crate::metrics::LayoutMetrics;

/// How unmatched `end_container` calls and containers left open at `finish`
/// are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NestingPolicy {
    /// Report the imbalance as an error.
    #[default]
    Strict,
    /// Absorb the imbalance and log a warning.
    Lenient,
}

/// Configuration for a [`LayoutContext`](crate::LayoutContext).
#[derive(Clone)]
pub struct EngineConfig {
    /// Optional structured logger used by the engine.
    pub logger: Option<Logger>,
    /// Metrics accumulator updated on every finished frame.
    pub metrics: Option<Arc<Mutex<LayoutMetrics>>>,
    /// Emit a metrics snapshot every N frames. Zero disables snapshots.
    pub metrics_every: u64,
    /// Target field used when emitting metrics snapshots.
    pub metrics_target: String,
    /// Construction discipline enforcement.
    pub nesting: NestingPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            logger: None,
            metrics: None,
            metrics_every: 300,
            metrics_target: "room::layout.metrics".to_string(),
            nesting: NestingPolicy::Strict,
        }
    }
}

impl EngineConfig {
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_nesting(mut self, nesting: NestingPolicy) -> Self {
        self.nesting = nesting;
        self
    }

    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(LayoutMetrics::new())));
        }
    }

    pub fn disable_metrics(&mut self) {
        self.metrics = None;
    }

    /// Access the shared metrics handle if metrics are enabled.
    pub fn metrics_handle(&self) -> Option<Arc<Mutex<LayoutMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_handle_is_shared() {
        let mut config = EngineConfig::default();
        assert!(config.metrics_handle().is_none());
        config.enable_metrics();
        let a = config.metrics_handle().unwrap();
        config.enable_metrics();
        let b = config.metrics_handle().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        config.disable_metrics();
        assert!(config.metrics_handle().is_none());
    }

    #[test]
    fn strict_nesting_is_default() {
        assert_eq!(EngineConfig::default().nesting, NestingPolicy::Strict);
    }
}
