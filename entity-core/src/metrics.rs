//! Metrics collection for observability
//!
//! This module provides Prometheus counters for the transactional operations.
//!
//! # Metrics
//!
//! - `entity_operations_total{operation, outcome}` - Operations by outcome,
//!   where `outcome` is `committed` or the error kind that rejected it
//!
//! Each collector owns its own `prometheus::Registry`; nothing is registered
//! globally, so independent systems (and tests) never share counters.

use crate::ErrorKind;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};
use std::fmt;
use std::sync::Arc;

/// Outcome label of a committed operation
pub const COMMITTED: &str = "committed";

/// Metrics collector
#[derive(Clone)]
pub struct Metrics {
    operations_total: IntCounterVec,
    registry: Arc<Registry>,
}

impl Metrics {
    /// Create new metrics collector
    pub fn new() -> prometheus::Result<Self> {
        let registry = Arc::new(Registry::new());

        let operations_total = IntCounterVec::new(
            Opts::new(
                "entity_operations_total",
                "Transactional operations by outcome",
            ),
            &["operation", "outcome"],
        )?;
        registry.register(Box::new(operations_total.clone()))?;

        Ok(Self {
            operations_total,
            registry,
        })
    }

    /// Record a committed operation
    pub fn record_committed(&self, operation: &str) {
        self.operations_total
            .with_label_values(&[operation, COMMITTED])
            .inc();
    }

    /// Record a rejected operation
    pub fn record_rejected(&self, operation: &str, kind: ErrorKind) {
        self.operations_total
            .with_label_values(&[operation, kind.as_str()])
            .inc();
    }

    /// Record the outcome of an operation result
    pub fn observe<T>(&self, operation: &str, result: &crate::Result<T>) {
        match result {
            Ok(_) => self.record_committed(operation),
            Err(err) => self.record_rejected(operation, err.kind()),
        }
    }

    /// Current count for an operation and outcome label
    pub fn count(&self, operation: &str, outcome: &str) -> u64 {
        self.operations_total
            .with_label_values(&[operation, outcome])
            .get()
    }

    /// Render all metrics in Prometheus text format
    pub fn render(&self) -> prometheus::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }

    /// Get metrics registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl fmt::Debug for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metrics").finish_non_exhaustive()
    }
}
