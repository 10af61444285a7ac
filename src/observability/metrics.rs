//! Metrics collection and exposition.
//!
//! # Metrics
//! - `prober_status` (gauge): 1=OK, 0=not OK, by component and check
//! - `prober_transitions_total` (counter): flag changes, by component, check and new status
//!
//! # Design Decisions
//! - Metrics are a [`StatusRecorder`], so the prober does not depend on them
//! - Exposed on a separate Prometheus listener, never on the probe port

use std::fmt;
use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::health::{Check, Component, StatusRecorder};

pub const PROBER_STATUS: &str = "prober_status";
pub const PROBER_TRANSITIONS: &str = "prober_transitions_total";

/// Install the Prometheus exporter and describe the prober metrics.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;

    metrics::describe_gauge!(PROBER_STATUS, "Current probe status (1 = OK, 0 = not OK)");
    metrics::describe_counter!(PROBER_TRANSITIONS, "Number of probe status changes");

    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Records probe status through the `metrics` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsRecorder;

impl StatusRecorder for MetricsRecorder {
    fn status(&self, component: &Component, check: Check, value: bool) {
        metrics::gauge!(
            PROBER_STATUS,
            "component" => component.to_string(),
            "check" => check.as_str()
        )
        .set(if value { 1.0 } else { 0.0 });
    }

    fn transition(
        &self,
        component: &Component,
        check: Check,
        value: bool,
        _reason: Option<&dyn fmt::Display>,
    ) {
        metrics::counter!(
            PROBER_TRANSITIONS,
            "component" => component.to_string(),
            "check" => check.as_str(),
            "status" => if value { "true" } else { "false" }
        )
        .increment(1);
    }
}
