//! The status register shared between probe handlers and whoever decides
//! the process state.
//!
//! # Responsibilities
//! - Hold the healthy and ready flags
//! - Log every mutation under a span carrying the component label
//! - Forward status and transitions to an optional [`StatusRecorder`]

use std::fmt;
use std::sync::Arc;

use tracing::Span;

use crate::health::component::Component;
use crate::health::state::{Check, StatusFlag};

/// Secondary sink for status changes, next to the tracing output.
///
/// Called synchronously from the mutators, so implementations must not block.
pub trait StatusRecorder: Send + Sync {
    /// Current value of `check`. Called at construction and on every mutation.
    fn status(&self, component: &Component, check: Check, value: bool);

    /// `check` changed to `value`. `reason` is set when the flag was cleared.
    fn transition(
        &self,
        component: &Component,
        check: Check,
        value: bool,
        reason: Option<&dyn fmt::Display>,
    ) {
        let _ = (component, check, value, reason);
    }
}

/// Healthy/ready register for one component.
///
/// Both flags start out false. Share it with `Arc`; every method takes `&self`.
pub struct Prober {
    component: Component,
    healthy: StatusFlag,
    ready: StatusFlag,
    span: Span,
    recorder: Option<Arc<dyn StatusRecorder>>,
}

impl Prober {
    /// Create a prober for `component`.
    ///
    /// Log entries go to the current `tracing` dispatcher inside a `prober`
    /// span. `recorder` additionally receives status and transitions.
    pub fn new(component: impl fmt::Display, recorder: Option<Arc<dyn StatusRecorder>>) -> Self {
        let component = Component::new(component);
        let span = tracing::info_span!("prober", component = %component);

        if let Some(recorder) = &recorder {
            recorder.status(&component, Check::Healthy, false);
            recorder.status(&component, Check::Ready, false);
        }

        Self {
            component,
            healthy: StatusFlag::new(),
            ready: StatusFlag::new(),
            span,
            recorder,
        }
    }

    pub fn component(&self) -> &Component {
        &self.component
    }

    /// Mark the component healthy.
    pub fn healthy(&self) {
        self.set(Check::Healthy, true, None);
    }

    /// Mark the component not healthy. `reason` is only logged.
    pub fn not_healthy(&self, reason: impl fmt::Display) {
        self.set(Check::Healthy, false, Some(&reason as &dyn fmt::Display));
    }

    /// Mark the component ready to receive traffic.
    pub fn ready(&self) {
        self.set(Check::Ready, true, None);
    }

    /// Mark the component not ready. `reason` is only logged.
    pub fn not_ready(&self, reason: impl fmt::Display) {
        self.set(Check::Ready, false, Some(&reason as &dyn fmt::Display));
    }

    pub fn is_healthy(&self) -> bool {
        self.healthy.load()
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load()
    }

    /// Read either check.
    pub fn status(&self, check: Check) -> bool {
        self.flag(check).load()
    }

    fn flag(&self, check: Check) -> &StatusFlag {
        match check {
            Check::Healthy => &self.healthy,
            Check::Ready => &self.ready,
        }
    }

    fn set(&self, check: Check, value: bool, reason: Option<&dyn fmt::Display>) {
        let changed = self.flag(check).store(value);
        let _entered = self.span.enter();

        match (changed, reason) {
            (true, Some(reason)) => {
                tracing::warn!(
                    check = %check,
                    status = value,
                    reason = %reason,
                    "changing probe status"
                );
            }
            (true, None) => {
                tracing::info!(check = %check, status = value, "changing probe status");
            }
            (false, Some(reason)) => {
                tracing::debug!(
                    check = %check,
                    status = value,
                    reason = %reason,
                    "probe status unchanged"
                );
            }
            (false, None) => {
                tracing::debug!(check = %check, status = value, "probe status unchanged");
            }
        }

        if let Some(recorder) = &self.recorder {
            self.record_status(recorder.as_ref(), check);
            if changed {
                recorder.transition(&self.component, check, value, reason);
            }
        }
    }

    /// Report the stored value, not the one this caller wrote: a concurrent
    /// writer may have landed in between. Re-read after recording so the last
    /// report always matches the flag.
    fn record_status(&self, recorder: &dyn StatusRecorder, check: Check) {
        let flag = self.flag(check);
        loop {
            let current = flag.load();
            recorder.status(&self.component, check, current);
            if flag.load() == current {
                return;
            }
        }
    }
}

impl fmt::Debug for Prober {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prober")
            .field("component", &self.component)
            .field("healthy", &self.is_healthy())
            .field("ready", &self.is_ready())
            .finish()
    }
}
