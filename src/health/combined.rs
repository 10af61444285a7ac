//! Fan-out over several probers.
//!
//! A process exposing more than one server usually keeps one prober per
//! server; `Combined` flips all of them with a single call.

use std::fmt;
use std::sync::Arc;

use crate::health::prober::Prober;

/// Mutating side of a prober.
pub trait Probe: Send + Sync {
    fn healthy(&self);
    fn not_healthy(&self, reason: &dyn fmt::Display);
    fn ready(&self);
    fn not_ready(&self, reason: &dyn fmt::Display);
}

impl Probe for Prober {
    fn healthy(&self) {
        Prober::healthy(self);
    }

    fn not_healthy(&self, reason: &dyn fmt::Display) {
        Prober::not_healthy(self, reason);
    }

    fn ready(&self) {
        Prober::ready(self);
    }

    fn not_ready(&self, reason: &dyn fmt::Display) {
        Prober::not_ready(self, reason);
    }
}

/// Forwards every call to each member in insertion order.
#[derive(Clone, Default)]
pub struct Combined {
    probes: Vec<Arc<dyn Probe>>,
}

impl Combined {
    pub fn new(probes: Vec<Arc<dyn Probe>>) -> Self {
        Self { probes }
    }

    pub fn push(&mut self, probe: Arc<dyn Probe>) {
        self.probes.push(probe);
    }

    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }
}

impl Probe for Combined {
    fn healthy(&self) {
        for probe in &self.probes {
            probe.healthy();
        }
    }

    fn not_healthy(&self, reason: &dyn fmt::Display) {
        let reason = reason.to_string();
        for probe in &self.probes {
            probe.not_healthy(&reason);
        }
    }

    fn ready(&self) {
        for probe in &self.probes {
            probe.ready();
        }
    }

    fn not_ready(&self, reason: &dyn fmt::Display) {
        let reason = reason.to_string();
        for probe in &self.probes {
            probe.not_ready(&reason);
        }
    }
}

impl fmt::Debug for Combined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combined").field("probes", &self.probes.len()).finish()
    }
}
