//! Per-check status cells.
//!
//! # States
//! - Unset: reports not-OK (initial)
//! - Set: reports OK
//!
//! # State Transitions
//! ```text
//! Unset → Set:   mark true
//! Set   → Unset: mark false (reason is advisory only)
//! Set   → Set, Unset → Unset: no-op, still accepted
//! ```
//!
//! # Design Decisions
//! - One atomic cell per check; no mutex on the read path
//! - No coupling between cells, callers own any relationship
//! - Writes report whether they changed the value so callers can log transitions

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Which of the two independent checks a status refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    Healthy,
    Ready,
}

impl Check {
    /// Label used in log fields and metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Check::Healthy => "healthy",
            Check::Ready => "ready",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single boolean status that can be shared across threads.
#[derive(Debug, Default)]
pub struct StatusFlag {
    value: AtomicBool,
}

impl StatusFlag {
    /// Create a flag in the unset state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value`, returning `true` if the stored value changed.
    pub fn store(&self, value: bool) -> bool {
        self.value.swap(value, Ordering::AcqRel) != value
    }

    /// Current value.
    pub fn load(&self) -> bool {
        self.value.load(Ordering::Acquire)
    }
}
