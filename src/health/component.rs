//! Identity of the component that owns a prober.

use std::fmt;
use std::sync::Arc;

/// Opaque label naming the owning process or component.
///
/// Only used for diagnostics: log fields and metric labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component(Arc<str>);

impl Component {
    pub fn new(name: impl fmt::Display) -> Self {
        Self(Arc::from(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Component {
    fn from(name: &str) -> Self {
        Self(Arc::from(name))
    }
}

impl From<String> for Component {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}
