//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Prober mutations produce:
//!     → logging.rs (structured log events, per-prober span)
//!     → metrics.rs (status gauge, transition counter)
//!
//! Probe requests produce:
//!     → tower_http TraceLayer access events
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Metrics are optional and exported on their own listener

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
pub use self::metrics::{init_metrics, MetricsRecorder};
