//! Health and readiness reporting.
//!
//! # Data Flow
//! ```text
//! Startup / background checks / shutdown:
//!     → prober.rs (healthy, not_healthy, ready, not_ready)
//!     → state.rs (one atomic flag per check)
//!     → tracing span + optional StatusRecorder
//!
//! Probe requests:
//!     → http::handlers (is_healthy / is_ready)
//!     → 200 or 503
//! ```
//!
//! # Design Decisions
//! - Healthy and ready are orthogonal: alive-but-draining is healthy and not ready
//! - Both start false; "unknown" is reported as not OK
//! - Reasons are diagnostics only and never stored
//! - No polling of dependencies here; callers decide when to flip

pub mod combined;
pub mod component;
pub mod prober;
pub mod state;

pub use combined::{Combined, Probe};
pub use component::Component;
pub use self::prober::{Prober, StatusRecorder};
pub use state::{Check, StatusFlag};
