//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Bind listener → mark healthy → serve → mark ready
//!
//! Shutdown (shutdown.rs):
//!     Signal received → mark not ready → drain → stop server
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - The lifecycle is the main caller of the prober mutators
//! - Shutdown has a drain window so probes observe the 503

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::StartupError;
