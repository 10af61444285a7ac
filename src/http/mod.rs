//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, trace + timeout layers)
//!     → handlers.rs (read prober, pick status code)
//!     → 200 / 503, empty body
//! ```

pub mod handlers;
pub mod server;

pub use handlers::{probe_router, status_code};
pub use server::ProbeServer;
