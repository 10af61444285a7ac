//! Process health reporting.
//!
//! A [`Prober`] holds two independent flags, *healthy* and *ready*, that any
//! thread may flip at any time. The HTTP handlers in [`http`] turn them into
//! 200 / 503 answers for load balancers and cluster schedulers.
//!
//! ```no_run
//! use std::sync::Arc;
//! use prober::Prober;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let prober = Arc::new(Prober::new("sidecar", None));
//! let app: axum::Router = axum::Router::new()
//!     .route("/-/healthy", prober.healthy_handler())
//!     .route("/-/ready", prober.ready_handler());
//!
//! prober.healthy();
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! prober.ready();
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ProberConfig;
pub use health::{Check, Combined, Component, Probe, Prober, StatusRecorder};
pub use http::ProbeServer;
pub use lifecycle::Shutdown;
