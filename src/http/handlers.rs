//! Probe handlers.
//!
//! # Responsibilities
//! - Translate prober state into 200 / 503
//! - Mount both handlers on configured paths
//!
//! # Design Decisions
//! - Any method is accepted; routing is the embedder's concern
//! - Empty body, the status code is the whole answer
//! - Request body is never read

use std::sync::Arc;

use axum::{
    http::StatusCode,
    routing::{any, MethodRouter},
    Router,
};

use crate::config::ProbeConfig;
use crate::health::{Check, Prober};

/// Status code reported for a check value.
pub fn status_code(ok: bool) -> StatusCode {
    if ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

impl Prober {
    /// Handler answering 200 while the component is healthy, 503 otherwise.
    pub fn healthy_handler<S>(self: &Arc<Self>) -> MethodRouter<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        check_handler(self.clone(), Check::Healthy)
    }

    /// Handler answering 200 while the component is ready, 503 otherwise.
    pub fn ready_handler<S>(self: &Arc<Self>) -> MethodRouter<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        check_handler(self.clone(), Check::Ready)
    }
}

fn check_handler<S>(prober: Arc<Prober>, check: Check) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    any(move || {
        let prober = prober.clone();
        async move { status_code(prober.status(check)) }
    })
}

/// Router with both probe handlers mounted at the configured paths.
pub fn probe_router<S>(prober: &Arc<Prober>, probes: &ProbeConfig) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(&probes.healthy_path, prober.healthy_handler())
        .route(&probes.ready_path, prober.ready_handler())
}
