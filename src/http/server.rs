//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the probe handlers
//! - Wire up middleware (tracing, request timeout)
//! - Serve on a listener until the shutdown signal fires

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ProberConfig;
use crate::health::Prober;
use crate::http::handlers::probe_router;

/// HTTP server exposing the probe endpoints.
pub struct ProbeServer {
    router: Router,
    prober: Arc<Prober>,
}

impl ProbeServer {
    /// Create a new probe server for `prober` with the given configuration.
    pub fn new(prober: Arc<Prober>, config: &ProberConfig) -> Self {
        let router = Self::build_router(&prober, config);
        Self { router, prober }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(prober: &Arc<Prober>, config: &ProberConfig) -> Router {
        probe_router(prober, &config.probes)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// The fully layered router, for embedding or in-process tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn prober(&self) -> &Arc<Prober> {
        &self.prober
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            component = %self.prober.component(),
            "Probe server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Probe server received shutdown signal");
            })
            .await?;

        tracing::info!("Probe server stopped");
        Ok(())
    }
}
