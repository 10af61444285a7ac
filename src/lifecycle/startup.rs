//! Startup and shutdown orchestration.
//!
//! # Sequence
//! ```text
//! bind listener ─▶ healthy ─▶ serve ─▶ (startup delay) ─▶ ready
//!                                                           │
//!                          signal ◀─────────────────────────┘
//!                            │
//!                            ▼
//!                      not ready ─▶ drain ─▶ stop server
//! ```
//!
//! # Design Decisions
//! - Fail fast: bind and exporter errors are fatal
//! - Readiness drops before the listener closes so balancers see the 503
//! - A server that exits on its own also clears both flags

use std::future::Future;
use std::net::{AddrParseError, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use metrics_exporter_prometheus::BuildError;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::task::JoinError;

use crate::config::{ObservabilityConfig, ProberConfig};
use crate::health::{Prober, StatusRecorder};
use crate::http::ProbeServer;
use crate::lifecycle::Shutdown;
use crate::observability::{init_metrics, MetricsRecorder};

/// Errors that abort the process lifecycle.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("probe server failed: {0}")]
    Serve(#[source] std::io::Error),

    #[error("probe server task failed: {0}")]
    Join(#[from] JoinError),

    #[error("invalid metrics address: {0}")]
    MetricsAddress(#[from] AddrParseError),

    #[error("failed to install metrics exporter: {0}")]
    Metrics(#[from] BuildError),
}

/// Install the metrics exporter when enabled and return the matching recorder.
pub fn metrics_recorder(
    config: &ObservabilityConfig,
) -> Result<Option<Arc<dyn StatusRecorder>>, StartupError> {
    if !config.metrics_enabled {
        tracing::debug!("Metrics disabled");
        return Ok(None);
    }

    let addr: SocketAddr = config.metrics_address.parse()?;
    init_metrics(addr)?;

    let recorder: Arc<dyn StatusRecorder> = Arc::new(MetricsRecorder);
    Ok(Some(recorder))
}

/// Bind the configured address and run the probe lifecycle until `signal` resolves.
pub async fn run<F>(
    config: &ProberConfig,
    prober: Arc<Prober>,
    signal: F,
) -> Result<(), StartupError>
where
    F: Future<Output = ()>,
{
    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            addr: config.listener.bind_address.clone(),
            source,
        })?;

    serve(config, prober, listener, signal).await
}

/// Run the probe lifecycle on an already bound listener.
pub async fn serve<F>(
    config: &ProberConfig,
    prober: Arc<Prober>,
    listener: TcpListener,
    signal: F,
) -> Result<(), StartupError>
where
    F: Future<Output = ()>,
{
    let stop = Shutdown::new();
    let server = ProbeServer::new(prober.clone(), config);
    let mut task = tokio::spawn(server.run(listener, stop.subscribe()));

    prober.healthy();

    let startup_delay =
        tokio::time::sleep(Duration::from_millis(config.lifecycle.startup_delay_ms));
    tokio::pin!(startup_delay);
    tokio::pin!(signal);
    let mut ready_pending = true;

    loop {
        tokio::select! {
            _ = &mut startup_delay, if ready_pending => {
                ready_pending = false;
                prober.ready();
            }
            _ = &mut signal => break,
            joined = &mut task => {
                prober.not_ready("probe server exited");
                prober.not_healthy("probe server exited");
                return flatten(joined);
            }
        }
    }

    prober.not_ready("shutting down");

    let drain = Duration::from_secs(config.lifecycle.drain_secs);
    tracing::info!(
        drain_secs = config.lifecycle.drain_secs,
        "Draining before stopping probe server"
    );
    tokio::time::sleep(drain).await;

    stop.trigger();
    flatten(task.await)
}

fn flatten(joined: Result<Result<(), std::io::Error>, JoinError>) -> Result<(), StartupError> {
    match joined {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(StartupError::Serve(e)),
        Err(e) => Err(StartupError::Join(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    fn fast_config() -> ProberConfig {
        let mut config = ProberConfig::default();
        config.listener.bind_address = "127.0.0.1:0".into();
        config.lifecycle.drain_secs = 0;
        config
    }

    async fn wait_until(check: impl Fn() -> bool) {
        for _ in 0..200 {
            if check() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("condition not reached");
    }

    #[tokio::test]
    async fn test_lifecycle_flips_flags() {
        let config = fast_config();
        let prober = Arc::new(Prober::new("test", None));
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn({
            let prober = prober.clone();
            async move {
                run(&config, prober, async {
                    let _ = rx.await;
                })
                .await
            }
        });

        wait_until(|| prober.is_ready()).await;
        assert!(prober.is_healthy());

        tx.send(()).unwrap();
        handle.await.unwrap().unwrap();

        assert!(!prober.is_ready(), "readiness must drop on shutdown");
        assert!(prober.is_healthy(), "shutdown is not a health failure");
    }

    #[tokio::test]
    async fn test_signal_during_startup_delay_skips_ready() {
        let mut config = fast_config();
        config.lifecycle.startup_delay_ms = 60_000;
        let prober = Arc::new(Prober::new("test", None));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        serve(&config, prober.clone(), listener, async {}).await.unwrap();

        assert!(prober.is_healthy());
        assert!(!prober.is_ready());
    }

    #[tokio::test]
    async fn test_bind_failure() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mut config = fast_config();
        config.listener.bind_address = taken.local_addr().unwrap().to_string();

        let prober = Arc::new(Prober::new("test", None));
        let err = run(&config, prober.clone(), async {}).await.unwrap_err();

        assert!(matches!(err, StartupError::Bind { .. }));
        assert!(!prober.is_healthy());
    }

    #[test]
    fn test_metrics_disabled_means_no_recorder() {
        let config = ObservabilityConfig::default();
        assert!(metrics_recorder(&config).unwrap().is_none());
    }

    #[test]
    fn test_bad_metrics_address() {
        let mut config = ObservabilityConfig::default();
        config.metrics_enabled = true;
        config.metrics_address = "nowhere".into();

        assert!(matches!(
            metrics_recorder(&config),
            Err(StartupError::MetricsAddress(_))
        ));
    }
}
