//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::sync::Arc;

use prober::config::ProberConfig;
use prober::{ProbeServer, Prober, Shutdown};
use tokio::net::TcpListener;

/// Start a probe server for `prober` on an ephemeral port.
///
/// The server stops when the returned `Shutdown` is triggered.
#[allow(dead_code)]
pub async fn start_probe_server(
    prober: Arc<Prober>,
    config: &ProberConfig,
) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = ProbeServer::new(prober, config);
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

/// HTTP client that never reuses connections or goes through a proxy.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// GET `path` on `addr` and return the status code.
#[allow(dead_code)]
pub async fn get_status(client: &reqwest::Client, addr: SocketAddr, path: &str) -> u16 {
    client
        .get(format!("http://{}{}", addr, path))
        .send()
        .await
        .expect("probe server unreachable")
        .status()
        .as_u16()
}
