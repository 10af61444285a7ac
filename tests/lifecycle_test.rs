//! Startup and drain behaviour as seen by a probing client.

use std::sync::Arc;
use std::time::Duration;

use prober::config::ProberConfig;
use prober::lifecycle::startup;
use prober::Prober;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

mod common;

#[tokio::test]
async fn test_readiness_drops_before_listener_closes() {
    let mut config = ProberConfig::default();
    config.lifecycle.drain_secs = 1;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let prober = Arc::new(Prober::new("drain-test", None));
    let (tx, rx) = oneshot::channel::<()>();

    let lifecycle = tokio::spawn({
        let prober = prober.clone();
        async move {
            startup::serve(&config, prober, listener, async {
                let _ = rx.await;
            })
            .await
        }
    });

    let client = common::client();
    for _ in 0..200 {
        if prober.is_ready() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(common::get_status(&client, addr, "/-/healthy").await, 200);
    assert_eq!(common::get_status(&client, addr, "/-/ready").await, 200);

    tx.send(()).unwrap();
    tokio::time::sleep(Duration::from_millis(200)).await;

    // Inside the drain window: still serving, but no longer ready.
    assert_eq!(common::get_status(&client, addr, "/-/ready").await, 503);
    assert_eq!(common::get_status(&client, addr, "/-/healthy").await, 200);

    lifecycle.await.unwrap().unwrap();
    assert!(client.get(format!("http://{}/-/ready", addr)).send().await.is_err());
}

#[tokio::test]
async fn test_startup_delay_holds_readiness() {
    let mut config = ProberConfig::default();
    config.lifecycle.startup_delay_ms = 300;
    config.lifecycle.drain_secs = 0;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let prober = Arc::new(Prober::new("delay-test", None));
    let (tx, rx) = oneshot::channel::<()>();

    let lifecycle = tokio::spawn({
        let prober = prober.clone();
        async move {
            startup::serve(&config, prober, listener, async {
                let _ = rx.await;
            })
            .await
        }
    });

    let client = common::client();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(common::get_status(&client, addr, "/-/healthy").await, 200);
    assert_eq!(common::get_status(&client, addr, "/-/ready").await, 503);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(common::get_status(&client, addr, "/-/ready").await, 200);

    tx.send(()).unwrap();
    lifecycle.await.unwrap().unwrap();
}
