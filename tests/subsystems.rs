//! Integration tests for the server and timer subsystems.

use std::sync::Arc;
use std::time::Duration;

use phoenix::config::{ServerConfig, TimerConfig};
use phoenix::error::SubsystemError;
use phoenix::lifecycle::Shutdown;
use phoenix::subsystem::{ServerSubsystem, Subsystem, TimerSubsystem};

mod common;

#[tokio::test]
async fn server_reports_the_serving_pid() {
    let config = ServerConfig {
        bind_address: "127.0.0.1:28191".into(),
    };
    let shutdown = Shutdown::new();
    let server = Arc::new(ServerSubsystem::new(&config));

    let task = tokio::spawn({
        let server = server.clone();
        let shutdown = shutdown.clone();
        async move { server.run(shutdown).await }
    });

    let body = common::http_get_until("http://127.0.0.1:28191/", Duration::from_secs(5))
        .await
        .expect("server should come up");
    assert_eq!(body, format!("{} served", std::process::id()));

    // Every path gets the same identifying response.
    let nested = common::http_get_until("http://127.0.0.1:28191/any/path", Duration::from_secs(5))
        .await
        .expect("nested path should be served");
    assert_eq!(nested, body);

    shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(5), task)
        .await
        .expect("server should stop after shutdown")
        .unwrap()
        .unwrap();

    // The listener is released once run() has returned.
    let refused = reqwest::Client::new()
        .get("http://127.0.0.1:28191/")
        .timeout(Duration::from_secs(2))
        .send()
        .await;
    assert!(refused.is_err(), "no further connections after shutdown");
}

#[tokio::test]
async fn bind_conflict_is_fatal_and_immediate() {
    let holder = tokio::net::TcpListener::bind("127.0.0.1:28192")
        .await
        .unwrap();

    let config = ServerConfig {
        bind_address: "127.0.0.1:28192".into(),
    };
    let server = ServerSubsystem::new(&config);

    let err = tokio::time::timeout(Duration::from_secs(1), server.run(Shutdown::new()))
        .await
        .expect("bind failure must surface immediately, not retry")
        .unwrap_err();
    assert!(matches!(err, SubsystemError::Bind { .. }));

    drop(holder);
}

#[tokio::test]
async fn timer_stops_ticking_after_shutdown() {
    let timer = Arc::new(TimerSubsystem::new(&TimerConfig { interval_ms: 50 }));
    let shutdown = Shutdown::new();

    let task = tokio::spawn({
        let timer = timer.clone();
        let shutdown = shutdown.clone();
        async move { timer.run(shutdown).await }
    });

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert!(timer.ticks() >= 2, "timer should tick while pending");

    shutdown.trigger();
    tokio::time::timeout(Duration::from_secs(2), task)
        .await
        .expect("timer should stop after shutdown")
        .unwrap()
        .unwrap();

    let stopped_at = timer.ticks();
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(timer.ticks(), stopped_at, "no ticks after shutdown");
}
