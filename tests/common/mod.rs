//! Shared utilities for integration testing.

use std::time::{Duration, Instant};

/// Fetch `url` repeatedly until a response arrives or `deadline` passes.
///
/// Connection errors are retried; useful while a process is still binding
/// its listener.
#[allow(dead_code)]
pub async fn http_get_until(url: &str, deadline: Duration) -> Option<String> {
    let client = reqwest::Client::new();
    let start = Instant::now();
    while start.elapsed() < deadline {
        if let Ok(response) = client.get(url).send().await {
            if let Ok(body) = response.text().await {
                return Some(body);
            }
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    None
}

/// Fetch `url` repeatedly until the body differs from `previous`.
///
/// Used to observe a handoff: the old process keeps answering with its own
/// pid until the replacement takes over the port.
#[allow(dead_code)]
pub async fn http_get_until_changed(
    url: &str,
    previous: &str,
    deadline: Duration,
) -> Option<String> {
    let client = reqwest::Client::new();
    let start = Instant::now();
    while start.elapsed() < deadline {
        if let Ok(response) = client.get(url).send().await {
            if let Ok(body) = response.text().await {
                if body != previous {
                    return Some(body);
                }
            }
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    None
}
