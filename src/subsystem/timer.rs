//! Periodic timer subsystem.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::MissedTickBehavior;

use crate::config::TimerConfig;
use crate::error::SubsystemError;
use crate::lifecycle::Shutdown;
use crate::subsystem::Subsystem;

/// Ticker that logs one line per interval, tagged with the process id.
///
/// The tick counter is observable so callers can verify that ticking really
/// stopped after shutdown.
pub struct TimerSubsystem {
    interval: Duration,
    ticks: AtomicU64,
}

impl TimerSubsystem {
    /// Create a timer subsystem from configuration.
    pub fn new(config: &TimerConfig) -> Self {
        Self {
            interval: Duration::from_millis(config.interval_ms),
            ticks: AtomicU64::new(0),
        }
    }

    /// Number of ticks performed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Subsystem for TimerSubsystem {
    fn name(&self) -> &str {
        "timer"
    }

    async fn run(&self, shutdown: Shutdown) -> Result<(), SubsystemError> {
        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick of a tokio interval completes immediately; consume
        // it so the first counted tick lands one full interval after start.
        interval.tick().await;

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = interval.tick() => {
                    let tick = self.ticks.fetch_add(1, Ordering::Relaxed) + 1;
                    tracing::info!(pid = std::process::id(), tick, "counted");
                }
            }
        }

        tracing::info!(pid = std::process::id(), "timer stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn ticks_until_shutdown_then_stops() {
        let timer = Arc::new(TimerSubsystem::new(&TimerConfig { interval_ms: 1000 }));
        let shutdown = Shutdown::new();

        let task = tokio::spawn({
            let timer = timer.clone();
            let shutdown = shutdown.clone();
            async move { timer.run(shutdown).await }
        });

        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(timer.ticks(), 3);

        shutdown.trigger();
        task.await.unwrap().unwrap();

        // No further scheduling once the run loop has returned.
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(timer.ticks(), 3);
    }

    #[tokio::test]
    async fn run_returns_promptly_when_already_triggered() {
        let timer = TimerSubsystem::new(&TimerConfig { interval_ms: 60_000 });
        let shutdown = Shutdown::new();
        shutdown.trigger();

        tokio::time::timeout(Duration::from_secs(1), timer.run(shutdown))
            .await
            .expect("run should observe an already-fired signal")
            .unwrap();
    }
}
