//! Shutdown coordination for the process.

use tokio_util::sync::CancellationToken;

/// Coordinator for graceful shutdown.
///
/// A one-shot broadcast signal that all long-running subsystems observe.
/// Cloning is cheap; every clone refers to the same underlying signal.
#[derive(Debug, Clone, Default)]
pub struct Shutdown {
    token: CancellationToken,
}

impl Shutdown {
    /// Create a new shutdown coordinator in the pending state.
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Trigger the shutdown signal.
    ///
    /// Only the first call has effect; triggering an already-fired signal is
    /// a no-op.
    pub fn trigger(&self) {
        self.token.cancel();
    }

    /// Wait until the signal fires.
    ///
    /// Resolves immediately if the signal has already fired, so observers
    /// registered late cannot miss it.
    pub async fn cancelled(&self) {
        self.token.cancelled().await
    }

    /// Whether the signal has fired.
    pub fn is_triggered(&self) -> bool {
        self.token.is_cancelled()
    }
}
