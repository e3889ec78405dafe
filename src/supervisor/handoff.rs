//! Worker process handle.

use std::path::Path;
use std::process::Stdio;

use tokio::process::{Child, Command};

use crate::error::SupervisorError;

/// The currently active spawned worker, held only by the root.
///
/// Replaced, never mutated in place: on every handoff the previous handle is
/// terminated and a fresh one stored.
pub struct WorkerHandle {
    child: Child,
    pid: Option<u32>,
}

impl WorkerHandle {
    /// Spawn a replacement worker process running the same executable.
    ///
    /// Standard input/output/error are inherited from this process, so the
    /// worker's logs interleave as if no handoff occurred. The worker marker
    /// and the config file (if any) are the only arguments passed on.
    pub fn spawn(config_path: Option<&Path>) -> Result<Self, SupervisorError> {
        let exe = std::env::current_exe().map_err(SupervisorError::Spawn)?;

        let mut command = Command::new(exe);
        command.arg("--role").arg("worker");
        if let Some(path) = config_path {
            command.arg("--config").arg(path);
        }
        command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = command.spawn().map_err(SupervisorError::Spawn)?;
        let pid = child.id();
        Ok(Self { child, pid })
    }

    /// Process id of the worker.
    pub fn pid(&self) -> Option<u32> {
        self.pid
    }

    /// Forcefully terminate the worker.
    ///
    /// A worker that already exited on its own is a tolerated no-op, not an
    /// error.
    pub async fn terminate(&mut self) {
        match self.child.kill().await {
            Ok(()) => tracing::info!(worker_pid = ?self.pid, "terminated worker"),
            Err(e) => {
                tracing::debug!(worker_pid = ?self.pid, error = %e, "worker already gone")
            }
        }
    }
}
