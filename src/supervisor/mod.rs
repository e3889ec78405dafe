//! Supervision and handoff.
//!
//! # Data Flow
//! ```text
//! startup
//!     → identity.rs (root or worker, read once from the CLI marker)
//!     → all subsystems start in-process
//!
//! root only:
//!     watcher.rs (recursive directory watch)
//!         → change event
//!         → stop previous workload (own subsystems, or kill prior worker)
//!         → handoff.rs (spawn replacement worker, inherited stdio)
//!         → record new WorkerHandle, log its pid
//! ```
//!
//! # Design Decisions
//! - The root is itself the first worker: its own subsystems serve until the
//!   first change event
//! - Handoffs are not serialized against each other; rapid events each spawn
//!   a fresh worker and retire the prior one (accepted churn)
//! - Spawn failure is logged, never retried; the next change event may
//!   recover the lineage
//! - Watch failure disables reload but leaves the running workload alone

use std::path::PathBuf;
use std::time::Duration;

use tokio::task::JoinSet;

use crate::config::PhoenixConfig;
use crate::error::{SubsystemError, SupervisorError};
use crate::lifecycle::{signals, Shutdown};
use crate::subsystem::SubsystemRef;

pub mod handoff;
pub mod identity;
pub mod watcher;

pub use handoff::WorkerHandle;
pub use identity::Role;
pub use watcher::{ChangeEvent, DirWatcher};

/// Root coordinator: starts subsystems and, in the root process, watches the
/// working directory and replaces the active worker on every change.
pub struct Supervisor {
    config: PhoenixConfig,
    config_path: Option<PathBuf>,
    shutdown: Shutdown,
    subsystems: Vec<SubsystemRef>,
}

impl Supervisor {
    /// Create a supervisor over the given subsystems.
    ///
    /// `config_path` is forwarded to spawned workers so the whole lineage
    /// reads the same configuration.
    pub fn new(
        config: PhoenixConfig,
        config_path: Option<PathBuf>,
        shutdown: Shutdown,
        subsystems: Vec<SubsystemRef>,
    ) -> Self {
        Self {
            config,
            config_path,
            shutdown,
            subsystems,
        }
    }

    /// Run until the process is told to stop.
    pub async fn run(self, role: Role) -> Result<(), SupervisorError> {
        let mut set = self.start_subsystems();
        match role {
            Role::Worker => self.run_worker(&mut set).await,
            Role::Root => self.run_root(&mut set).await,
        }
    }

    fn start_subsystems(&self) -> JoinSet<Result<(), SubsystemError>> {
        let mut set = JoinSet::new();
        for subsystem in &self.subsystems {
            let subsystem = subsystem.clone();
            let shutdown = self.shutdown.clone();
            set.spawn(async move { subsystem.run(shutdown).await });
        }
        set
    }

    /// Worker branch: the subsystems are the whole job.
    ///
    /// The process stays alive for as long as they run and exits cleanly
    /// once every subsystem has returned. Workers are normally stopped by a
    /// kill from their root; Ctrl-C is honored for standalone runs.
    async fn run_worker(
        &self,
        set: &mut JoinSet<Result<(), SubsystemError>>,
    ) -> Result<(), SupervisorError> {
        tracing::info!(pid = std::process::id(), "started (worker)");

        let termination = signals::wait_for_termination();
        tokio::pin!(termination);
        let mut terminating = false;

        loop {
            tokio::select! {
                signal = &mut termination, if !terminating => {
                    terminating = true;
                    match signal {
                        Ok(()) => self.shutdown.trigger(),
                        Err(e) => tracing::error!(error = %e, "signal handler failed"),
                    }
                }
                joined = set.join_next() => {
                    match joined {
                        Some(exit) => self.subsystem_exit(exit)?,
                        None => return Ok(()),
                    }
                }
            }
        }
    }

    /// Root branch: run the subsystems as the first workload, then watch the
    /// directory and hand off on every change.
    async fn run_root(
        &self,
        set: &mut JoinSet<Result<(), SubsystemError>>,
    ) -> Result<(), SupervisorError> {
        tracing::info!(pid = std::process::id(), "started (root)");

        let (dir_watcher, mut changes) = DirWatcher::new(&self.config.watch);
        // The guard keeps the watch alive; if it cannot start, the running
        // workload is left alone and only automatic reload is lost.
        let _watch_guard = match dir_watcher.run() {
            Ok(guard) => Some(guard),
            Err(e) => {
                tracing::error!(error = %e, "directory watch failed; reload disabled");
                None
            }
        };

        let mut worker: Option<WorkerHandle> = None;

        let termination = signals::wait_for_termination();
        tokio::pin!(termination);
        let mut signals_down = false;

        loop {
            tokio::select! {
                signal = &mut termination, if !signals_down => {
                    signals_down = true;
                    match signal {
                        Ok(()) => {
                            tracing::info!(pid = std::process::id(), "termination signal received");
                            self.shutdown.trigger();
                            if let Some(mut previous) = worker.take() {
                                previous.terminate().await;
                            }
                            self.drain(set).await;
                            return Ok(());
                        }
                        Err(e) => tracing::error!(error = %e, "signal handler failed"),
                    }
                }
                Some(event) = changes.recv() => {
                    worker = self.handle_change(event, worker).await;
                }
                joined = set.join_next(), if !set.is_empty() => {
                    if let Some(exit) = joined {
                        if let Err(e) = self.subsystem_exit(exit) {
                            // Do not leave a port-holding worker behind when
                            // the root goes down.
                            if let Some(mut previous) = worker.take() {
                                previous.terminate().await;
                            }
                            return Err(e);
                        }
                    }
                }
            }
        }
    }

    /// One handoff: stop the previous workload, spawn a replacement worker,
    /// record its handle.
    async fn handle_change(
        &self,
        event: ChangeEvent,
        previous: Option<WorkerHandle>,
    ) -> Option<WorkerHandle> {
        tracing::info!(
            pid = std::process::id(),
            kind = ?event.kind,
            paths = ?event.paths,
            "noticed change"
        );

        match previous {
            // First handoff since startup: the root's own subsystems are the
            // active workload, so tell them to stop.
            None => self.shutdown.trigger(),
            Some(mut handle) => handle.terminate().await,
        }

        match WorkerHandle::spawn(self.config_path.as_deref()) {
            Ok(replacement) => {
                tracing::info!(
                    pid = std::process::id(),
                    worker_pid = ?replacement.pid(),
                    "spawned worker"
                );
                Some(replacement)
            }
            Err(e) => {
                // Degraded but observable: no active workload until the next
                // change event spawns one.
                tracing::error!(error = %e, "failed to spawn replacement worker");
                None
            }
        }
    }

    /// Give stopping subsystems a moment to finish before the process exits.
    async fn drain(&self, set: &mut JoinSet<Result<(), SubsystemError>>) {
        let grace = Duration::from_secs(5);
        let all_done = async { while set.join_next().await.is_some() {} };
        if tokio::time::timeout(grace, all_done).await.is_err() {
            tracing::warn!(grace = ?grace, "subsystems did not stop within grace period");
        }
    }

    fn subsystem_exit(
        &self,
        exit: Result<Result<(), SubsystemError>, tokio::task::JoinError>,
    ) -> Result<(), SupervisorError> {
        match exit {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) if self.shutdown.is_triggered() => {
                tracing::warn!(error = %e, "subsystem errored while stopping");
                Ok(())
            }
            Ok(Err(e)) => Err(e.into()),
            Err(join) => Err(join.into()),
        }
    }
}
