//! Error types for subsystems and the supervisor.
//!
//! Two enums, matching the two failure domains:
//!
//! - [`SubsystemError`]: failures of an individual long-running subsystem.
//! - [`SupervisorError`]: failures of the supervision runtime itself
//!   (watch setup, worker spawn).
//!
//! Request-level failures inside a subsystem are handled locally and never
//! surface here; these types cover errors that end a subsystem or degrade
//! the supervisor.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by an individual subsystem.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SubsystemError {
    /// The listening endpoint could not be bound. Fatal at startup; a bind
    /// conflict means the previous holder has not released the port and is
    /// surfaced as-is, never retried.
    #[error("failed to bind {address}: {source}")]
    Bind {
        /// The configured bind address.
        address: String,
        /// The underlying bind error.
        #[source]
        source: std::io::Error,
    },

    /// I/O failure while the subsystem was running.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced by the supervision runtime.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SupervisorError {
    /// The directory watch could not be established. Fatal to further
    /// reloads; an already-running workload is unaffected.
    #[error("failed to watch {path}: {source}")]
    Watch {
        /// The directory that was to be watched.
        path: PathBuf,
        /// The underlying watcher error.
        #[source]
        source: notify::Error,
    },

    /// A replacement worker process could not be spawned.
    #[error("failed to spawn worker: {0}")]
    Spawn(#[source] std::io::Error),

    /// A subsystem task ended with an error.
    #[error(transparent)]
    Subsystem(#[from] SubsystemError),

    /// A subsystem task panicked or was aborted.
    #[error("subsystem task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
