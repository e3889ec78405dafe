//! Directory watcher feeding change events to the supervisor.

use std::path::PathBuf;
use std::time::Duration;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::config::WatchConfig;
use crate::error::SupervisorError;

/// A single observed filesystem change.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    /// What kind of change the platform reported.
    pub kind: EventKind,
    /// Affected paths.
    pub paths: Vec<PathBuf>,
}

/// A watcher that monitors the working directory tree for changes.
pub struct DirWatcher {
    path: PathBuf,
    recursive: bool,
    change_tx: mpsc::UnboundedSender<ChangeEvent>,
}

impl DirWatcher {
    /// Create a new DirWatcher.
    ///
    /// Returns the watcher and a receiver for change events.
    pub fn new(config: &WatchConfig) -> (Self, mpsc::UnboundedReceiver<ChangeEvent>) {
        let (change_tx, change_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: PathBuf::from(&config.path),
                recursive: config.recursive,
                change_tx,
            },
            change_rx,
        )
    }

    /// Start watching the directory in a background thread.
    ///
    /// The returned watcher handle must be kept alive for as long as events
    /// are wanted; dropping it stops the watch.
    pub fn run(self) -> Result<RecommendedWatcher, SupervisorError> {
        let tx = self.change_tx.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    // Reads are not changes; only content/tree mutations
                    // warrant a handoff.
                    if matches!(event.kind, EventKind::Access(_)) {
                        return;
                    }
                    let _ = tx.send(ChangeEvent {
                        kind: event.kind,
                        paths: event.paths,
                    });
                }
                Err(e) => tracing::error!(error = %e, "watch error"),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )
        .map_err(|source| SupervisorError::Watch {
            path: self.path.clone(),
            source,
        })?;

        let mode = if self.recursive {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };
        watcher
            .watch(&self.path, mode)
            .map_err(|source| SupervisorError::Watch {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!(path = %self.path.display(), recursive = self.recursive, "directory watch started");
        Ok(watcher)
    }
}
