//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! supervisor. All types derive Serde traits for deserialization from config
//! files, and every section has defaults so a partial file works.

use serde::{Deserialize, Serialize};

/// Root configuration for the supervisor and its subsystems.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PhoenixConfig {
    /// HTTP server subsystem settings.
    pub server: ServerConfig,

    /// Periodic timer subsystem settings.
    pub timer: TimerConfig,

    /// Directory watch settings.
    pub watch: WatchConfig,
}

/// HTTP server subsystem configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:1337").
    ///
    /// The port is shared across the process lineage: each replacement
    /// worker binds it after the previous holder releases it.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:1337".to_string(),
        }
    }
}

/// Periodic timer subsystem configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Tick interval in milliseconds.
    pub interval_ms: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self { interval_ms: 1000 }
    }
}

/// Directory watch configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Directory to watch for changes.
    pub path: String,

    /// Watch the whole subtree, not just the top-level directory.
    pub recursive: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            path: ".".to_string(),
            recursive: true,
        }
    }
}
