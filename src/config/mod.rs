//! Configuration management.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → PhoenixConfig (validated, immutable)
//!     → handed to subsystems and supervisor at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the process lineage re-reads it on
//!   every spawn, so edits take effect through handoff, not hot reload
//! - All fields have defaults so the binary runs with no config file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{PhoenixConfig, ServerConfig, TimerConfig, WatchConfig};
pub use validation::{validate_config, ValidationError};
