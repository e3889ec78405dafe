//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (interval > 0, bind address well-formed)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: PhoenixConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::PhoenixConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The server bind address does not parse as `host:port`.
    InvalidBindAddress(String),
    /// The timer interval is zero.
    ZeroTimerInterval,
    /// The watch path is empty.
    EmptyWatchPath,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "invalid bind address '{}'", addr)
            }
            ValidationError::ZeroTimerInterval => write!(f, "timer interval must be > 0"),
            ValidationError::EmptyWatchPath => write!(f, "watch path must not be empty"),
        }
    }
}

/// Check a parsed configuration for semantic problems.
pub fn validate_config(config: &PhoenixConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.server.bind_address.clone(),
        ));
    }

    if config.timer.interval_ms == 0 {
        errors.push(ValidationError::ZeroTimerInterval);
    }

    if config.watch.path.is_empty() {
        errors.push(ValidationError::EmptyWatchPath);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&PhoenixConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_error() {
        let mut config = PhoenixConfig::default();
        config.server.bind_address = "not-an-address".into();
        config.timer.interval_ms = 0;
        config.watch.path = String::new();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::ZeroTimerInterval));
        assert!(errors.contains(&ValidationError::EmptyWatchPath));
    }

    #[test]
    fn rejects_address_without_port() {
        let mut config = PhoenixConfig::default();
        config.server.bind_address = "127.0.0.1".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidBindAddress("127.0.0.1".into())]
        );
    }
}
