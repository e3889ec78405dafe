//! Process identity.
//!
//! A process is either the originally launched root or a worker it spawned.
//! The role is carried by an explicit startup flag (`--role worker`) passed
//! to spawned processes; absence of the flag means root. Read once at
//! startup, immutable afterwards.

use clap::ValueEnum;

/// Role of the current process within the lineage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Role {
    /// Originally launched process; watches the directory and spawns workers.
    #[default]
    Root,
    /// Spawned process; only runs the subsystems.
    Worker,
}

impl Role {
    /// Whether this process owns the directory watch.
    pub fn is_root(self) -> bool {
        matches!(self, Role::Root)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Root => write!(f, "root"),
            Role::Worker => write!(f, "worker"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_marker_means_root() {
        assert_eq!(Role::default(), Role::Root);
        assert!(Role::default().is_root());
    }

    #[test]
    fn parses_cli_markers() {
        assert_eq!(
            <Role as ValueEnum>::from_str("worker", false).unwrap(),
            Role::Worker
        );
        assert_eq!(
            <Role as ValueEnum>::from_str("root", false).unwrap(),
            Role::Root
        );
        assert!(<Role as ValueEnum>::from_str("manager", false).is_err());
    }
}
