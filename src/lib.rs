//! Self-reloading process supervisor.
//!
//! A `phoenix` process watches its own working directory and, on every
//! filesystem change, hands its workload off to a freshly spawned replacement
//! process while the old instance quiesces. At most one process is actively
//! serving at a time; replaced processes stop cleanly instead of being cut
//! off mid-operation.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌──────────────────────────────────────────────────┐
//!                  │                 ROOT PROCESS                      │
//!                  │                                                   │
//!   fs change      │  ┌──────────┐      ┌──────────────────────────┐  │
//!   ───────────────┼─▶│ watcher  │─────▶│       supervisor          │  │
//!                  │  └──────────┘      │  stop previous workload   │  │
//!                  │                    │  spawn replacement worker │  │
//!                  │                    │  record WorkerHandle      │  │
//!                  │                    └─────────┬────────────────┘  │
//!                  │                              │                   │
//!                  │  ┌────────────┐   trigger    │     spawn         │
//!                  │  │  Shutdown  │◀─────────────┤       │           │
//!                  │  └─────┬──────┘              │       │           │
//!                  │        │ cancelled()         │       │           │
//!                  │  ┌─────▼──────┐ ┌─────▼──────┐       │           │
//!                  │  │   server   │ │   timer    │       │           │
//!                  │  │ subsystem  │ │ subsystem  │       │           │
//!                  │  └────────────┘ └────────────┘       │           │
//!                  └─────────────────────────────────────┼───────────┘
//!                                                         ▼
//!                  ┌──────────────────────────────────────────────────┐
//!                  │   WORKER PROCESS (same binary, --role worker)     │
//!                  │   inherited stdio · server + timer subsystems     │
//!                  └──────────────────────────────────────────────────┘
//! ```
//!
//! The root is itself the first worker: its own subsystems serve until the
//! first change event, after which spawned workers carry the workload and the
//! root only watches and replaces them.

// Core subsystems
pub mod config;
pub mod subsystem;
pub mod supervisor;

// Cross-cutting concerns
pub mod error;
pub mod lifecycle;

pub use config::PhoenixConfig;
pub use error::{SubsystemError, SupervisorError};
pub use lifecycle::Shutdown;
pub use subsystem::{ServerSubsystem, Subsystem, SubsystemRef, TimerSubsystem};
pub use supervisor::{Role, Supervisor};
