//! Lifecycle management.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     change event or OS signal → trigger() → subsystems observe
//!     → release resources → tasks return
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → root terminates its worker and exits
//! ```
//!
//! # Design Decisions
//! - One Shutdown per process, constructed at startup and passed explicitly
//!   to every subsystem and to the supervisor (no global state)
//! - Triggering is one-shot and idempotent; observers registered after the
//!   trigger resolve immediately
//! - Cross-process stops are forceful (kill); the signal only reaches
//!   subsystems inside the process that owns it

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
