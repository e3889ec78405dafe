//! Long-running subsystems.
//!
//! # Data Flow
//! ```text
//! process startup
//!     → every subsystem starts (owns one resource: socket, timer)
//!     → runs until the Shutdown signal fires
//!     → releases its resource exactly once and returns
//! ```
//!
//! # Design Decisions
//! - A subsystem starts once per process lifetime and never restarts
//! - Request-level failures stay inside the subsystem; only errors that end
//!   the subsystem propagate
//! - Stop is cooperative: subsystems observe the signal, nothing interrupts
//!   them forcefully in-process

use async_trait::async_trait;

use crate::error::SubsystemError;
use crate::lifecycle::Shutdown;

pub mod server;
pub mod timer;

pub use server::ServerSubsystem;
pub use timer::TimerSubsystem;

/// Shared handle to a subsystem object.
pub type SubsystemRef = std::sync::Arc<dyn Subsystem>;

/// An independently startable, cancelable unit of long-running work.
///
/// A `Subsystem` has a stable [`name`](Subsystem::name) and an async
/// [`run`](Subsystem::run) method that receives the process-wide [`Shutdown`]
/// signal. Implementations acquire their resource up front, do their work
/// until the signal fires, and release the resource before returning.
#[async_trait]
pub trait Subsystem: Send + Sync + 'static {
    /// Returns a stable, human-readable subsystem name.
    fn name(&self) -> &str;

    /// Executes the subsystem until completion or shutdown.
    async fn run(&self, shutdown: Shutdown) -> Result<(), SubsystemError>;
}
