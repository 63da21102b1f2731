//! Port definitions for the launcher's OS seams.
//!
//! The launcher itself never touches the host. Concrete implementations
//! live in `fundmon-runtime` (probe, child) and `fundmon-cli` (pause) and
//! are wired together at the binary's composition root.

use std::io;
use std::path::Path;

use async_trait::async_trait;

use crate::domain::{ExitOutcome, RuntimeAvailability};
use crate::error::LaunchError;

/// Detects whether the runtime is installed.
///
/// Absence is a normal answer, so this is infallible: any probing failure
/// is reported as [`RuntimeAvailability::Absent`].
#[cfg_attr(test, mockall::automock)]
pub trait RuntimeProbe: Send + Sync {
    fn check_runtime(&self) -> RuntimeAvailability;
}

/// Runs the child program in the foreground and waits for it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChildLauncher: Send + Sync {
    /// Start the child with `runtime`, inheriting the console, and block
    /// until it has fully terminated.
    async fn launch(&self, runtime: &Path) -> Result<ExitOutcome, LaunchError>;
}

/// Holds the console open until the user acknowledges the result.
#[cfg_attr(test, mockall::automock)]
pub trait Pause: Send + Sync {
    fn wait_for_key(&self) -> io::Result<()>;
}

/// A [`Pause`] that returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPause;

impl Pause for NoPause {
    fn wait_for_key(&self) -> io::Result<()> {
        Ok(())
    }
}
