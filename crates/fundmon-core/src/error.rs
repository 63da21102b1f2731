//! Error types for the launcher plumbing.
//!
//! A missing runtime and a non-zero child exit are *outcomes*, not errors;
//! they never appear here. `LaunchError` only covers the I/O that surrounds
//! them.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ExitOutcome;

/// Errors raised while starting, awaiting or reporting on the child program.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The runtime could not be started at all.
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The child started but its status could not be collected.
    #[error("Failed to wait for the monitor process: {0}")]
    Wait(#[source] io::Error),

    /// Writing to or reading from the console failed.
    #[error("Console I/O error: {0}")]
    Console(#[from] io::Error),
}

impl LaunchError {
    /// Outcome reported in place of a child exit code.
    ///
    /// Spawn and wait failures count as an abnormal run with the general
    /// failure code; console failures use `EX_IOERR` from sysexits.h.
    pub const fn exit_outcome(&self) -> ExitOutcome {
        match self {
            Self::Spawn { .. } | Self::Wait(_) => ExitOutcome::GENERAL_FAILURE,
            Self::Console(_) => ExitOutcome::new(74),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_error_message_names_program() {
        let err = LaunchError::Spawn {
            program: PathBuf::from("/opt/python/bin/python3"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/opt/python/bin/python3"));
        assert!(msg.contains("denied"));
        assert_eq!(err.exit_outcome(), ExitOutcome::GENERAL_FAILURE);
    }

    #[test]
    fn test_console_error_from_io() {
        let err: LaunchError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(err, LaunchError::Console(_)));
        assert_eq!(err.exit_outcome().code(), 74);
    }
}
