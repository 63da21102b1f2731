//! Runtime probe implementation.
//!
//! `DefaultRuntimeProbe` implements `RuntimeProbe` from fundmon-core by
//! resolving interpreter candidates on `PATH` and asking each for its
//! version.

mod commands;

use fundmon_core::{RuntimeAvailability, RuntimeProbe};
use tracing::debug;

pub use commands::{get_command_version, get_python_version};

/// Interpreter names tried in order when none is configured.
///
/// On Windows `python` is the installer's name; elsewhere `python` may
/// still be Python 2, so `python3` goes first.
pub const DEFAULT_CANDIDATES: &[&str] = if cfg!(windows) {
    &["python", "python3"]
} else {
    &["python3", "python"]
};

/// Default implementation of `RuntimeProbe`.
///
/// A candidate counts as present only if it resolves on `PATH` *and*
/// answers `--version` with a parseable banner. This rejects stubs such as
/// the Windows app-execution alias that exists on `PATH` but only points
/// at the Store.
#[derive(Debug, Clone)]
pub struct DefaultRuntimeProbe {
    candidates: Vec<String>,
}

impl DefaultRuntimeProbe {
    /// Create a probe trying `candidates` in order. Each may be a bare
    /// command name or a path.
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }
}

impl Default for DefaultRuntimeProbe {
    fn default() -> Self {
        Self::new(DEFAULT_CANDIDATES.iter().copied())
    }
}

impl RuntimeProbe for DefaultRuntimeProbe {
    fn check_runtime(&self) -> RuntimeAvailability {
        for candidate in &self.candidates {
            let path = match which::which(candidate) {
                Ok(path) => path,
                Err(e) => {
                    debug!(%candidate, error = %e, "runtime candidate not on PATH");
                    continue;
                }
            };

            match get_python_version(&path) {
                Some(version) => {
                    debug!(%candidate, path = %path.display(), %version, "runtime resolved");
                    return RuntimeAvailability::Present { version, path };
                }
                None => {
                    debug!(path = %path.display(), "runtime candidate gave no parseable version");
                }
            }
        }

        RuntimeAvailability::Absent
    }
}
