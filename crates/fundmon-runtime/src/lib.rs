#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

// Dev-dependency used only by the integration tests
#[cfg(test)]
use tempfile as _;

pub mod process;
pub mod system;

// Re-export port implementations
pub use process::{ScriptLauncher, exit_outcome};
pub use system::{DEFAULT_CANDIDATES, DefaultRuntimeProbe};
