#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod error;
pub mod launcher;
pub mod messages;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{ExitOutcome, OutcomeCategory, RuntimeAvailability, RuntimeVersion};
pub use error::LaunchError;
pub use launcher::{Launcher, LauncherState};
pub use ports::{ChildLauncher, NoPause, Pause, RuntimeProbe};
