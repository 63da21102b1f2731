#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

// Dev-dependency used only by the integration tests
#[cfg(test)]
use tempfile as _;

// Used by the binary in main.rs
use dotenvy as _;
use tokio as _;
use tracing as _;

pub mod config;
pub mod logging;
pub mod parser;
pub mod pause;

// Re-export primary types for convenient access
pub use config::LauncherConfig;
pub use parser::Cli;
pub use pause::TerminalPause;
