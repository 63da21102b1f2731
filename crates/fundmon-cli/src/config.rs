//! Launcher configuration.
//!
//! The launcher takes no arguments; everything has a fixed default and can
//! only be overridden from the environment at deployment time.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fundmon_core::RuntimeVersion;
use fundmon_runtime::DEFAULT_CANDIDATES;

/// Interpreter command or path.
pub const ENV_RUNTIME: &str = "FUNDMON_RUNTIME";
/// Entry script path.
pub const ENV_ENTRY: &str = "FUNDMON_ENTRY";
/// Any non-empty value disables the final keypress wait.
pub const ENV_NO_PAUSE: &str = "FUNDMON_NO_PAUSE";
/// `tracing` filter directive.
pub const ENV_LOG: &str = "FUNDMON_LOG";

/// The monitor's entry script, looked up next to the launcher executable.
pub const DEFAULT_ENTRY_SCRIPT: &str = "main.py";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    /// Interpreter candidates, tried in order.
    pub runtime_candidates: Vec<String>,
    /// Absolute path of the script handed to the interpreter.
    pub entry_script: PathBuf,
    /// Directory the child runs from (the script's directory).
    pub working_dir: Option<PathBuf>,
    /// Wait for a keypress before exiting.
    pub pause: bool,
    /// Versions below this get an advisory line.
    pub minimum_version: RuntimeVersion,
}

impl LauncherConfig {
    /// Build the config from the process environment.
    pub fn with_defaults() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let runtime_candidates = match non_empty(lookup(ENV_RUNTIME)) {
            Some(runtime) => vec![runtime],
            None => DEFAULT_CANDIDATES.iter().map(ToString::to_string).collect(),
        };

        let entry = non_empty(lookup(ENV_ENTRY)).map_or_else(default_entry_script, PathBuf::from);
        let entry_script = std::path::absolute(&entry)
            .with_context(|| format!("Failed to resolve entry script {}", entry.display()))?;
        let working_dir = entry_script
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf);

        Ok(Self {
            runtime_candidates,
            entry_script,
            working_dir,
            pause: non_empty(lookup(ENV_NO_PAUSE)).is_none(),
            minimum_version: RuntimeVersion::MINIMUM,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// `main.py` beside the executable if it exists, else in the current directory.
fn default_entry_script() -> PathBuf {
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_ENTRY_SCRIPT)));

    match beside_exe {
        Some(path) if path.is_file() => path,
        _ => PathBuf::from(DEFAULT_ENTRY_SCRIPT),
    }
}
