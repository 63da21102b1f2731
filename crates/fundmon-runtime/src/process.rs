//! Foreground child process for the monitor's entry script.

use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use fundmon_core::{ChildLauncher, ExitOutcome, LaunchError};
use tokio::process::Command;
use tracing::debug;

/// Runs `<runtime> <script>` with the launcher's console attached.
///
/// The script is passed with no further arguments. If a working directory
/// is set, `script` should be absolute so it still resolves from there.
#[derive(Debug, Clone)]
pub struct ScriptLauncher {
    script: PathBuf,
    working_dir: Option<PathBuf>,
}

impl ScriptLauncher {
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
            working_dir: None,
        }
    }

    /// Run the child from `dir` instead of the launcher's own directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn script(&self) -> &Path {
        &self.script
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    fn command(&self, runtime: &Path) -> Command {
        let mut cmd = Command::new(runtime);
        cmd.arg(&self.script)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

#[async_trait]
impl ChildLauncher for ScriptLauncher {
    async fn launch(&self, runtime: &Path) -> Result<ExitOutcome, LaunchError> {
        let mut child = self
            .command(runtime)
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                program: runtime.to_path_buf(),
                source,
            })?;

        debug!(
            pid = ?child.id(),
            script = %self.script.display(),
            "monitor process spawned"
        );

        // Ctrl+C reaches the child through the console process group; we
        // only return once it has been reaped.
        let status = child.wait().await.map_err(LaunchError::Wait)?;
        debug!(%status, "monitor process reaped");

        Ok(exit_outcome(status))
    }
}

/// Convert a process status into the outcome we relay.
///
/// A child killed by a signal has no exit code on Unix; it is reported as
/// `128 + signal` like a shell would.
pub fn exit_outcome(status: ExitStatus) -> ExitOutcome {
    if let Some(code) = status.code() {
        return ExitOutcome::new(code);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return ExitOutcome::from_signal(signal);
        }
    }

    ExitOutcome::GENERAL_FAILURE
}
