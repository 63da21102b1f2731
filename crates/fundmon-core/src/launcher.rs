//! The launcher state machine: check the runtime, run the child, report.
//!
//! A run is strictly linear. The runtime is probed exactly once and the
//! child is started at most once; nothing is retried.
//!
//! Console writes are best-effort. A broken console must never change the
//! exit code relayed from the child, so write failures are logged and the
//! run carries on.

use std::io::Write;
use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::domain::{ExitOutcome, OutcomeCategory, RuntimeAvailability, RuntimeVersion};
use crate::error::LaunchError;
use crate::messages::{
    self, APP_TITLE, CHECKING_RUNTIME, RULE_WIDTH, RUNTIME_FOUND, RUNTIME_MISSING,
    RUNTIME_OUTDATED, ReportTable, STARTING_CHILD,
};
use crate::ports::{ChildLauncher, Pause, RuntimeProbe};

/// States of a single launcher run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LauncherState {
    Start,
    RuntimeCheck,
    Invoke,
    Report,
    Guide,
    Exit,
}

impl LauncherState {
    /// States reachable in one step from `self`.
    pub const fn successors(self) -> &'static [Self] {
        match self {
            Self::Start => &[Self::RuntimeCheck],
            Self::RuntimeCheck => &[Self::Invoke, Self::Guide],
            Self::Invoke => &[Self::Report],
            Self::Report | Self::Guide => &[Self::Exit],
            Self::Exit => &[],
        }
    }

    fn advance(&mut self, next: Self) {
        debug_assert!(
            self.successors().contains(&next),
            "illegal launcher transition {self:?} -> {next:?}"
        );
        debug!(from = ?*self, to = ?next, "launcher transition");
        *self = next;
    }
}

/// Orchestrates one check → invoke → report run.
pub struct Launcher<'a> {
    probe: &'a dyn RuntimeProbe,
    child: &'a dyn ChildLauncher,
    pause: &'a dyn Pause,
    minimum_version: RuntimeVersion,
}

impl<'a> Launcher<'a> {
    pub fn new(
        probe: &'a dyn RuntimeProbe,
        child: &'a dyn ChildLauncher,
        pause: &'a dyn Pause,
    ) -> Self {
        Self {
            probe,
            child,
            pause,
            minimum_version: RuntimeVersion::MINIMUM,
        }
    }

    /// Override the version below which an advisory is printed.
    #[must_use]
    pub const fn with_minimum_version(mut self, minimum: RuntimeVersion) -> Self {
        self.minimum_version = minimum;
        self
    }

    /// Execute the whole run, writing status text to `out`.
    ///
    /// Returns the code this process should exit with: the child's own code,
    /// or [`ExitOutcome::GENERAL_FAILURE`] when the runtime is missing.
    pub async fn run<W: Write + ?Sized>(&self, out: &mut W) -> ExitOutcome {
        let mut state = LauncherState::Start;
        console(write_header(out));

        state.advance(LauncherState::RuntimeCheck);
        let availability = self.check_runtime(out);

        let outcome = if let Some(runtime) = availability.path() {
            state.advance(LauncherState::Invoke);
            let outcome = self.invoke(runtime, out).await;

            state.advance(LauncherState::Report);
            console(self.report(outcome, out));
            outcome
        } else {
            state.advance(LauncherState::Guide);
            console(self.install_guide(out));
            ExitOutcome::GENERAL_FAILURE
        };

        console(out.flush().map_err(LaunchError::from));
        if let Err(err) = self.pause.wait_for_key() {
            warn!(error = %err, "could not wait for keypress");
        }

        state.advance(LauncherState::Exit);
        outcome
    }

    /// Probe the runtime once and print the matching status line.
    pub fn check_runtime<W: Write + ?Sized>(&self, out: &mut W) -> RuntimeAvailability {
        let availability = self.probe.check_runtime();
        console(self.write_runtime_status(&availability, out));
        availability
    }

    fn write_runtime_status<W: Write + ?Sized>(
        &self,
        availability: &RuntimeAvailability,
        out: &mut W,
    ) -> Result<(), LaunchError> {
        writeln!(out, "{CHECKING_RUNTIME}")?;
        match availability {
            RuntimeAvailability::Present { version, path } => {
                debug!(path = %path.display(), %version, "runtime detected");
                writeln!(out, "{RUNTIME_FOUND} {version}")?;
                if !version.at_least(&self.minimum_version) {
                    warn!(%version, minimum = %self.minimum_version, "runtime is older than supported");
                    writeln!(out, "{RUNTIME_OUTDATED} ({})", self.minimum_version)?;
                }
            }
            RuntimeAvailability::Absent => {
                info!("runtime not found");
                writeln!(out, "{RUNTIME_MISSING}")?;
            }
        }
        Ok(())
    }

    /// Print the installation guide for a missing runtime.
    pub fn install_guide<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), LaunchError> {
        render_report(out, messages::report_table(OutcomeCategory::MissingRuntime))?;
        Ok(())
    }

    /// Start the child and wait for it to terminate.
    ///
    /// The console is flushed first so nothing we printed can interleave
    /// with the child's own output.
    pub async fn invoke<W: Write + ?Sized>(&self, runtime: &Path, out: &mut W) -> ExitOutcome {
        console(writeln!(out, "{STARTING_CHILD}\n").map_err(LaunchError::from));
        console(out.flush().map_err(LaunchError::from));

        info!(runtime = %runtime.display(), "starting monitor");
        match self.child.launch(runtime).await {
            Ok(outcome) => {
                info!(code = outcome.code(), "monitor exited");
                outcome
            }
            Err(err) => {
                error!(error = %err, "monitor could not be run");
                console(writeln!(out, "[ERROR] {err}").map_err(LaunchError::from));
                err.exit_outcome()
            }
        }
    }

    /// Print the success or failure report for `outcome`.
    pub fn report<W: Write + ?Sized>(
        &self,
        outcome: ExitOutcome,
        out: &mut W,
    ) -> Result<(), LaunchError> {
        let table = messages::report_table(outcome.category());
        render_report(out, table)?;
        if !outcome.is_success() {
            writeln!(out, "Exit code: {outcome}")?;
        }
        Ok(())
    }
}

fn console(result: Result<(), LaunchError>) {
    if let Err(err) = result {
        warn!(error = %err, "console write failed");
    }
}

fn write_rule<W: Write + ?Sized>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

fn write_banner<W: Write + ?Sized>(out: &mut W, text: &str) -> std::io::Result<()> {
    write_rule(out)?;
    writeln!(out, "    {text}")?;
    write_rule(out)
}

fn write_header<W: Write + ?Sized>(out: &mut W) -> Result<(), LaunchError> {
    write_banner(out, APP_TITLE)?;
    writeln!(out)?;
    Ok(())
}

/// Render a report table: a framed banner followed by its blocks.
pub fn render_report<W: Write + ?Sized>(out: &mut W, table: &ReportTable) -> std::io::Result<()> {
    writeln!(out)?;
    write_banner(out, table.banner)?;
    for block in table.blocks {
        if !block.title.is_empty() {
            writeln!(out, "{}:", block.title)?;
        }
        for (i, line) in block.lines.iter().enumerate() {
            if block.numbered {
                writeln!(out, "  {}. {line}", i + 1)?;
            } else if block.title.is_empty() {
                writeln!(out, "{line}")?;
            } else {
                writeln!(out, "  - {line}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}
