//! Launcher entry point - the composition root.
//!
//! This is the only place where the OS adapters are wired into the core
//! `Launcher`. The process exits with the code the launcher relays.

use std::io;
use std::process;

use anyhow::Result;
use clap::Parser;
use fundmon_cli::{Cli, LauncherConfig, TerminalPause, logging};
use fundmon_core::{ExitOutcome, Launcher, NoPause, Pause};
use fundmon_runtime::{DefaultRuntimeProbe, ScriptLauncher};
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    match run().await {
        Ok(outcome) => process::exit(outcome.code()),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(ExitOutcome::GENERAL_FAILURE.code());
        }
    }
}

async fn run() -> Result<ExitOutcome> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    logging::init();

    let _cli = Cli::parse();

    let config = LauncherConfig::with_defaults()?;
    debug!(?config, "launcher configured");

    let probe = DefaultRuntimeProbe::new(config.runtime_candidates.clone());
    let mut child = ScriptLauncher::new(&config.entry_script);
    if let Some(dir) = &config.working_dir {
        child = child.with_working_dir(dir);
    }
    let pause: &dyn Pause = if config.pause {
        &TerminalPause
    } else {
        &NoPause
    };

    let launcher =
        Launcher::new(&probe, &child, pause).with_minimum_version(config.minimum_version);
    Ok(launcher.run(&mut io::stdout()).await)
}
