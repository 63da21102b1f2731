//! Command-line surface.
//!
//! The launcher is parameterless; clap only answers `--help` and
//! `--version` and rejects anything else.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "fundmon",
    version,
    about = "Check for Python, then run the funding rate monitor",
    long_about = "Checks that a Python 3 interpreter is installed, runs the funding rate \
                  monitor in the foreground and reports how it exited. Prints an \
                  installation guide if Python is missing."
)]
pub struct Cli {}
