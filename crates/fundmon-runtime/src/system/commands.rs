//! Command version extraction.

use std::ffi::OsStr;
use std::process::Command;

use fundmon_core::RuntimeVersion;

/// Get the first line a command prints for `version_flag`.
///
/// Returns `None` when the command cannot be run or exits non-zero.
pub fn get_command_version(cmd: impl AsRef<OsStr>, version_flag: &str) -> Option<String> {
    let output = Command::new(cmd).arg(version_flag).output().ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    // Interpreters older than 3.4 print the banner to stderr
    let text = if stdout.trim().is_empty() {
        stderr
    } else {
        stdout
    };

    text.lines().next().map(|s| s.trim().to_string())
}

/// Ask an interpreter for its version: `"Python 3.12.1"` -> `3.12.1`.
pub fn get_python_version(cmd: impl AsRef<OsStr>) -> Option<RuntimeVersion> {
    let banner = get_command_version(cmd, "--version")?;
    RuntimeVersion::from_banner(&banner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_command_version_nonexistent() {
        assert!(get_command_version("definitely_not_a_real_command_12345", "--version").is_none());
        assert!(get_python_version("definitely_not_a_real_command_12345").is_none());
    }

    #[test]
    fn test_get_python_version_format() {
        // If python3 is installed, the banner must parse
        if get_command_version("python3", "--version").is_some() {
            let version = get_python_version("python3").expect("banner should parse");
            assert_eq!(version.major, 3);
        }
    }
}
