//! End-to-end runs of the `fundmon` binary.
//!
//! The interpreter is replaced by a shell script (`FUNDMON_RUNTIME`) and the
//! monitor by a tiny entry script (`FUNDMON_ENTRY`), so these exercise the
//! real probe, process spawning and exit-code relay.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use fundmon_core::messages::{
    FAILURE_REPORT, MISSING_RUNTIME_REPORT, RUNTIME_MISSING, STARTING_CHILD, SUCCESS_REPORT,
};
use tempfile::TempDir;

fn fundmon(dir: &Path, runtime: &str, entry: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fundmon"))
        .current_dir(dir)
        .env("FUNDMON_RUNTIME", runtime)
        .env("FUNDMON_ENTRY", entry)
        .env("FUNDMON_NO_PAUSE", "1")
        .env_remove("FUNDMON_LOG")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run fundmon")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn scenario_a_missing_runtime_prints_guide_and_exits_1() {
    let dir = TempDir::new().unwrap();
    let marker = dir.path().join("ran");
    let entry = dir.path().join("main.py");
    fs::write(&entry, format!("touch {}\n", marker.display())).unwrap();

    let output = fundmon(dir.path(), "definitely_not_a_real_python_12345", &entry);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(text.contains(RUNTIME_MISSING));
    assert!(text.contains(MISSING_RUNTIME_REPORT.banner));
    assert!(text.contains("Add Python to PATH"));
    assert!(!text.contains(STARTING_CHILD));
    assert!(!marker.exists(), "child must never be invoked");
}

#[test]
fn rejects_unexpected_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_fundmon"))
        .arg("--retry")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[cfg(unix)]
mod with_fake_interpreter {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// A stand-in interpreter that answers `--version` and runs its script with sh.
    fn fake_python(dir: &Path) -> String {
        write_script(
            dir,
            "python",
            "if [ \"$1\" = \"--version\" ]; then echo 'Python 3.11.4'; exit 0; fi\nexec /bin/sh \"$@\"",
        )
        .to_string_lossy()
        .into_owned()
    }

    /// Entry script that records each invocation, says hello, then exits with `code`.
    fn monitor_script(dir: &Path, code: i32) -> PathBuf {
        let counter = dir.join("invocations");
        write_script(
            dir,
            "main.py",
            &format!(
                "echo run >> {}\necho 'monitor running'\nexit {code}",
                counter.display()
            ),
        )
    }

    fn invocations(dir: &Path) -> usize {
        fs::read_to_string(dir.join("invocations"))
            .map(|s| s.lines().count())
            .unwrap_or(0)
    }

    #[test]
    fn scenario_b_child_success_exits_0() {
        let dir = TempDir::new().unwrap();
        let python = fake_python(dir.path());
        let entry = monitor_script(dir.path(), 0);

        let output = fundmon(dir.path(), &python, &entry);
        let text = stdout(&output);

        assert_eq!(output.status.code(), Some(0));
        assert!(text.contains("[OK] Python detected, version 3.11.4"));
        assert!(text.contains(SUCCESS_REPORT.banner));
        assert!(!text.contains(FAILURE_REPORT.banner));
        assert_eq!(invocations(dir.path()), 1);
    }

    #[test]
    fn scenario_c_child_failure_relays_code() {
        let dir = TempDir::new().unwrap();
        let python = fake_python(dir.path());
        let entry = monitor_script(dir.path(), 7);

        let output = fundmon(dir.path(), &python, &entry);
        let text = stdout(&output);

        assert_eq!(output.status.code(), Some(7));
        assert!(text.contains(FAILURE_REPORT.banner));
        assert!(text.contains("Possible causes:"));
        assert!(!text.contains(SUCCESS_REPORT.banner));
        assert_eq!(invocations(dir.path()), 1);
    }

    #[test]
    fn child_output_appears_between_start_and_report() {
        let dir = TempDir::new().unwrap();
        let python = fake_python(dir.path());
        let entry = monitor_script(dir.path(), 0);

        let text = stdout(&fundmon(dir.path(), &python, &entry));

        let started = text.find(STARTING_CHILD).expect("start line");
        let child = text.find("monitor running").expect("child output");
        let report = text.find(SUCCESS_REPORT.banner).expect("report");
        assert!(started < child && child < report, "{text}");
    }

    #[test]
    fn scenario_d_interrupted_child_reports_after_termination() {
        let dir = TempDir::new().unwrap();
        let python = fake_python(dir.path());
        let entry = write_script(
            dir.path(),
            "main.py",
            "echo 'monitor running'\nkill -TERM $$\nexit 0",
        );

        let output = fundmon(dir.path(), &python, &entry);
        let text = stdout(&output);

        assert_eq!(output.status.code(), Some(128 + 15));
        let child = text.find("monitor running").expect("child output");
        let report = text.find(FAILURE_REPORT.banner).expect("report");
        assert!(child < report);
    }
}
