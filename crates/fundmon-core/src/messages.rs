//! Fixed console text.
//!
//! All user-facing prose lives in immutable tables so the launcher logic
//! only decides *which* table to print. Report text is keyed by
//! [`OutcomeCategory`]; see [`report_table`].

use crate::domain::OutcomeCategory;

/// Width of the `=` rules framing banners.
pub const RULE_WIDTH: usize = 50;

pub const APP_TITLE: &str = "Binance Funding Rate Volatility Top-5 Monitor";
pub const CHECKING_RUNTIME: &str = "Checking Python environment...";
/// Followed by the detected version.
pub const RUNTIME_FOUND: &str = "[OK] Python detected, version";
pub const RUNTIME_MISSING: &str = "[ERROR] Python was not found on this system";
/// Printed when the detected version is below the supported minimum.
pub const RUNTIME_OUTDATED: &str =
    "[WARN] This Python is older than the supported minimum; the monitor may fail to start";
pub const STARTING_CHILD: &str = "Starting the funding rate monitor...";
pub const PRESS_ANY_KEY: &str = "Press any key to exit...";

/// A titled list of lines inside a report.
#[derive(Debug, PartialEq, Eq)]
pub struct MessageBlock {
    pub title: &'static str,
    pub lines: &'static [&'static str],
    /// Render lines as `1.`, `2.`, ... instead of bullets.
    pub numbered: bool,
}

/// The text printed for one outcome category.
#[derive(Debug, PartialEq, Eq)]
pub struct ReportTable {
    pub banner: &'static str,
    pub blocks: &'static [MessageBlock],
}

pub const SUCCESS_REPORT: ReportTable = ReportTable {
    banner: "The monitor exited normally",
    blocks: &[MessageBlock {
        title: "",
        lines: &["Thank you for using the funding rate monitor!"],
        numbered: false,
    }],
};

pub const FAILURE_REPORT: ReportTable = ReportTable {
    banner: "The monitor exited abnormally",
    blocks: &[
        MessageBlock {
            title: "Possible causes",
            lines: &[
                "Network connection lost or unstable",
                "Not enough memory or other system resources",
                "Program files are missing or corrupted",
                "Blocked by a firewall or antivirus program",
            ],
            numbered: false,
        },
        MessageBlock {
            title: "Suggested fixes",
            lines: &[
                "Check your network connection and try again",
                "Close other programs to free up resources",
                "Re-download or restore the program files",
                "Allow the program through your firewall or antivirus",
            ],
            numbered: false,
        },
    ],
};

pub const MISSING_RUNTIME_REPORT: ReportTable = ReportTable {
    banner: "Python is required to run the monitor",
    blocks: &[MessageBlock {
        title: "Installation guide",
        lines: &[
            "Download Python from https://www.python.org/downloads/",
            "Install Python 3.8 or newer",
            "During installation, tick \"Add Python to PATH\"",
            "After installing, open a new terminal and run: python --version",
            "Start this launcher again",
        ],
        numbered: true,
    }],
};

/// Look up the report text for an outcome category.
pub const fn report_table(category: OutcomeCategory) -> &'static ReportTable {
    match category {
        OutcomeCategory::Success => &SUCCESS_REPORT,
        OutcomeCategory::Failure => &FAILURE_REPORT,
        OutcomeCategory::MissingRuntime => &MISSING_RUNTIME_REPORT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExitOutcome, RuntimeVersion};

    #[test]
    fn test_lookup_is_keyed_by_category() {
        assert_eq!(report_table(OutcomeCategory::Success), &SUCCESS_REPORT);
        assert_eq!(report_table(OutcomeCategory::Failure), &FAILURE_REPORT);
        assert_eq!(
            report_table(OutcomeCategory::MissingRuntime),
            &MISSING_RUNTIME_REPORT
        );
    }

    #[test]
    fn test_only_zero_selects_success_table() {
        assert_eq!(
            report_table(ExitOutcome::new(0).category()),
            &SUCCESS_REPORT
        );
        assert_eq!(
            report_table(ExitOutcome::new(7).category()),
            &FAILURE_REPORT
        );
    }

    #[test]
    fn test_banners_are_distinct() {
        let banners = [
            SUCCESS_REPORT.banner,
            FAILURE_REPORT.banner,
            MISSING_RUNTIME_REPORT.banner,
        ];
        for (i, a) in banners.iter().enumerate() {
            for b in &banners[i + 1..] {
                assert!(!a.contains(b) && !b.contains(a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_guide_mentions_minimum_version_and_verification() {
        let lines = MISSING_RUNTIME_REPORT.blocks[0].lines;
        let minimum = RuntimeVersion::MINIMUM.to_string();
        assert!(lines.iter().any(|l| l.contains(&minimum)));
        assert!(lines.iter().any(|l| l.contains("Add Python to PATH")));
        assert!(lines.iter().any(|l| l.contains("--version")));
    }

    #[test]
    fn test_failure_report_lists_causes_and_fixes() {
        let titles: Vec<_> = FAILURE_REPORT.blocks.iter().map(|b| b.title).collect();
        assert_eq!(titles, ["Possible causes", "Suggested fixes"]);
        assert!(FAILURE_REPORT.blocks.iter().all(|b| !b.lines.is_empty()));
    }
}
