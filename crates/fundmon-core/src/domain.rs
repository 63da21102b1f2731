//! Launcher domain types.
//!
//! Everything here is transient: it is derived once during a single run
//! and never persisted.

use std::fmt;
use std::path::{Path, PathBuf};

/// A parsed runtime version, e.g. `3.11.4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
}

impl RuntimeVersion {
    /// Oldest interpreter the monitor supports.
    pub const MINIMUM: Self = Self::new(3, 8);

    /// Create a `major.minor` version.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            patch: None,
        }
    }

    /// Parse a dotted version such as `3.12.1` or `3.13.0rc2`.
    ///
    /// At least `major.minor` must be present. Any non-digit suffix on the
    /// patch component (release candidates, `+` build tags) is ignored.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.trim().split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = leading_number(parts.next()?)?;
        let patch = parts.next().and_then(leading_number);
        Some(Self {
            major,
            minor,
            patch,
        })
    }

    /// Parse the banner printed by `python --version`.
    ///
    /// Only the first line is considered: `"Python 3.11.4"` -> `3.11.4`.
    pub fn from_banner(banner: &str) -> Option<Self> {
        let line = banner.lines().next()?;
        let mut words = line.split_whitespace();
        if !words.next()?.eq_ignore_ascii_case("python") {
            return None;
        }
        Self::parse(words.next()?)
    }

    /// Whether this version satisfies `minimum` (compared on major/minor).
    pub const fn at_least(&self, minimum: &Self) -> bool {
        self.major > minimum.major || (self.major == minimum.major && self.minor >= minimum.minor)
    }
}

fn leading_number(part: &str) -> Option<u32> {
    let end = part
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(part.len());
    part[..end].parse().ok()
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

/// Result of the one-time runtime check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeAvailability {
    /// The runtime resolved on the search path and reported a version.
    Present {
        version: RuntimeVersion,
        path: PathBuf,
    },
    /// The runtime could not be found or did not answer the version query.
    Absent,
}

impl RuntimeAvailability {
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present { .. })
    }

    pub const fn version(&self) -> Option<&RuntimeVersion> {
        match self {
            Self::Present { version, .. } => Some(version),
            Self::Absent => None,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Present { path, .. } => Some(path),
            Self::Absent => None,
        }
    }
}

/// The termination status of the child program, relayed as our own exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitOutcome(i32);

impl ExitOutcome {
    /// The one code treated as success.
    pub const SUCCESS: Self = Self(0);
    /// Sentinel used when the runtime is missing or the child never started.
    pub const GENERAL_FAILURE: Self = Self(1);

    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// Outcome for a child terminated by `signal`, using the shell
    /// convention of `128 + signal`.
    pub const fn from_signal(signal: i32) -> Self {
        Self(128 + signal)
    }

    pub const fn code(self) -> i32 {
        self.0
    }

    pub const fn is_success(self) -> bool {
        self.0 == Self::SUCCESS.0
    }

    pub const fn category(self) -> OutcomeCategory {
        if self.is_success() {
            OutcomeCategory::Success
        } else {
            OutcomeCategory::Failure
        }
    }
}

impl fmt::Display for ExitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key into the fixed message tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeCategory {
    Success,
    Failure,
    MissingRuntime,
}
