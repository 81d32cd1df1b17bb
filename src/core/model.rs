//! Finding model
//!
//! Every marker hit is mapped to a `Finding` before it is rendered, and every
//! scanned file reports back a `FileOutcome`.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Marker searched for on each line
pub const DEFAULT_MARKER: &str = "TODO:";

/// One marker occurrence on one line of one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Path relative to root, using '/' as separator
    pub path: String,

    /// 1-based line number
    pub line: usize,

    /// Line text from the marker onward, whitespace stripped
    pub text: String,
}

impl Finding {
    pub fn new(path: impl Into<String>, line: usize, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            line,
            text: text.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.path, self.line, self.text)
    }
}

/// Why a file was abandoned part way through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("invalid UTF-8 on line {line}")]
    InvalidUtf8 { line: usize },

    #[error("permission denied")]
    PermissionDenied,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::InvalidUtf8 { .. } => "INVALID_UTF8",
            SkipReason::PermissionDenied => "PERMISSION_DENIED",
        }
    }
}

/// Result of scanning a single file
///
/// `findings` counts the findings already handed to the reporter, including
/// those emitted before a skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Scanned { findings: usize },
    Skipped { reason: SkipReason, findings: usize },
}

impl FileOutcome {
    pub fn findings(&self) -> usize {
        match self {
            FileOutcome::Scanned { findings } | FileOutcome::Skipped { findings, .. } => *findings,
        }
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            FileOutcome::Scanned { .. } => None,
            FileOutcome::Skipped { reason, .. } => Some(*reason),
        }
    }
}

/// Errors that end a run
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read ignore file {}", path.display())]
    IgnoreRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid pattern in {} on line {line}", path.display())]
    IgnorePattern {
        path: PathBuf,
        line: usize,
        #[source]
        source: ignore::Error,
    },

    #[error("walk failed")]
    Walk(#[from] walkdir::Error),

    #[error("cannot read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output")]
    Output(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_display() {
        let finding = Finding::new("a.py", 3, "TODO: fix this later");
        assert_eq!(finding.to_string(), "a.py:3: TODO: fix this later");
    }

    #[test]
    fn test_finding_display_nested_path() {
        let finding = Finding::new("src/core/lib.rs", 120, "TODO:");
        assert_eq!(finding.to_string(), "src/core/lib.rs:120: TODO:");
    }

    #[test]
    fn test_outcome_findings() {
        assert_eq!(FileOutcome::Scanned { findings: 2 }.findings(), 2);

        let skipped = FileOutcome::Skipped {
            reason: SkipReason::InvalidUtf8 { line: 4 },
            findings: 1,
        };
        assert_eq!(skipped.findings(), 1);
        assert_eq!(skipped.skip_reason(), Some(SkipReason::InvalidUtf8 { line: 4 }));
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(
            SkipReason::InvalidUtf8 { line: 7 }.to_string(),
            "invalid UTF-8 on line 7"
        );
        assert_eq!(SkipReason::PermissionDenied.as_str(), "PERMISSION_DENIED");
    }
}
