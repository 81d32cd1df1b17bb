//! Line scanning for a single file
//!
//! Handles:
//! - Universal newlines (`\n`, `\r\n`, lone `\r`)
//! - Non-UTF-8 content (file abandoned at the first bad line)
//! - Permission errors (file skipped)

use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::core::model::{FileOutcome, Finding, ScanError, SkipReason};

/// Scan one file for `marker`, handing each finding to `on_finding` as soon as it is found.
///
/// Findings emitted before a skip are not retracted.
pub fn scan_file<F>(
    path: &Path,
    rel_path: &str,
    marker: &str,
    mut on_finding: F,
) -> Result<FileOutcome, ScanError>
where
    F: FnMut(Finding) -> Result<(), ScanError>,
{
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => return io_outcome(path, e, 0),
    };

    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let mut line_no = 0;
    let mut findings = 0;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => return io_outcome(path, e, findings),
        }

        let chunk = match std::str::from_utf8(&buf) {
            Ok(s) => s,
            Err(_) => {
                return Ok(FileOutcome::Skipped {
                    reason: SkipReason::InvalidUtf8 { line: line_no + 1 },
                    findings,
                });
            }
        };

        for line in split_lines(chunk) {
            line_no += 1;
            if let Some(text) = match_marker(line, marker) {
                on_finding(Finding::new(rel_path, line_no, text))?;
                findings += 1;
            }
        }
    }

    Ok(FileOutcome::Scanned { findings })
}

/// Text from the first occurrence of `marker` to end of line, whitespace stripped
pub fn match_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.find(marker).map(|idx| line[idx..].trim_matches(is_strippable))
}

/// Unicode whitespace plus the ASCII file/group/record/unit separators
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Split a chunk ending in at most one `\n` into lines, honouring lone `\r` breaks
fn split_lines(chunk: &str) -> std::str::Split<'_, char> {
    let body = chunk.strip_suffix('\n').unwrap_or(chunk);
    let body = body.strip_suffix('\r').unwrap_or(body);
    body.split('\r')
}

/// Map an I/O error to a skip, or to a fatal error
fn io_outcome(path: &Path, err: io::Error, findings: usize) -> Result<FileOutcome, ScanError> {
    match err.kind() {
        ErrorKind::PermissionDenied => Ok(FileOutcome::Skipped {
            reason: SkipReason::PermissionDenied,
            findings,
        }),
        _ => Err(ScanError::Read {
            path: path.to_path_buf(),
            source: err,
        }),
    }
}
