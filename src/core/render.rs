//! Reporter
//!
//! Writes findings as `path:line: text`, one per line, in the order received.

use std::io::Write;

use crate::core::model::{Finding, ScanError};

/// Streams findings to a writer
pub struct Reporter<W: Write> {
    writer: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write one finding line
    pub fn report(&mut self, finding: &Finding) -> Result<(), ScanError> {
        writeln!(self.writer, "{}", finding).map_err(ScanError::Output)
    }

    /// Flush and hand back the writer
    pub fn finish(mut self) -> Result<W, ScanError> {
        self.writer.flush().map_err(ScanError::Output)?;
        Ok(self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_line_format() {
        let mut reporter = Reporter::new(Vec::new());
        reporter
            .report(&Finding::new("a.py", 3, "TODO: fix this later"))
            .unwrap();
        let out = reporter.finish().unwrap();
        assert_eq!(out, b"a.py:3: TODO: fix this later\n");
    }

    #[test]
    fn test_reporter_preserves_order_and_duplicates() {
        let mut reporter = Reporter::new(Vec::new());
        reporter.report(&Finding::new("b.rs", 9, "TODO: b")).unwrap();
        reporter.report(&Finding::new("a.rs", 1, "TODO: a")).unwrap();
        reporter.report(&Finding::new("a.rs", 1, "TODO: a")).unwrap();

        let out = String::from_utf8(reporter.finish().unwrap()).unwrap();
        assert_eq!(out, "b.rs:9: TODO: b\na.rs:1: TODO: a\na.rs:1: TODO: a\n");
    }

    #[test]
    fn test_reporter_empty() {
        let reporter = Reporter::new(Vec::new());
        assert!(reporter.finish().unwrap().is_empty());
    }
}
