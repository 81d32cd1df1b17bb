//! Tree scanning backend
//!
//! Uses walkdir for traversal, with the exclusion set and root `.gitignore` as filters

use anyhow::Result;
use std::io::{self, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::core::file_reader::scan_file;
use crate::core::ignore_spec::IgnoreSpec;
use crate::core::model::{Finding, ScanError, SkipReason, DEFAULT_MARKER};
use crate::core::paths::{make_relative, ExclusionSet};
use crate::core::render::Reporter;

/// Everything a run needs, fixed at startup
#[derive(Debug, Clone)]
pub struct ScanConfig {
    root: PathBuf,
    marker: String,
    exclusions: ExclusionSet,
    ignore: IgnoreSpec,
}

impl ScanConfig {
    /// Config with the default marker, `.git` excluded and no ignore rules
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let exclusions = ExclusionSet::new(&root, None);
        Self {
            root,
            marker: DEFAULT_MARKER.to_string(),
            exclusions,
            ignore: IgnoreSpec::default(),
        }
    }

    /// Config for a real run: canonical root, running executable excluded, `.gitignore` loaded
    pub fn load(root: &Path) -> Result<Self, ScanError> {
        let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
        let exclusions = ExclusionSet::for_current_exe(&root);
        let ignore = IgnoreSpec::load(&root)?;

        Ok(Self::new(root)
            .with_exclusions(exclusions)
            .with_ignore(ignore))
    }

    #[cfg(test)]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionSet) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn with_ignore(mut self, ignore: IgnoreSpec) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }
}

/// Counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub dirs_skipped: usize,
    pub paths_excluded: usize,
    pub paths_ignored: usize,
    pub findings: usize,
}

/// Walk the tree under `config.root`, handing every finding to `on_finding`.
///
/// Directories are visited in file-name order so output is stable between runs.
pub fn scan_tree<F>(config: &ScanConfig, mut on_finding: F) -> Result<ScanSummary, ScanError>
where
    F: FnMut(Finding) -> Result<(), ScanError>,
{
    let mut summary = ScanSummary::default();
    let root = config.root();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            // An excluded directory excludes everything below it
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            match make_relative(entry.path(), root) {
                Some(rel) => !config.exclusions.is_excluded(&rel),
                None => true,
            }
        });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) if is_permission_denied(&err) => {
                // walkdir does not descend into a directory it failed to list
                debug!(
                    path = ?err.path(),
                    code = SkipReason::PermissionDenied.as_str(),
                    "Skipped unreadable directory"
                );
                summary.dirs_skipped += 1;
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        let path = entry.path();
        let file_type = entry.file_type();

        if file_type.is_dir() {
            continue;
        }

        if file_type.is_symlink() && !path.is_file() {
            debug!(path = %path.display(), "Skipping symlink that is not a file");
            continue;
        }

        if !file_type.is_file() && !file_type.is_symlink() {
            debug!(path = %path.display(), "Skipping special file");
            continue;
        }

        let rel = match make_relative(path, root) {
            Some(r) if !r.is_empty() => r,
            _ => continue,
        };

        if config.exclusions.is_excluded(&rel) {
            trace!(path = %rel, "Excluded");
            summary.paths_excluded += 1;
            continue;
        }

        if config.ignore.is_ignored(&rel) {
            trace!(path = %rel, "Ignored by .gitignore");
            summary.paths_ignored += 1;
            continue;
        }

        trace!(path = %rel, "Scanning file");
        let outcome = scan_file(path, &rel, config.marker(), &mut on_finding)?;
        summary.findings += outcome.findings();

        match outcome.skip_reason() {
            Some(reason) => {
                debug!(path = %rel, code = reason.as_str(), %reason, "Skipped file");
                summary.files_skipped += 1;
            }
            None => summary.files_scanned += 1,
        }
    }

    Ok(summary)
}

fn is_permission_denied(err: &walkdir::Error) -> bool {
    err.io_error()
        .is_some_and(|e| e.kind() == ErrorKind::PermissionDenied)
}

/// Run a scan and print findings to stdout
pub fn run_scan(config: &ScanConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut reporter = Reporter::new(BufWriter::new(stdout.lock()));

    let result = scan_tree(config, |finding| reporter.report(&finding))
        .and_then(|summary| reporter.finish().map(|_| summary));

    match result {
        Ok(summary) => {
            debug!(
                root = %config.root().display(),
                scanned = summary.files_scanned,
                skipped = summary.files_skipped,
                skipped_dirs = summary.dirs_skipped,
                excluded = summary.paths_excluded,
                ignored = summary.paths_ignored,
                findings = summary.findings,
                "Scan complete"
            );
            Ok(())
        }
        Err(ScanError::Output(e)) if e.kind() == ErrorKind::BrokenPipe => {
            debug!("Output closed early");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
