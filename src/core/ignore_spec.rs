//! Root `.gitignore` loading
//!
//! Only the ignore file at the scan root is consulted. Nested ignore files,
//! `.git/info/exclude` and global excludes are not.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

use crate::core::model::ScanError;

/// Name of the ignore file read from the scan root
pub const IGNORE_FILE: &str = ".gitignore";

/// Gitignore-style rules for one run
#[derive(Debug, Clone)]
pub struct IgnoreSpec {
    gitignore: Gitignore,
}

impl Default for IgnoreSpec {
    fn default() -> Self {
        Self {
            gitignore: Gitignore::empty(),
        }
    }
}

impl IgnoreSpec {
    /// Load `<root>/.gitignore`, or an empty spec when the file is absent
    pub fn load(root: &Path) -> Result<Self, ScanError> {
        let path = root.join(IGNORE_FILE);

        let contents = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No ignore file");
                return Ok(Self::default());
            }
            Err(source) => return Err(ScanError::IgnoreRead { path, source }),
        };

        Self::from_lines(root, &path, contents.lines())
    }

    /// Build a spec from individual gitignore lines
    pub fn from_lines<'a>(
        root: &Path,
        source_path: &Path,
        lines: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, ScanError> {
        let mut builder = GitignoreBuilder::new(root);

        for (idx, line) in lines.into_iter().enumerate() {
            builder
                .add_line(Some(source_path.to_path_buf()), line)
                .map_err(|source| ScanError::IgnorePattern {
                    path: source_path.to_path_buf(),
                    line: idx + 1,
                    source,
                })?;
        }

        let gitignore = builder.build().map_err(|source| ScanError::IgnorePattern {
            path: source_path.to_path_buf(),
            line: 0,
            source,
        })?;

        debug!(
            path = %source_path.display(),
            patterns = gitignore.len(),
            "Loaded ignore file"
        );

        Ok(Self { gitignore })
    }

    /// Number of pattern rules (comments and blank lines excluded)
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.gitignore.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gitignore.is_empty()
    }

    /// True when the file at `rel_path`, or a directory above it, is ignored
    pub fn is_ignored(&self, rel_path: &str) -> bool {
        if self.is_empty() || rel_path.is_empty() {
            return false;
        }

        self.gitignore
            .matched_path_or_any_parents(Path::new(rel_path), false)
            .is_ignore()
    }
}
