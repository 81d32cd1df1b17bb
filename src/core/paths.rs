//! Path normalization utilities
//!
//! Ensures all paths are normalized to use '/' as separator and are relative to root.

use std::path::Path;

/// Version-control metadata directory, never scanned
pub const VCS_DIR: &str = ".git";

/// Join the components of a relative path with '/'
///
/// Only real separators are rewritten; a `\` inside a Unix file name is kept.
pub fn normalize_path(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        if !out.is_empty() {
            out.push('/');
        }
        out.push_str(&component.as_os_str().to_string_lossy());
    }
    out
}

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<String> {
    path.strip_prefix(root).ok().map(normalize_path)
}

/// Relative paths that must never be scanned, along with everything below them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    entries: Vec<String>,
}

impl ExclusionSet {
    /// Exclude the VCS directory and, when it lives under `root`, the given executable
    pub fn new(root: &Path, self_path: Option<&Path>) -> Self {
        let mut set = Self::default().with_entry(VCS_DIR);

        if let Some(rel) = self_path.and_then(|p| make_relative(p, root)) {
            if !rel.is_empty() {
                set = set.with_entry(rel);
            }
        }

        set
    }

    /// Build the set for the running executable
    pub fn for_current_exe(root: &Path) -> Self {
        let exe = std::env::current_exe()
            .ok()
            .and_then(|p| p.canonicalize().ok());
        Self::new(root, exe.as_deref())
    }

    pub fn with_entry(mut self, entry: impl Into<String>) -> Self {
        let entry = entry.into();
        if !self.entries.contains(&entry) {
            self.entries.push(entry);
        }
        self
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// True when `rel_path` is an entry or lies under one
    pub fn is_excluded(&self, rel_path: &str) -> bool {
        self.entries.iter().any(|entry| {
            rel_path
                .strip_prefix(entry.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
    }
}
