//! Backends module - File tree operations
//!
//! Provides:
//! - scan: Tree walk with walkdir, exclusion and ignore filtering

pub mod scan;
