//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Finding and per-file outcome model
//! - Path normalization and the exclusion set
//! - `.gitignore` loading
//! - Line scanning of a single file
//! - Rendering of findings
//! - Logging setup

pub mod file_reader;
pub mod ignore_spec;
pub mod logging;
pub mod model;
pub mod paths;
pub mod render;
