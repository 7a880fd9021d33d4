//! Diff algorithms and file comparison
//!
//! - `diff_algorithm`: Myers' diff for line-by-line comparison
//! - `hunk`: grouping of edits into hunks with context lines
//! - `unified`: unified diff rendering with `(old)`/`(new)` labels
//! - `file_diff`: compares a working file against its committed blob

pub mod diff_algorithm;
pub mod file_diff;
pub mod hunk;
pub mod unified;
