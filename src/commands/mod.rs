//! Command implementations
//!
//! - `plumbing`: low-level helpers exposed for scripting (hash-object)
//! - `porcelain`: user-facing commands that print outcomes to the repository writer

pub mod plumbing;
pub mod porcelain;
