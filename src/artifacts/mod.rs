//! Version control data structures and algorithms
//!
//! - `checkout`: checkout planning and outcomes
//! - `core`: shared utilities (atomic writes, path names)
//! - `diff`: Myers' diff and unified rendering
//! - `objects`: content hashes, records and commits
//! - `status`: record lifecycle statuses

pub mod checkout;
pub mod core;
pub mod diff;
pub mod objects;
pub mod status;
