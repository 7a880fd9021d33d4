//! Plumbing commands
//!
//! - `hash-object`: print the content hash of a file without storing it

pub mod hash_object;
