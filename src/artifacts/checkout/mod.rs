//! Checkout planning and outcomes
//!
//! - `migration`: the restore/delete plan applied to the working tree

use crate::artifacts::objects::commit::Commit;

pub mod migration;

/// Result of a checkout request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// No commit carries the requested id
    UnknownCommit(String),
    /// The working tree now matches the commit's manifest
    Restored {
        commit: Box<Commit>,
        restored: Vec<String>,
        removed: Vec<String>,
    },
}
