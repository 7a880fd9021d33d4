//! Record lifecycle states
//!
//! A tracked file is always in exactly one of four states. Transitions are
//! driven by the status store (`sync`), staging and committing.

pub mod record_status;
