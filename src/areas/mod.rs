//! Core repository components
//!
//! - `backup`: content-addressed blob storage and checkout
//! - `commits`: commit snapshots stored as JSON files
//! - `repository`: high-level repository coordination
//! - `stage`: staging of working tree files
//! - `status_store`: the record set of every known file
//! - `workspace`: working directory file system operations

pub mod backup;
pub mod commits;
pub mod repository;
pub mod stage;
pub mod status_store;
pub mod workspace;
