//! Porcelain commands
//!
//! Each command runs one core operation and renders its outcome. The core
//! never prints; formatting lives here.
//!
//! ## Commands
//!
//! - `init`: create the metadata directory
//! - `add`: stage a file
//! - `commit`: snapshot staged files
//! - `log`: list recent commits
//! - `status`: list records grouped by state
//! - `diff`: compare a file with its first committed version
//! - `checkout`: restore the working tree to a commit

pub mod add;
pub mod checkout;
pub mod commit;
pub mod diff;
pub mod init;
pub mod log;
pub mod status;
