//! Value types persisted by tig
//!
//! - **ContentHash**: truncated SHA-1 of file content, used for records, blobs and commit ids
//! - **Record**: file name, content hash and lifecycle status
//! - **Commit**: immutable snapshot of staged records
//!
//! All of them serialize to JSON with `serde`.

pub mod commit;
pub mod content_hash;
pub mod record;

/// Number of hexadecimal characters kept from a SHA-1 digest
pub const CONTENT_HASH_LENGTH: usize = 8;
/// Size of the chunks files are streamed in while hashing
pub const READ_CHUNK_SIZE: usize = 4096;
