//! Core utilities and shared helpers
//!
//! Every persisted file (status store, commits, blobs) is replaced atomically:
//! the new content goes to a temporary file in the target directory which is
//! then renamed over the destination.

use anyhow::Context;
use serde::Serialize;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

/// Write `data` to `path` through a temporary sibling file and an atomic rename
///
/// An existing destination keeps its permissions. A new one gets the mode a
/// plain `File::create` would give it under the current umask.
pub fn write_atomic(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    let dir = path
        .parent()
        .with_context(|| format!("Invalid destination path {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Unable to create directory {}", dir.display()))?;

    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let mut temp_file = builder
        .tempfile_in(dir)
        .with_context(|| format!("Unable to create temporary file in {}", dir.display()))?;

    if let Ok(metadata) = std::fs::metadata(path) {
        temp_file
            .as_file()
            .set_permissions(metadata.permissions())
            .with_context(|| format!("Unable to copy permissions of {}", path.display()))?;
    }

    temp_file
        .write_all(data)
        .with_context(|| format!("Unable to write temporary file for {}", path.display()))?;
    temp_file
        .persist(path)
        .with_context(|| format!("Unable to rename temporary file to {}", path.display()))?;

    Ok(())
}

/// Serialize `value` as pretty JSON and write it atomically
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> anyhow::Result<()> {
    let content = serde_json::to_vec_pretty(value)
        .with_context(|| format!("Unable to serialize {}", path.display()))?;
    write_atomic(path, &content)
}

/// Collapse `.` and `..` components without touching the filesystem
///
/// Leading `..` of a relative path are kept; `..` above a root are dropped.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}

/// Render a relative path with `/` separators, the form records store
pub fn to_record_name(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
