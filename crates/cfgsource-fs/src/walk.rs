//! Blocking traversal and read routines
//!
//! Both the blocking and the background forms of [`DirectorySource`]
//! run these same functions, the background form on tokio's blocking pool.
//!
//! Entry types are taken from `std::fs::metadata`, which follows symlinks:
//! - regular files (or links to them) are listed
//! - directories (or links to them) are descended when recursing
//! - dangling links and entries removed mid-walk are skipped
//! - fifos, sockets and devices are skipped, reading them may block
//!
//! [`DirectorySource`]: crate::DirectorySource

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use bytes::Bytes;
use cfgsource_core::{Error, Key, Result};
use tracing::{trace, warn};

/// Map a `/`-joined key onto a path below `root`
///
/// Empty and `.` segments are ignored, so a leading `/` still lands inside
/// the root. Keys that would climb out of the root are rejected.
pub(crate) fn resolve_key(root: &Path, key: &str) -> io::Result<PathBuf> {
    let mut path = root.to_path_buf();

    for segment in key.split('/') {
        match segment {
            "" | "." => continue,
            ".." => return Err(invalid_key(key)),
            _ => {}
        }

        // Each segment must stay a single plain component on this host
        let mut components = Path::new(segment).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => path.push(segment),
            _ => return Err(invalid_key(key)),
        }
    }

    Ok(path)
}

fn invalid_key(key: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("key '{}' does not name a path below the root", key),
    )
}

/// Read a whole file in one call
pub(crate) fn read_file(path: &Path) -> io::Result<Bytes> {
    fs::read(path).map(Bytes::from)
}

/// List the file keys under `root`, sorted
pub(crate) fn list_files(root: &Path, recurse: bool) -> Result<Vec<Key>> {
    let mut keys = Vec::new();
    let mut pending: Vec<(PathBuf, Option<Key>)> = vec![(root.to_path_buf(), None)];

    while let Some((dir, prefix)) = pending.pop() {
        let entries = fs::read_dir(&dir).map_err(|source| Error::EnumerationFailure {
            path: dir.clone(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| Error::EnumerationFailure {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();

            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                warn!(path = %path.display(), "Skipping entry with a non UTF-8 name");
                continue;
            };

            let key = match &prefix {
                Some(prefix) => format!("{}/{}", prefix, name),
                None => name.to_string(),
            };

            let metadata = match fs::metadata(&path) {
                Ok(metadata) => metadata,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    trace!(key = %key, "Skipping entry with a missing target");
                    continue;
                }
                Err(source) => return Err(Error::EnumerationFailure { path, source }),
            };

            if metadata.is_dir() {
                if recurse {
                    pending.push((path, Some(key)));
                } else {
                    trace!(key = %key, "Skipping subdirectory");
                }
            } else if metadata.is_file() {
                keys.push(key);
            } else {
                trace!(key = %key, "Skipping special file");
            }
        }
    }

    keys.sort_unstable();
    Ok(keys)
}
