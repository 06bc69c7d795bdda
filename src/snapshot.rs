use std::fs;
use std::path::Path;
use std::path::PathBuf;

use crate::error::SnapshotError;

const PREFIX: &str = "image_";
const SUFFIX: &str = ".png";

/// The directory snapshots are written to.
///
/// The next sequence number is always derived from what is on disk, so captures from earlier runs
/// are never overwritten.
#[derive(Debug, Clone)]
pub struct SnapshotDir {
    root: PathBuf,
}

impl SnapshotDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the directory if it doesn't exist yet
    pub fn ensure(&self) -> Result<&Path, SnapshotError> {
        fs::create_dir_all(&self.root).map_err(|source| SnapshotError::CreateDir {
            path: self.root.clone(),
            source,
        })?;

        Ok(&self.root)
    }

    /// One past the largest sequence number in the directory, or `1` if there is none.
    ///
    /// Only names of the exact form `image_<digits>.png` count, everything else is skipped. Once
    /// `image_18446744073709551615.png` exists there is no next number.
    pub fn next_index(&self) -> Result<u64, SnapshotError> {
        let read_err = |source| SnapshotError::ReadDir {
            path: self.root.clone(),
            source,
        };

        let mut max = 0;

        for entry in fs::read_dir(&self.root).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;

            let Some(n) = entry.file_name().to_str().and_then(parse_index) else {
                tracing::trace!(name = ?entry.file_name(), "not a snapshot");
                continue;
            };

            max = max.max(n);
        }

        max.checked_add(1).ok_or_else(|| SnapshotError::Exhausted {
            path: self.root.clone(),
        })
    }

    /// Create the directory if needed, then return the path of the next snapshot
    pub fn next_path(&self) -> Result<PathBuf, SnapshotError> {
        let root = self.ensure()?;
        let n = self.next_index()?;

        Ok(root.join(file_name(n)))
    }
}

pub fn file_name(n: u64) -> String {
    format!("{PREFIX}{n}{SUFFIX}")
}

/// Parse `image_<digits>.png` into its number
pub fn parse_index(name: &str) -> Option<u64> {
    let digits = name.strip_prefix(PREFIX)?.strip_suffix(SUFFIX)?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    digits.parse().ok()
}
