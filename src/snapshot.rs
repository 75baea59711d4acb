use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{ExportError, Result};

/// A private copy of the history database, owned solely by the current run.
///
/// Chrome holds the original file open and may be writing to it at any time,
/// so the pipeline never reads the original directly. The copy lives in a
/// uniquely named temporary directory that is removed when the snapshot is
/// dropped, on success and failure alike.
#[derive(Debug)]
pub struct Snapshot {
    // Held for its Drop impl; removing the dir removes the copy with it.
    _dir: TempDir,
    path: PathBuf,
}

impl Snapshot {
    /// Snapshot `source` into a fresh temp dir under `parent`.
    ///
    /// The source is checked for readability before anything is allocated, so
    /// an unavailable source leaves no temporary files behind.
    pub fn create_in(parent: &Path, source: &Path) -> Result<Self> {
        File::open(source).map_err(|e| ExportError::SourceUnavailable {
            path: source.to_path_buf(),
            source: e,
        })?;

        let dir = tempfile::Builder::new()
            .prefix("chrome-history-export-")
            .tempdir_in(parent)?;
        let path = dir.path().join("History");
        fs::copy(source, &path)?;

        Ok(Self { _dir: dir, path })
    }

    /// Path of the copied database inside the temporary directory.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_source_verbatim() {
        let parent = tempfile::tempdir().unwrap();
        let source = parent.path().join("History");
        fs::write(&source, b"not really a database").unwrap();

        let snapshot = Snapshot::create_in(parent.path(), &source).unwrap();
        assert_ne!(snapshot.path(), source);
        assert_eq!(fs::read(snapshot.path()).unwrap(), b"not really a database");
    }

    #[test]
    fn missing_source_creates_nothing() {
        let parent = tempfile::tempdir().unwrap();
        let err = Snapshot::create_in(parent.path(), &parent.path().join("absent")).unwrap_err();
        assert!(matches!(err, ExportError::SourceUnavailable { .. }));
        assert_eq!(fs::read_dir(parent.path()).unwrap().count(), 0);
    }

    #[test]
    fn dropped_snapshot_removes_its_directory() {
        let parent = tempfile::tempdir().unwrap();
        let source = parent.path().join("History");
        fs::write(&source, b"x").unwrap();

        let snapshot = Snapshot::create_in(parent.path(), &source).unwrap();
        let copied = snapshot.path().to_path_buf();
        drop(snapshot);
        assert!(!copied.exists());
        assert!(!copied.parent().unwrap().exists());
    }
}
