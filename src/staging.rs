use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{Error, Result};

const STAGING_DIR_NAME: &str = "filesharing_dir";

/// Staging area for files shared out of the webview.
///
/// Files are written under `filesharing_dir` below the injected root (the
/// app cache directory in production, a temporary directory in tests) and
/// stay there after dispatch so the share target can read them through the
/// granted reference. The directory is purged again at the start of the next
/// staging pass, so it holds at most the files of the most recent request.
pub struct StagingArea {
    root: PathBuf,
}

impl StagingArea {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the staging directory itself.
    pub fn dir(&self) -> PathBuf {
        self.root.join(STAGING_DIR_NAME)
    }

    /// Creates the staging directory, or deletes the files left in it by the
    /// previous call (non-recursive).
    ///
    /// Overlapping calls share this directory without locking; a concurrent
    /// purge can drop a file another call just staged.
    pub fn prepare(&self) -> Result<()> {
        let dir = self.dir();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| {
                log::warn!("could not create staging dir {}: {e}", dir.display());
                staging_error()
            })?;
            return Ok(());
        }
        let entries = fs::read_dir(&dir).map_err(|_| staging_error())?;
        for entry in entries {
            let entry = entry.map_err(|_| staging_error())?;
            if entry.file_type().map_err(|_| staging_error())?.is_file() {
                fs::remove_file(entry.path()).map_err(|_| staging_error())?;
            }
        }
        Ok(())
    }

    /// Writes the decoded payload into the staging directory, truncating any
    /// existing file of the same name, and returns the staged path.
    ///
    /// The write is not atomic; a failed write may leave a truncated file
    /// behind.
    pub fn write(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.dir().join(file_name);
        fs::write(&path, bytes).map_err(|e| {
            log::warn!("staging write to {} failed: {e}", path.display());
            staging_error()
        })?;
        Ok(path)
    }

    /// Best-effort removal of the staging directory and everything in it.
    /// Used by the `cleanup` command and on application exit.
    pub fn remove_all(&self) {
        let dir = self.dir();
        if let Err(e) = fs::remove_dir_all(&dir) {
            if e.kind() != ErrorKind::NotFound {
                log::warn!("failed to remove staging dir {}: {e}", dir.display());
            }
        }
    }
}

fn staging_error() -> Error {
    Error::Io("Failed to create file in cache directory".to_string())
}
