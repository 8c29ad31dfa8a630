//! Snapshot file storage with XDG path support.
//!
//! The CLI works from a local JSON snapshot of the grid's access-management
//! data, stored by default at `~/.cache/gconsole/snapshot.json`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::debug;

use crate::Snapshot;

/// Default snapshot filename.
const SNAPSHOT_FILENAME: &str = "snapshot.json";

/// Application name (for XDG paths).
const APPLICATION: &str = "gconsole";

/// Errors that can occur while reading or writing a snapshot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to determine XDG cache directory.
    #[error("failed to determine cache directory: no valid home directory found")]
    NoCacheDir,

    #[error("failed to read snapshot file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write snapshot file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create snapshot directory '{path}': {source}")]
    CreateDirError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for snapshot store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Reads and writes a [`Snapshot`] on disk.
///
/// # Example
///
/// ```no_run
/// use grid_console_filter::{Snapshot, SnapshotStore};
///
/// let store = SnapshotStore::new()?;
/// let snapshot = store.load_or_default()?;
/// store.save(&snapshot)?;
/// # Ok::<(), grid_console_filter::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Creates a store at the default XDG cache path.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoCacheDir` if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: Self::default_path()?,
        })
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default snapshot path.
    ///
    /// On Unix: `~/.cache/gconsole/snapshot.json`
    /// On macOS: `~/Library/Caches/gconsole/snapshot.json`
    pub fn default_path() -> Result<PathBuf> {
        let project_dirs =
            ProjectDirs::from("", "", APPLICATION).ok_or(StoreError::NoCacheDir)?;
        Ok(project_dirs.cache_dir().join(SNAPSHOT_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the snapshot.
    ///
    /// # Errors
    ///
    /// - `StoreError::ReadError` if the file cannot be read (including when it
    ///   does not exist; see [`load_or_default`](Self::load_or_default)).
    /// - `StoreError::Json` if the file is not a valid snapshot.
    pub fn load(&self) -> Result<Snapshot> {
        let contents = fs::read_to_string(&self.path).map_err(|e| StoreError::ReadError {
            path: self.path.clone(),
            source: e,
        })?;
        let snapshot: Snapshot = serde_json::from_str(&contents)?;
        debug!(
            path = %self.path.display(),
            roles = snapshot.roles.len(),
            details = snapshot.role_details.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Loads the snapshot, returning an empty one if the file doesn't exist.
    pub fn load_or_default(&self) -> Result<Snapshot> {
        match self.load() {
            Ok(snapshot) => Ok(snapshot),
            Err(StoreError::ReadError { ref source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                debug!(path = %self.path.display(), "no snapshot file, using an empty one");
                Ok(Snapshot::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Saves the snapshot atomically (temp file + rename), creating the
    /// parent directory if needed.
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::CreateDirError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(snapshot)?;

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, &json).map_err(|e| StoreError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;
        fs::rename(&temp_path, &self.path).map_err(|e| StoreError::WriteError {
            path: self.path.clone(),
            source: e,
        })?;

        Ok(())
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
