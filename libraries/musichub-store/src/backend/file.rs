//! File-per-key storage backend.

use musichub_core::error::{HubError, Result};
use musichub_core::storage::StateStorage;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Durable storage keeping one `<key>.json` file per key under a root
/// directory.
///
/// Writes replace the whole file; there is no locking across processes,
/// so concurrent instances are last-writer-wins.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open (and create if needed) a storage directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        // Keys are storage names, not paths.
        if key.is_empty() || key.contains(['/', '\\', '.']) {
            return Err(HubError::invalid_input(format!("bad storage key: {key}")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }

    /// The directory this backend writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl StateStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        debug!(key, bytes = value.len(), "writing state file");
        fs::write(&path, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
