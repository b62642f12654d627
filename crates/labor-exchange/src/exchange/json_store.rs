use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use super::repository::{ExchangeRepository, ExchangeStore, RepositoryError};

/// Flat-file JSON store. A missing file reads as an empty exchange; a file
/// that exists but cannot be decoded is surfaced as [`RepositoryError::Malformed`]
/// rather than silently reset, so operator data is never clobbered by a typo.
pub struct JsonFileRepository {
    path: PathBuf,
    // Serializes writers so two saves cannot interleave on the same file.
    write_lock: Mutex<()>,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExchangeRepository for JsonFileRepository {
    fn load(&self) -> Result<ExchangeStore, RepositoryError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|err| RepositoryError::Malformed(err.to_string())),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store file absent, starting empty");
                Ok(ExchangeStore::default())
            }
            Err(err) => Err(RepositoryError::Unavailable(err.to_string())),
        }
    }

    fn save(&self, store: &ExchangeStore) -> Result<(), RepositoryError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| RepositoryError::Unavailable("writer lock poisoned".to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|err| RepositoryError::Unavailable(err.to_string()))?;
            }
        }

        let payload = serde_json::to_string_pretty(store)
            .map_err(|err| RepositoryError::Malformed(err.to_string()))?;
        fs::write(&self.path, payload).map_err(|err| RepositoryError::Unavailable(err.to_string()))
    }
}
