//! Single-file registry persistence.

use crate::adapters::codec;
use crate::domain::entry::SerializedRegistryEntry;
use crate::domain::errors::PersistenceError;
use crate::ports::outbound::RegistryPersistence;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Registry persistence backed by a single binary file.
///
/// Writes go to a sibling temp file which is synced and then renamed over the
/// target, so a failed write never truncates the last good registry.
pub struct FileRegistryPersistence {
    path: PathBuf,
}

impl FileRegistryPersistence {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn corrupt_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".corrupt");
        PathBuf::from(name)
    }
}

impl RegistryPersistence for FileRegistryPersistence {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn read(&self) -> Result<Vec<SerializedRegistryEntry>, PersistenceError> {
        let bytes = std::fs::read(&self.path).map_err(|e| PersistenceError::io(&self.path, e))?;
        codec::decode(&bytes)
    }

    fn write(&self, entries: &[SerializedRegistryEntry]) -> Result<(), PersistenceError> {
        let bytes = codec::encode(entries)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| PersistenceError::io(parent, e))?;
            }
        }

        let temp_path = self.temp_path();
        let result = (|| {
            let mut file = std::fs::File::create(&temp_path)?;
            file.write_all(&bytes)?;
            file.sync_all()?;
            std::fs::rename(&temp_path, &self.path)
        })();

        if let Err(e) = result {
            let _ = std::fs::remove_file(&temp_path);
            return Err(PersistenceError::io(&self.path, e));
        }
        Ok(())
    }

    fn quarantine(&self) -> Result<Option<PathBuf>, PersistenceError> {
        if !self.exists() {
            return Ok(None);
        }
        let target = self.corrupt_path();
        std::fs::copy(&self.path, &target).map_err(|e| PersistenceError::io(&target, e))?;
        Ok(Some(target))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
