//! Local JSON file store.
//!
//! A flat JSON object of name/value pairs (`{"/app/DB_URL": "..."}`) loaded
//! into a [`MemoryStore`] and written back after every put. Useful offline
//! and for end-to-end tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{MemoryStore, Page, Parameter, ParameterStore};
use crate::error::{Result, StoreError};

/// JSON-file-backed store.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl FileStore {
    /// Open a store file. A missing file is an empty store, created on the
    /// first write.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ReadFile` if the file exists but cannot be read
    /// or is not a JSON object of strings.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let parameters: BTreeMap<String, String> = if path.exists() {
            let read_error = |reason: String| StoreError::ReadFile {
                path: path.display().to_string(),
                reason,
            };
            let contents =
                std::fs::read_to_string(&path).map_err(|e| read_error(e.to_string()))?;
            serde_json::from_str(&contents).map_err(|e| read_error(e.to_string()))?
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), parameters = parameters.len(), "opened store file");
        Ok(Self {
            path,
            inner: MemoryStore::from_pairs(parameters),
        })
    }

    fn persist(&self) -> Result<()> {
        let write_error = |reason: String| StoreError::WriteFile {
            path: self.path.display().to_string(),
            reason,
        };
        let mut contents = serde_json::to_string_pretty(&self.inner.snapshot())
            .map_err(|e| write_error(e.to_string()))?;
        contents.push('\n');
        std::fs::write(&self.path, contents).map_err(|e| write_error(e.to_string()))?;
        Ok(())
    }
}

impl ParameterStore for FileStore {
    fn get_parameters(&self, names: &[String]) -> Result<Vec<Parameter>> {
        self.inner.get_parameters(names)
    }

    fn get_parameters_by_path(
        &self,
        path: &str,
        recursive: bool,
        next_token: Option<&str>,
    ) -> Result<Page> {
        self.inner.get_parameters_by_path(path, recursive, next_token)
    }

    fn get_parameter(&self, name: &str) -> Result<Parameter> {
        self.inner.get_parameter(name)
    }

    fn put_parameter(&self, name: &str, value: &str) -> Result<()> {
        self.inner.put_parameter(name, value)?;
        self.persist()
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
