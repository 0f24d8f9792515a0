//! Settings management.
//!
//! Handles locating and reading the optional `.parambulk.toml` settings file
//! and applying environment overrides. A missing file means defaults.
//!
//! ```toml
//! [store]
//! backend = "file"          # "aws" or "file"
//! file = "params.json"      # relative to this file
//! region = "eu-central-1"   # aws only
//! profile = "dev"           # aws only
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub store: StoreSettings,
}

/// The `[store]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreSettings {
    /// `"aws"` or `"file"`; inferred when absent.
    pub backend: Option<String>,
    /// Local JSON store file.
    pub file: Option<PathBuf>,
    pub region: Option<String>,
    pub profile: Option<String>,
}

/// The store backend selected by the settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Aws {
        region: Option<String>,
        profile: Option<String>,
    },
    File(PathBuf),
}

impl Settings {
    /// Load settings from the first file found, then apply environment
    /// overrides (`PARAMBULK_BACKEND`, `PARAMBULK_STORE_FILE`).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a settings file exists but is unreadable or
    /// malformed.
    pub fn load() -> Result<Self> {
        let settings = match Self::locate() {
            Some(path) => Self::from_file(&path)?,
            None => {
                debug!("no settings file, using defaults");
                Self::default()
            }
        };
        Ok(settings.with_overrides(
            std::env::var(constants::BACKEND_ENV).ok(),
            std::env::var(constants::STORE_FILE_ENV).ok(),
        ))
    }

    /// Settings file location: `PARAMBULK_CONFIG`, then `.parambulk.toml` in
    /// the working directory, then `<config dir>/parambulk/config.toml`.
    pub fn locate() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(constants::CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        let local = PathBuf::from(constants::CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }
        dirs::config_dir()
            .map(|dir| dir.join(constants::CONFIG_DIR).join("config.toml"))
            .filter(|path| path.exists())
    }

    /// Parse a settings file.
    ///
    /// A relative `store.file` is resolved against the settings file's
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse`.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading settings");
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut settings: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        if let (Some(file), Some(dir)) = (settings.store.file.as_ref(), path.parent()) {
            if file.is_relative() {
                settings.store.file = Some(dir.join(file));
            }
        }
        Ok(settings)
    }

    /// Apply backend and store-file overrides; empty values are ignored.
    pub fn with_overrides(mut self, backend: Option<String>, file: Option<String>) -> Self {
        if let Some(backend) = backend.filter(|b| !b.is_empty()) {
            self.store.backend = Some(backend);
        }
        if let Some(file) = file.filter(|f| !f.is_empty()) {
            self.store.file = Some(PathBuf::from(file));
        }
        self
    }

    /// Resolve the backend to use.
    ///
    /// Without an explicit backend, a configured store file selects the file
    /// backend, otherwise AWS.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownBackend` or `ConfigError::MissingStoreFile`.
    pub fn backend(&self) -> Result<Backend> {
        let store = &self.store;
        let name = match (store.backend.as_deref(), store.file.is_some()) {
            (Some(name), _) => name,
            (None, true) => "file",
            (None, false) => "aws",
        };
        match name {
            "aws" => Ok(Backend::Aws {
                region: store.region.clone(),
                profile: store.profile.clone(),
            }),
            "file" => store
                .file
                .clone()
                .map(Backend::File)
                .ok_or_else(|| ConfigError::MissingStoreFile.into()),
            other => Err(ConfigError::UnknownBackend(other.to_string()).into()),
        }
    }
}
