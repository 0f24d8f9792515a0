//! Backend selection for the parameter store.
//!
//! Picks the AWS or local file backend from the loaded settings.

use tracing::info;

use super::{FileStore, ParameterStore};
use crate::core::config::{Backend, Settings};
use crate::error::Result;

/// Open the store selected by `settings`.
///
/// # Errors
///
/// Returns `ConfigError` if the backend is unknown or not compiled in, or a
/// `StoreError` if the backend cannot be opened.
pub fn open_store(settings: &Settings) -> Result<Box<dyn ParameterStore>> {
    match settings.backend()? {
        Backend::File(path) => {
            info!(path = %path.display(), "Using file store backend");
            Ok(Box::new(FileStore::open(path)?))
        }
        Backend::Aws { region, profile } => open_aws(region.as_deref(), profile.as_deref()),
    }
}

#[cfg(feature = "aws")]
fn open_aws(region: Option<&str>, profile: Option<&str>) -> Result<Box<dyn ParameterStore>> {
    info!("Using AWS SSM backend");
    Ok(Box::new(super::aws::SsmStore::connect(region, profile)?))
}

#[cfg(not(feature = "aws"))]
fn open_aws(_region: Option<&str>, _profile: Option<&str>) -> Result<Box<dyn ParameterStore>> {
    Err(crate::error::ConfigError::BackendUnavailable("aws".to_string()).into())
}
