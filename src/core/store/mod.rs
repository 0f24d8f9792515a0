//! Parameter store backends.
//!
//! Abstracts the remote hierarchical key/value store behind the
//! [`ParameterStore`] trait, with implementations for different backends.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `ParameterStore` trait
//! 2. Add the implementation in a new file, feature-gated if it pulls in an SDK
//! 3. Wire it into [`open_store`]
//!
//! Every read returns decrypted values. Implementations do no chunking,
//! pagination looping or fallback of their own; that is the job of
//! [`crate::core::gateway::Gateway`].

use crate::error::Result;

mod backend;
mod file;
mod memory;

#[cfg(feature = "aws")]
pub mod aws;

pub use backend::open_store;
pub use file::FileStore;
pub use memory::MemoryStore;

/// A parameter as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Fully qualified store name (`/app/db/URL` or `URL`).
    pub name: String,
    /// Decrypted value.
    pub value: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One page of a path listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub parameters: Vec<Parameter>,
    /// Continuation token; `None` once the listing is exhausted.
    pub next_token: Option<String>,
}

/// Remote store operations.
pub trait ParameterStore {
    /// Fetch up to [`BATCH_SIZE`](crate::core::constants::BATCH_SIZE) names
    /// in one call.
    ///
    /// Names that do not exist are silently absent from the result.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the request fails.
    fn get_parameters(&self, names: &[String]) -> Result<Vec<Parameter>>;

    /// Fetch one page of the parameters under `path`.
    ///
    /// # Arguments
    ///
    /// * `path` - Hierarchy prefix
    /// * `recursive` - Descend into sub-paths
    /// * `next_token` - Continuation token from the previous page
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the request fails.
    fn get_parameters_by_path(
        &self,
        path: &str,
        recursive: bool,
        next_token: Option<&str>,
    ) -> Result<Page>;

    /// Fetch a single parameter by its exact name.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ParameterNotFound` if it does not exist, or
    /// another `StoreError` if the request fails.
    fn get_parameter(&self, name: &str) -> Result<Parameter>;

    /// Write a parameter, overwriting any existing value, stored encrypted.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    fn put_parameter(&self, name: &str, value: &str) -> Result<()>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}
