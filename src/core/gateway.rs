//! Store gateway.
//!
//! Wraps a [`ParameterStore`] and owns the fetch policy: batch chunking,
//! pagination, and the path-then-single-get fallback.

use tracing::{debug, warn};

use crate::core::constants::BATCH_SIZE;
use crate::core::store::{Parameter, ParameterStore};
use crate::error::{Error, Result};

/// States of a path fetch.
///
/// `Paged` walks the listing; an empty page moves to `SingleGet`, which
/// treats the path as a literal name. A failed single get ends in
/// `NotFound`.
#[derive(Debug)]
enum PathFetch {
    Paged(Option<String>),
    SingleGet,
    Done,
}

/// Uniform access to the store for the resolver and writer.
pub struct Gateway<'s> {
    store: &'s dyn ParameterStore,
}

impl<'s> Gateway<'s> {
    pub fn new(store: &'s dyn ParameterStore) -> Self {
        Self { store }
    }

    /// Fetch names in chunks of at most [`BATCH_SIZE`], in input order.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if any chunk returns no parameters at all,
    /// or the first store error.
    pub fn get_by_names(&self, names: &[String]) -> Result<Vec<Parameter>> {
        let mut found = Vec::with_capacity(names.len());

        for chunk in names.chunks(BATCH_SIZE) {
            debug!(names = ?chunk, "retrieving names");
            let parameters = self.store.get_parameters(chunk)?;

            if parameters.is_empty() {
                return Err(Error::NotFound(chunk.join(", ")));
            }
            if parameters.len() < chunk.len() {
                let missing = chunk
                    .iter()
                    .filter(|name| !parameters.iter().any(|p| &p.name == *name))
                    .map(String::as_str)
                    .collect::<Vec<_>>();
                if !missing.is_empty() {
                    warn!(missing = ?missing, "some names were not found");
                }
            }

            found.extend(parameters);
        }

        Ok(found)
    }

    /// Fetch everything under `path`, following continuation tokens.
    ///
    /// If a page comes back empty, `path` is looked up as a literal name.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the fallback lookup fails, or the first
    /// store error from the listing.
    pub fn get_by_path(&self, path: &str, recursive: bool) -> Result<Vec<Parameter>> {
        let mut found = Vec::new();
        let mut state = PathFetch::Paged(None);

        loop {
            state = match state {
                PathFetch::Paged(token) => {
                    let page = self
                        .store
                        .get_parameters_by_path(path, recursive, token.as_deref())?;
                    debug!(%path, count = page.parameters.len(), "retrieved page");

                    if page.parameters.is_empty() {
                        PathFetch::SingleGet
                    } else {
                        found.extend(page.parameters);
                        match page.next_token {
                            Some(next) => PathFetch::Paged(Some(next)),
                            None => PathFetch::Done,
                        }
                    }
                }
                PathFetch::SingleGet => match self.store.get_parameter(path) {
                    Ok(parameter) => {
                        debug!(%path, "path resolved as a single name");
                        found.push(parameter);
                        PathFetch::Done
                    }
                    Err(e) => {
                        debug!(%path, error = %e, "single get fallback failed");
                        return Err(Error::NotFound(path.to_string()));
                    }
                },
                PathFetch::Done => return Ok(found),
            };
        }
    }

    /// Write one parameter (overwrite, encrypted).
    ///
    /// # Errors
    ///
    /// Returns the store error unchanged.
    pub fn put(&self, name: &str, value: &str) -> Result<()> {
        debug!(%name, "putting parameter");
        self.store.put_parameter(name, value)
    }

    /// Name of the underlying backend.
    pub fn backend(&self) -> &'static str {
        self.store.name()
    }
}
