//! In-memory parameter store.
//!
//! Keeps parameters in an ordered map and applies the same rules as the
//! remote store: batch limit, one-level or recursive path listing, and
//! paging with numeric continuation tokens.

use std::cell::RefCell;
use std::collections::BTreeMap;

use tracing::trace;

use super::{Page, Parameter, ParameterStore};
use crate::core::constants::{BATCH_SIZE, PAGE_SIZE, PATH_SEPARATOR};
use crate::error::{Result, StoreError};

/// Ordered in-memory store.
#[derive(Debug)]
pub struct MemoryStore {
    parameters: RefCell<BTreeMap<String, String>>,
    page_size: usize,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store with the default page size.
    pub fn new() -> Self {
        Self {
            parameters: RefCell::new(BTreeMap::new()),
            page_size: PAGE_SIZE,
        }
    }

    /// Create a store holding the given name/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        store.parameters.borrow_mut().extend(
            pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into())),
        );
        store
    }

    /// Use a different page size for path listings.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Copy of all stored parameters.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.parameters.borrow().clone()
    }

    /// Value stored under an exact name.
    pub fn value(&self, name: &str) -> Option<String> {
        self.parameters.borrow().get(name).cloned()
    }

    /// Names under `path`, in name order.
    fn children(&self, path: &str, recursive: bool) -> Vec<Parameter> {
        let prefix = format!("{}{}", path.trim_end_matches(PATH_SEPARATOR), PATH_SEPARATOR);
        self.parameters
            .borrow()
            .iter()
            .filter(|(name, _)| match name.strip_prefix(&prefix) {
                Some(rest) => !rest.is_empty() && (recursive || !rest.contains(PATH_SEPARATOR)),
                None => false,
            })
            .map(|(name, value)| Parameter::new(name.clone(), value.clone()))
            .collect()
    }
}

impl ParameterStore for MemoryStore {
    fn get_parameters(&self, names: &[String]) -> Result<Vec<Parameter>> {
        if names.len() > BATCH_SIZE {
            return Err(StoreError::BatchTooLarge(names.len(), BATCH_SIZE).into());
        }
        let parameters = self.parameters.borrow();
        let found = names
            .iter()
            .filter_map(|name| {
                parameters
                    .get(name)
                    .map(|value| Parameter::new(name.clone(), value.clone()))
            })
            .collect::<Vec<_>>();
        trace!(requested = names.len(), found = found.len(), "memory batch get");
        Ok(found)
    }

    fn get_parameters_by_path(
        &self,
        path: &str,
        recursive: bool,
        next_token: Option<&str>,
    ) -> Result<Page> {
        let offset = match next_token {
            Some(token) => token
                .parse::<usize>()
                .map_err(|_| StoreError::InvalidToken(token.to_string()))?,
            None => 0,
        };
        let children = self.children(path, recursive);
        let end = offset.saturating_add(self.page_size);
        let next_token = (end < children.len()).then(|| end.to_string());
        let parameters = children
            .into_iter()
            .skip(offset)
            .take(self.page_size)
            .collect::<Vec<_>>();

        trace!(%path, offset, count = parameters.len(), "memory path page");
        Ok(Page {
            parameters,
            next_token,
        })
    }

    fn get_parameter(&self, name: &str) -> Result<Parameter> {
        self.value(name)
            .map(|value| Parameter::new(name, value))
            .ok_or_else(|| StoreError::ParameterNotFound(name.to_string()).into())
    }

    fn put_parameter(&self, name: &str, value: &str) -> Result<()> {
        self.parameters
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
