//! Bulk writes back to the store.

use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::core::constants::PATH_SEPARATOR;
use crate::core::gateway::Gateway;
use crate::core::render;
use crate::core::store::{Parameter, ParameterStore};
use crate::core::token::{self, TokenKind};
use crate::error::{Error, FormatError, Result};

/// Writes a mapping of entries, one put per key, in key order.
pub struct Writer<'s> {
    gateway: Gateway<'s>,
}

impl<'s> Writer<'s> {
    pub fn new(store: &'s dyn ParameterStore) -> Self {
        Self {
            gateway: Gateway::new(store),
        }
    }

    /// Save `entries`, optionally under `base_path`, and return the
    /// parameters written in write order.
    ///
    /// Writes stop at the first failure; earlier writes are not rolled back.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::NotAPath` if `base_path` is set but not a path.
    /// A store failure after at least one successful write is returned as
    /// `Error::PartialSave` carrying the names already written; a failure on
    /// the first write is returned unchanged.
    pub fn save(
        &self,
        entries: &BTreeMap<String, String>,
        base_path: &str,
    ) -> Result<Vec<Parameter>> {
        let prefix = name_prefix(base_path)?;

        let mut written: Vec<Parameter> = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let name = format!("{}{}", prefix, key);
            if let Err(e) = self.gateway.put(&name, value) {
                warn!(
                    %name,
                    written = written.len(),
                    "save aborted, earlier writes are kept"
                );
                if written.is_empty() {
                    return Err(e);
                }
                return Err(Error::PartialSave {
                    written: written.into_iter().map(|p| p.name).collect(),
                    source: Box::new(e),
                });
            }
            info!(%name, "saved");
            written.push(Parameter::new(name, value.clone()));
        }

        Ok(written)
    }
}

/// The `KEY=VALUE` listing a save of `entries` under `base_path` would
/// write. Touches no store.
///
/// # Errors
///
/// Returns `FormatError::NotAPath` if `base_path` is set but not a path.
pub fn dry_run_listing(entries: &BTreeMap<String, String>, base_path: &str) -> Result<String> {
    let prefix = name_prefix(base_path)?;
    info!(count = entries.len(), "dry run, not saving");
    Ok(render::render_lines(entries, &prefix, false))
}

/// Prefix for written names: empty, or the base path with one trailing
/// separator.
fn name_prefix(base_path: &str) -> Result<String> {
    if base_path.is_empty() {
        return Ok(String::new());
    }
    if token::classify(base_path)? != TokenKind::Path {
        return Err(FormatError::NotAPath(base_path.to_string()).into());
    }
    Ok(format!(
        "{}{}",
        base_path.trim_end_matches(PATH_SEPARATOR),
        PATH_SEPARATOR
    ))
}
