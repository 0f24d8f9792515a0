//! Reading entries for `save` from .env or JSON files.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info, trace};

use crate::core::flatten;
use crate::error::Result;

/// Parse `.env` style contents into entries.
///
/// The first `=` splits key from value, so values may contain `=`. Lines
/// with no `=`, or with `=` as the first character, are ignored. Blank lines
/// and `#` comments are skipped. A repeated key keeps its last value.
pub fn parse(contents: &str) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();

    for (index, line) in contents.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match line.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                trace!(%key, "read entry");
                entries.insert(key.to_string(), value.to_string());
            }
            _ => info!(line = index + 1, "ignoring line without a key"),
        }
    }

    entries
}

/// Read entries from a file.
///
/// With `json`, the whole file must be one JSON object; its top-level
/// fields become the entries.
///
/// # Errors
///
/// Returns an IO error if the file cannot be read, or `ParseError` if
/// `json` is set and the contents are not a JSON object.
pub fn read_entries(path: &Path, json: bool) -> Result<BTreeMap<String, String>> {
    let contents = std::fs::read_to_string(path)?;
    let entries = if json {
        flatten::flatten(&path.display().to_string(), &contents)?
    } else {
        parse(&contents)
    };
    debug!(path = %path.display(), count = entries.len(), "read entries");
    Ok(entries)
}
