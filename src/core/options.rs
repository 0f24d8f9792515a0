//! Options controlling resolution, naming and rendering.

use crate::error::{FormatError, Result};

/// How the output key is derived from a raw store name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamingPolicy {
    /// Last path segment (`/app/db/URL` -> `URL`).
    #[default]
    Leaf,
    /// Full raw store name (`/app/db/URL`).
    RawPath,
    /// First separator removed, the rest replaced by `_` (`app_db_URL`).
    NormalizedPath,
}

/// Per-invocation options.
///
/// Flags are independent except that `export` and `output_json` cannot be
/// rendered together, and `prefix_with_raw_path` takes precedence over
/// `prefix_with_normalized_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Prefix rendered lines with `export `.
    pub export: bool,
    /// Flatten every fetched value as a JSON object.
    pub input_json: bool,
    /// Render as a JSON object instead of lines.
    pub output_json: bool,
    pub uppercase_keys: bool,
    pub quote_values: bool,
    /// Writer only: print the would-be result instead of writing.
    pub dry_run: bool,
    /// Path listings descend into sub-paths.
    pub recursive: bool,
    pub prefix_with_raw_path: bool,
    pub prefix_with_normalized_path: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            export: false,
            input_json: false,
            output_json: false,
            uppercase_keys: false,
            quote_values: false,
            dry_run: false,
            recursive: true,
            prefix_with_raw_path: false,
            prefix_with_normalized_path: false,
        }
    }
}

impl Options {
    /// Reject option combinations that cannot be rendered.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::ExportWithJson` if both `export` and
    /// `output_json` are set.
    pub fn validate(&self) -> Result<()> {
        if self.export && self.output_json {
            return Err(FormatError::ExportWithJson.into());
        }
        Ok(())
    }

    /// The effective naming policy; raw path wins when both prefixes are set.
    pub fn naming(&self) -> NamingPolicy {
        if self.prefix_with_raw_path {
            NamingPolicy::RawPath
        } else if self.prefix_with_normalized_path {
            NamingPolicy::NormalizedPath
        } else {
            NamingPolicy::Leaf
        }
    }

    /// Apply case folding if enabled.
    pub fn fold_case(&self, key: &str) -> String {
        if self.uppercase_keys {
            key.to_uppercase()
        } else {
            key.to_string()
        }
    }
}
