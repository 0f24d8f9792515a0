//! Output key derivation.

use crate::core::constants::{NORMALIZED_SEPARATOR, PATH_SEPARATOR};
use crate::core::options::{NamingPolicy, Options};

/// Derive the output key for a raw store name under the active policy.
///
/// Case folding, when enabled, is applied to the whole key afterwards.
pub fn derive(raw_name: &str, options: &Options) -> String {
    let key = match options.naming() {
        NamingPolicy::RawPath => raw_name.to_string(),
        NamingPolicy::NormalizedPath => normalize(raw_name),
        NamingPolicy::Leaf => leaf(raw_name).to_string(),
    };
    options.fold_case(&key)
}

/// Substring after the last separator, or the name itself.
fn leaf(raw_name: &str) -> &str {
    raw_name
        .rsplit_once(PATH_SEPARATOR)
        .map_or(raw_name, |(_, leaf)| leaf)
}

/// Drop the first separator and join the remaining levels with `_`.
fn normalize(raw_name: &str) -> String {
    raw_name
        .replacen(PATH_SEPARATOR, "", 1)
        .replace(PATH_SEPARATOR, NORMALIZED_SEPARATOR)
}
