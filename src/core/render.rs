//! Output rendering.
//!
//! Serializes a result set as sorted `KEY=VALUE` lines or as an indented
//! JSON object of strings.

use crate::core::options::Options;
use crate::core::ResultSet;
use crate::error::Result;

/// Prefix for shell-exportable lines.
const EXPORT_PREFIX: &str = "export ";

/// Render a result set according to `options`.
///
/// # Errors
///
/// Returns `FormatError::ExportWithJson` if both `export` and `output_json`
/// are set.
pub fn render(results: &ResultSet, options: &Options) -> Result<String> {
    options.validate()?;

    if options.output_json {
        return Ok(serde_json::to_string_pretty(results)?);
    }

    let prefix = if options.export { EXPORT_PREFIX } else { "" };
    Ok(render_lines(results, prefix, options.quote_values))
}

/// One `<prefix><key>=<value>` line per entry, in key order.
pub fn render_lines(results: &ResultSet, prefix: &str, quote: bool) -> String {
    let mut output = String::new();
    for (key, value) in results {
        if quote {
            output.push_str(&format!("{}{}=\"{}\"\n", prefix, key, value));
        } else {
            output.push_str(&format!("{}{}={}\n", prefix, key, value));
        }
    }
    output
}
