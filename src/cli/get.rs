//! Get command - resolve names and paths and print them.

use tracing::debug;

use crate::cli::{output, GetArgs};
use crate::core::render::render;
use crate::core::{Options, Resolver};
use crate::error::Result;

impl GetArgs {
    /// Engine options for these flags.
    pub fn options(&self) -> Options {
        Options {
            export: self.export,
            input_json: self.injson,
            output_json: self.outjson,
            uppercase_keys: self.upper,
            quote_values: self.quote,
            dry_run: false,
            recursive: !self.norecursive,
            prefix_with_raw_path: self.prefixpath,
            prefix_with_normalized_path: self.prefixnormalizedpath,
        }
    }
}

/// Resolve the list and print the rendered result to stdout.
pub fn execute(args: &GetArgs) -> Result<()> {
    let options = args.options();
    options.validate()?;
    debug!(names = %args.names, ?options, "get");

    let store = super::store()?;
    let results = Resolver::new(store.as_ref()).resolve(&args.names, &options)?;
    output::raw(&render(&results, &options)?)
}
