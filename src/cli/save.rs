//! Save command - write a .env or JSON file to the store.

use tracing::debug;

use crate::cli::{output, SaveArgs};
use crate::core::constants::DRY_RUN_HEADER;
use crate::core::writer::dry_run_listing;
use crate::core::{env, Options, Writer};
use crate::error::Result;

impl SaveArgs {
    /// Engine options for these flags.
    pub fn options(&self) -> Options {
        Options {
            input_json: self.injson,
            dry_run: self.dry,
            ..Options::default()
        }
    }
}

/// Read the file and save every entry, or print them with `--dry`.
pub fn execute(args: &SaveArgs) -> Result<()> {
    let options = args.options();
    let base_path = args.basepath.as_deref().unwrap_or_default();
    debug!(file = %args.file.display(), %base_path, ?options, "save");

    let entries = env::read_entries(&args.file, options.input_json)?;

    if options.dry_run {
        let listing = dry_run_listing(&entries, base_path)?;
        return output::raw(&format!("{}\n{}", DRY_RUN_HEADER, listing));
    }

    let store = super::store()?;
    let written = Writer::new(store.as_ref()).save(&entries, base_path)?;
    for parameter in &written {
        println!("{}={}", parameter.name, parameter.value);
    }
    output::success(&format!("saved {} parameters", written.len()));
    Ok(())
}
