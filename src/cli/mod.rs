//! Command-line interface.

pub mod compare;
pub mod completions;
pub mod get;
pub mod output;
pub mod save;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::config::Settings;
use crate::core::store::{open_store, ParameterStore};
use crate::error::Result;

/// Parambulk - bulk get, save and compare parameter store entries.
#[derive(Parser)]
#[command(
    name = "parambulk",
    about = "Bulk get, save and compare entries in a hierarchical parameter store",
    version
)]
pub struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Get names and paths as KEY=VALUE lines or JSON
    ///
    /// Accepts a comma separated list of names and paths, e.g.
    /// `name1,/path1,/path2/subpath`. Paths return every parameter below
    /// them. Output keys are unique: if two parameters map to the same key,
    /// the last one in the list wins.
    Get(GetArgs),

    /// Save each KEY=VALUE entry of a file as a parameter
    ///
    /// With a base path, entries are saved as `/basepath/KEY`.
    Save(SaveArgs),

    /// Compare two name/path lists side by side
    ///
    /// Rows pair the sorted keys of both sides by position.
    Compare(CompareArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for `get`.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Comma separated names and paths
    pub names: String,
    /// Prefix output with export to eval it in a shell
    #[arg(long)]
    pub export: bool,
    /// Parse values as JSON objects and output each field
    #[arg(long)]
    pub injson: bool,
    /// Output everything as a JSON object (not with --export)
    #[arg(long)]
    pub outjson: bool,
    /// Make keys uppercase
    #[arg(long)]
    pub upper: bool,
    /// Wrap values in quotes
    #[arg(long)]
    pub quote: bool,
    /// Do not descend into sub-paths
    #[arg(long)]
    pub norecursive: bool,
    /// Use the full parameter path as key
    #[arg(long)]
    pub prefixpath: bool,
    /// Use the path joined with underscores as key
    #[arg(long)]
    pub prefixnormalizedpath: bool,
}

/// Arguments for `save`.
#[derive(Args, Debug)]
pub struct SaveArgs {
    /// .env file (or JSON file with --injson)
    pub file: PathBuf,
    /// Path prefix for saved names, e.g. /app/prod
    pub basepath: Option<String>,
    /// Parse the file as a JSON object and save each field
    #[arg(long)]
    pub injson: bool,
    /// Only print what would be saved
    #[arg(long)]
    pub dry: bool,
}

/// Arguments for `compare`.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left side names and paths
    pub left: String,
    /// Right side names and paths
    pub right: Option<String>,
    /// Parse left values as JSON objects
    #[arg(long)]
    pub injson_left: bool,
    /// Parse right values as JSON objects
    #[arg(long)]
    pub injson_right: bool,
    /// Do not descend into sub-paths on the left
    #[arg(long)]
    pub norecursive_left: bool,
    /// Do not descend into sub-paths on the right
    #[arg(long)]
    pub norecursive_right: bool,
    /// Output rows as JSON
    #[arg(long)]
    pub json: bool,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> Result<()> {
    match command {
        Command::Get(args) => get::execute(&args),
        Command::Save(args) => save::execute(&args),
        Command::Compare(args) => compare::execute(&args),
        Command::Completions { shell } => completions::execute(shell),
    }
}

/// Open the store selected by the settings file and environment.
fn store() -> Result<Box<dyn ParameterStore>> {
    let settings = Settings::load()?;
    open_store(&settings)
}
