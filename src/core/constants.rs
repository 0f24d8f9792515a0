//! Constants used throughout parambulk.
//!
//! Centralizes separators, store limits and configuration names.

/// Separator between tokens in a name/path list (`name1,/path1`).
pub const LIST_SEPARATOR: char = ',';

/// Separator between hierarchy levels in a store name (`/app/db/URL`).
pub const PATH_SEPARATOR: char = '/';

/// Replacement for inner separators under the normalized-path naming policy.
pub const NORMALIZED_SEPARATOR: &str = "_";

/// Maximum number of names per batch get.
pub const BATCH_SIZE: usize = 10;

/// Maximum number of entries returned per page by a path listing.
pub const PAGE_SIZE: usize = 10;

/// Settings file name in the working directory.
pub const CONFIG_FILE: &str = ".parambulk.toml";

/// Settings directory name under the user config directory.
pub const CONFIG_DIR: &str = "parambulk";

/// Environment variable holding an explicit settings file path.
pub const CONFIG_ENV: &str = "PARAMBULK_CONFIG";

/// Environment variable overriding the store backend.
pub const BACKEND_ENV: &str = "PARAMBULK_BACKEND";

/// Environment variable selecting a local JSON store file.
pub const STORE_FILE_ENV: &str = "PARAMBULK_STORE_FILE";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "PARAMBULK_LOG";

/// Header printed before a dry-run listing.
pub const DRY_RUN_HEADER: &str = "### Dry run, not saving, this would have been set:";
