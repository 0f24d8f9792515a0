//! Error types for parambulk.
//!
//! One top-level [`Error`] with a focused sub-enum per concern. Engine
//! functions return [`Result`] and propagate with `?`; the binary prints the
//! message and exits non-zero.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed input or an incompatible option combination.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A name batch or a path (after single-get fallback) resolved to nothing.
    #[error("not found: {0}")]
    NotFound(String),

    /// JSON expansion was requested on a value that is not a JSON object.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The store backend failed; the backend message is kept verbatim.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Settings could not be loaded or no backend is usable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A save failed after some parameters were already written.
    #[error("{source} (already written: {})", .written.join(", "))]
    PartialSave {
        written: Vec<String>,
        #[source]
        source: Box<Error>,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Malformed tokens and option combinations.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("parameter is unsplit, contains a comma: {0}")]
    UnsplitToken(String),

    #[error("--export and --outjson can not be used together")]
    ExportWithJson,

    #[error("target is not a path: {0}")]
    NotAPath(String),
}

/// JSON expansion failures.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid json in {name}: {source}")]
    InvalidJson {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("json value of {0} is not an object")]
    NotAnObject(String),
}

/// Store backend (transport) failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{operation} failed: {message}")]
    Request {
        operation: &'static str,
        message: String,
    },

    #[error("parameter not found: {0}")]
    ParameterNotFound(String),

    #[error("batch of {0} names exceeds the store limit of {1}")]
    BatchTooLarge(usize, usize),

    #[error("invalid continuation token: {0}")]
    InvalidToken(String),

    #[error("failed to create runtime: {0}")]
    Runtime(String),

    #[error("failed to read store file {path}: {reason}")]
    ReadFile { path: String, reason: String },

    #[error("failed to write store file {path}: {reason}")]
    WriteFile { path: String, reason: String },
}

/// Settings and backend selection failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("unknown store backend: {0}")]
    UnknownBackend(String),

    #[error("store backend '{0}' is not available in this build")]
    BackendUnavailable(String),

    #[error("file backend selected but no store file configured")]
    MissingStoreFile,
}

pub type Result<T> = std::result::Result<T, Error>;
