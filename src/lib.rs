//! Parambulk - bulk get, save and compare entries in a hierarchical
//! parameter store.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── get           # Resolve names/paths and render them
//! │   ├── save          # Write a .env or JSON file to the store
//! │   ├── compare       # Side-by-side comparison of two lists
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── token         # Name/path classification
//!     ├── store/        # Parameter store backends
//!     │   ├── mod       # ParameterStore trait
//!     │   ├── aws       # AWS SSM Parameter Store (feature `aws`)
//!     │   ├── memory    # In-memory store
//!     │   └── file      # Local JSON file store
//!     ├── gateway       # Chunking, pagination, single-get fallback
//!     ├── key           # Output key naming policies
//!     ├── flatten       # JSON value expansion
//!     ├── resolve       # Resolution orchestration
//!     ├── render        # KEY=VALUE / export / JSON output
//!     ├── writer        # Bulk put with dry run
//!     ├── env           # .env / JSON input files
//!     ├── compare       # Positional left/right comparison
//!     └── config        # .parambulk.toml settings
//! ```
//!
//! # Example
//!
//! ```
//! use parambulk::core::store::MemoryStore;
//! use parambulk::core::{render::render, Options, Resolver};
//!
//! let store = MemoryStore::from_pairs([("/app/DB_URL", "postgres://db"), ("TOKEN", "t")]);
//! let options = Options { uppercase_keys: true, ..Options::default() };
//! let results = Resolver::new(&store).resolve("/app,TOKEN", &options).unwrap();
//! assert_eq!(render(&results, &options).unwrap(), "DB_URL=postgres://db\nTOKEN=t\n");
//! ```

pub mod cli;
pub mod core;
pub mod error;
