//! Core library components.
//!
//! This module contains the resolution engine (token classification, store
//! access, key derivation, JSON flattening, rendering), the writer, and
//! configuration handling. Nothing here prints; the CLI owns the terminal.

pub mod compare;
pub mod config;
pub mod constants;
pub mod env;
pub mod flatten;
pub mod gateway;
pub mod key;
pub mod options;
pub mod render;
pub mod resolve;
pub mod store;
pub mod token;
pub mod writer;

use std::collections::BTreeMap;

/// Output key -> value. Keys are unique; iteration is in key order.
pub type ResultSet = BTreeMap<String, String>;

pub use options::{NamingPolicy, Options};
pub use resolve::Resolver;
pub use writer::Writer;
