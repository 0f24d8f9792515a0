//! Resolution of a token list into a result set.

use tracing::{debug, trace};

use crate::core::flatten;
use crate::core::gateway::Gateway;
use crate::core::key;
use crate::core::options::Options;
use crate::core::store::{Parameter, ParameterStore};
use crate::core::token::Tokens;
use crate::core::ResultSet;
use crate::error::Result;

/// Drives classification, fetching, key derivation and flattening.
///
/// Holds no state between calls; every `resolve` builds its result from
/// scratch.
pub struct Resolver<'s> {
    gateway: Gateway<'s>,
}

impl<'s> Resolver<'s> {
    pub fn new(store: &'s dyn ParameterStore) -> Self {
        Self {
            gateway: Gateway::new(store),
        }
    }

    /// Resolve a comma separated list of names and paths.
    ///
    /// Paths are fetched first, one listing per path in input order, then
    /// all names in one chunked batch. Each parameter's output key is
    /// derived in fetch order; a later parameter mapping to the same key
    /// silently replaces the earlier one.
    ///
    /// # Errors
    ///
    /// Fails fast with the first `FormatError`, `NotFound`, `ParseError` or
    /// store error. No partial result is returned.
    pub fn resolve(&self, list: &str, options: &Options) -> Result<ResultSet> {
        let tokens = Tokens::parse(list)?;
        debug!(
            names = tokens.names.len(),
            paths = tokens.paths.len(),
            backend = self.gateway.backend(),
            "resolving"
        );

        let mut fetched: Vec<Parameter> = Vec::new();
        for path in &tokens.paths {
            fetched.extend(self.gateway.get_by_path(path, options.recursive)?);
        }
        fetched.extend(self.gateway.get_by_names(&tokens.names)?);

        let mut results = ResultSet::new();
        for parameter in fetched {
            let output_key = key::derive(&parameter.name, options);
            trace!(raw = %parameter.name, key = %output_key, "derived key");
            if results.insert(output_key, parameter.value).is_some() {
                debug!(raw = %parameter.name, "output key collision, later value wins");
            }
        }

        if options.input_json {
            results = flatten::flatten_all(&results, options)?;
        }

        debug!(count = results.len(), "resolved");
        Ok(results)
    }
}
