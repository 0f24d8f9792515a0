//! Token splitting and classification.
//!
//! A token list is a comma separated mix of bare names (`DB_URL`) and
//! hierarchical paths (`/app/prod`).

use crate::core::constants::{LIST_SEPARATOR, PATH_SEPARATOR};
use crate::error::{FormatError, Result};

/// Kind of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A bare name, fetched through batch get.
    Name,
    /// A hierarchical path, listed with pagination.
    Path,
}

/// Split a token list on the list separator.
///
/// Empty input yields no tokens. Empty segments (`a,,b`, a trailing comma)
/// are dropped.
pub fn split(list: &str) -> Vec<&str> {
    list.split(LIST_SEPARATOR)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Classify a single, already split token.
///
/// # Errors
///
/// Returns `FormatError::UnsplitToken` if the token still contains the list
/// separator.
pub fn classify(token: &str) -> Result<TokenKind> {
    if token.contains(LIST_SEPARATOR) {
        return Err(FormatError::UnsplitToken(token.to_string()).into());
    }
    if token.contains(PATH_SEPARATOR) {
        Ok(TokenKind::Path)
    } else {
        Ok(TokenKind::Name)
    }
}

/// Tokens of a list partitioned by kind, each in input order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Tokens {
    pub names: Vec<String>,
    pub paths: Vec<String>,
}

impl Tokens {
    /// Split and classify a whole token list.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed token.
    pub fn parse(list: &str) -> Result<Self> {
        let mut tokens = Self::default();
        for token in split(list) {
            match classify(token)? {
                TokenKind::Path => tokens.paths.push(token.to_string()),
                TokenKind::Name => tokens.names.push(token.to_string()),
            }
        }
        Ok(tokens)
    }
}
