//! JSON flattening.
//!
//! Expands a JSON-object-valued entry into one scalar entry per top-level
//! field. Nested values are not descended into.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Number, Value};
use tracing::{debug, trace};

use crate::core::options::Options;
use crate::core::ResultSet;
use crate::error::{ParseError, Result};

/// A top-level field value, decoded from JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Number(Number),
    Bool(bool),
    /// Objects, arrays and null.
    Other(Value),
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Self::String(s),
            Value::Number(n) => Self::Number(n),
            Value::Bool(b) => Self::Bool(b),
            other => Self::Other(other),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Number(n) => f.write_str(&format_number(n)),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Other(value) => write!(f, "{}", value),
        }
    }
}

/// Render a JSON number.
///
/// Integers print in decimal. Other numbers use the shortest round-trip
/// digits, so whole floats lose their `.0`; magnitudes outside
/// `[1e-4, 1e21)` switch to `1.5e+21` / `1e-07` exponent form.
pub fn format_number(number: &Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        Some(value) => format_float(value),
        None => number.to_string(),
    }
}

fn format_float(value: f64) -> String {
    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let exp: i32 = exponent.parse().unwrap_or(0);
    if (-4..21).contains(&exp) {
        return value.to_string();
    }
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{}e{}{:0>2}", mantissa, sign, digits)
}

/// Flatten one JSON object into field -> string pairs.
///
/// `name` is only used for error context. Field names are returned as-is;
/// case folding is the caller's job.
///
/// # Errors
///
/// Returns `ParseError` if `value` is not valid JSON or not an object.
pub fn flatten(name: &str, value: &str) -> Result<BTreeMap<String, String>> {
    let parsed: Value = serde_json::from_str(value).map_err(|source| ParseError::InvalidJson {
        name: name.to_string(),
        source,
    })?;
    let Value::Object(object) = parsed else {
        return Err(ParseError::NotAnObject(name.to_string()).into());
    };

    let fields = object
        .into_iter()
        .map(|(field, value)| {
            let rendered = FieldValue::from(value).to_string();
            trace!(%name, %field, value = %rendered, "flattened field");
            (field, rendered)
        })
        .collect::<BTreeMap<_, _>>();

    debug!(%name, fields = fields.len(), "expanded json");
    Ok(fields)
}

/// Replace a result set with the flattened fields of all its values.
///
/// Fields from later entries overwrite earlier ones with the same key.
///
/// # Errors
///
/// Fails on the first value that is not a JSON object.
pub fn flatten_all(results: &ResultSet, options: &Options) -> Result<ResultSet> {
    let mut flattened = ResultSet::new();
    for (name, value) in results {
        for (field, field_value) in flatten(name, value)? {
            flattened.insert(options.fold_case(&field), field_value);
        }
    }
    Ok(flattened)
}
