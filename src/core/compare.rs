//! Side-by-side comparison of two resolved lists.
//!
//! Rows pair the sorted keys of both sides by position, not by key: row `i`
//! holds the `i`-th left key next to the `i`-th right key. Two sides with
//! different key sets therefore line up unrelated keys. The longer side
//! pads the other with empty cells.

use serde::Serialize;

use crate::core::options::Options;
use crate::core::resolve::Resolver;
use crate::core::ResultSet;
use crate::error::Result;

/// One comparison row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValueCompare {
    pub left_name: String,
    pub left_value: String,
    pub right_name: String,
    pub right_value: String,
    /// Left and right values differ as strings.
    pub different: bool,
}

/// Zip two result sets by sorted position.
pub fn compare(left: &ResultSet, right: &ResultSet) -> Vec<ValueCompare> {
    let mut rows: Vec<ValueCompare> = left
        .iter()
        .map(|(name, value)| ValueCompare {
            left_name: name.clone(),
            left_value: value.clone(),
            ..ValueCompare::default()
        })
        .collect();

    for (index, (name, value)) in right.iter().enumerate() {
        if index == rows.len() {
            rows.push(ValueCompare::default());
        }
        rows[index].right_name = name.clone();
        rows[index].right_value = value.clone();
    }

    for row in &mut rows {
        row.different = row.left_value != row.right_value;
    }
    rows
}

/// Resolve both sides independently and compare them.
///
/// An empty right list compares against nothing.
///
/// # Errors
///
/// Returns the first resolution error; no partial comparison is produced.
pub fn resolve_and_compare(
    resolver: &Resolver<'_>,
    left: (&str, &Options),
    right: (&str, &Options),
) -> Result<Vec<ValueCompare>> {
    let left = resolver.resolve(left.0.trim(), left.1)?;
    let right = match right.0.trim() {
        "" => ResultSet::new(),
        list => resolver.resolve(list, right.1)?,
    };
    Ok(compare(&left, &right))
}
