//! Compare command - show two resolved lists side by side.

use crate::cli::{output, CompareArgs};
use crate::core::compare::{resolve_and_compare, ValueCompare};
use crate::core::{Options, Resolver};
use crate::error::Result;

impl CompareArgs {
    fn side_options(input_json: bool, norecursive: bool) -> Options {
        Options {
            input_json,
            recursive: !norecursive,
            ..Options::default()
        }
    }

    pub fn left_options(&self) -> Options {
        Self::side_options(self.injson_left, self.norecursive_left)
    }

    pub fn right_options(&self) -> Options {
        Self::side_options(self.injson_right, self.norecursive_right)
    }
}

/// Resolve both sides and print the comparison.
pub fn execute(args: &CompareArgs) -> Result<()> {
    let store = super::store()?;
    let resolver = Resolver::new(store.as_ref());
    let left_options = args.left_options();
    let right_options = args.right_options();

    let rows = resolve_and_compare(
        &resolver,
        (args.left.as_str(), &left_options),
        (args.right.as_deref().unwrap_or_default(), &right_options),
    )?;

    if args.json {
        return output::raw(&format!("{}\n", serde_json::to_string_pretty(&rows)?));
    }

    print_table(&rows);
    Ok(())
}

fn print_table(rows: &[ValueCompare]) {
    if rows.is_empty() {
        output::dimmed("nothing to compare");
        return;
    }

    let left_width = rows
        .iter()
        .map(|row| cell(&row.left_name, &row.left_value).chars().count())
        .max()
        .unwrap_or(0);

    for row in rows {
        let left = cell(&row.left_name, &row.left_value);
        let right = cell(&row.right_name, &row.right_value);
        let marker = if row.different { "~" } else { "=" };
        let line = format!("{} {:<width$}  │  {}", marker, left, right, width = left_width);
        if row.different {
            output::changed(&line);
        } else {
            println!("{}", line);
        }
    }

    let different = rows.iter().filter(|row| row.different).count();
    output::dimmed(&format!("{} of {} rows differ", different, rows.len()));
}

fn cell(name: &str, value: &str) -> String {
    if name.is_empty() {
        String::new()
    } else {
        format!("{}={}", name, value)
    }
}
