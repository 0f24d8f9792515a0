//! Tests for `parambulk compare`.

use crate::support::*;

#[test]
fn test_compare_identical_sides() {
    let t = Test::with_parameters(APP_PARAMETERS);

    let output = t.compare("/app/dev", Some("/app/dev"), &[]);
    assert_success(&output);
    assert_stdout_contains(&output, "= API_KEY=sk-dev");
    assert_stdout_contains(&output, "0 of 2 rows differ");
}

#[test]
fn test_compare_json_rows() {
    let t = Test::with_parameters(APP_PARAMETERS);

    let output = t.compare("/app/dev", Some("/app/prod"), &["--json"]);
    assert_success(&output);

    let rows: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["left_name"], "API_KEY");
    assert_eq!(rows[0]["right_value"], "sk-prod");
    assert_eq!(rows[0]["different"], true);
    assert_eq!(rows[2]["left_name"], "");
    assert_eq!(rows[2]["right_name"], "TOKEN");
}

#[test]
fn test_compare_norecursive_right() {
    let t = Test::with_parameters(APP_PARAMETERS);

    let output = t.compare(
        "/app/dev",
        Some("/app/prod"),
        &["--norecursive-right", "--json"],
    );
    assert_success(&output);
    let rows: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 2);
}

#[test]
fn test_compare_left_only() {
    let t = Test::with_parameters(APP_PARAMETERS);

    let output = t.compare("plain", None, &[]);
    assert_success(&output);
    assert_stdout_contains(&output, "~ plain=value");
    assert_stdout_contains(&output, "1 of 1 rows differ");
}

#[test]
fn test_compare_injson_side() {
    let t = Test::with_parameters(&[
        ("/env/dev/PORT", "8080"),
        ("/cfg/prod", r#"{"PORT": 8080}"#),
    ]);

    let output = t.compare("/env/dev", Some("/cfg/prod"), &["--injson-right", "--json"]);
    assert_success(&output);
    let rows: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(rows[0]["different"], false);
}

#[test]
fn test_compare_missing_side_fails() {
    let t = Test::with_parameters(APP_PARAMETERS);

    let output = t.compare("/app/dev", Some("nope"), &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "not found");
}
