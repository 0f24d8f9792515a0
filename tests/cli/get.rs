//! Tests for `parambulk get`.

use crate::support::*;

#[test]
fn test_get_path_lists_children_sorted() {
    let t = Test::with_parameters(APP_PARAMETERS);

    let output = t.get("/app/prod", &[]);
    assert_success(&output);
    assert_stdout_eq(
        &output,
        "API_KEY=sk-prod\nDB_URL=postgres://prod/db\nTOKEN=t0k\n",
    );
}

#[test]
fn test_get_norecursive_skips_nested() {
    let t = Test::with_parameters(APP_PARAMETERS);

    let output = t.get("/app/prod", &["--norecursive"]);
    assert_success(&output);
    assert_stdout_eq(&output, "API_KEY=sk-prod\nDB_URL=postgres://prod/db\n");
}

#[test]
fn test_get_names() {
    let t = Test::with_parameters(APP_PARAMETERS);

    let output = t.get("plain,other", &[]);
    assert_success(&output);
    assert_stdout_eq(&output, "other=x\nplain=value\n");
}

#[test]
fn test_get_full_name_as_path_falls_back_to_single_get() {
    let t = Test::with_parameters(APP_PARAMETERS);

    let output = t.get("/app/prod/DB_URL", &[]);
    assert_success(&output);
    assert_stdout_eq(&output, "DB_URL=postgres://prod/db\n");
}

#[test]
fn test_get_later_token_wins_on_collision() {
    let t = Test::with_parameters(APP_PARAMETERS);

    let output = t.get("/app/dev,/app/prod", &["--norecursive"]);
    assert_success(&output);
    assert_stdout_eq(&output, "API_KEY=sk-prod\nDB_URL=postgres://prod/db\n");

    let output = t.get("/app/prod,/app/dev", &["--norecursive"]);
    assert_success(&output);
    assert_stdout_eq(&output, "API_KEY=sk-dev\nDB_URL=postgres://dev/db\n");
}

#[test]
fn test_get_prefix_policies() {
    let t = Test::with_parameters(APP_PARAMETERS);

    let output = t.get("/app/dev", &["--prefixnormalizedpath"]);
    assert_success(&output);
    assert_stdout_eq(
        &output,
        "app_dev_API_KEY=sk-dev\napp_dev_DB_URL=postgres://dev/db\n",
    );

    let output = t.get("/app/dev", &["--prefixpath", "--prefixnormalizedpath"]);
    assert_success(&output);
    assert_stdout_eq(
        &output,
        "/app/dev/API_KEY=sk-dev\n/app/dev/DB_URL=postgres://dev/db\n",
    );
}

#[test]
fn test_get_upper_export_quote() {
    let t = Test::with_parameters(APP_PARAMETERS);

    let output = t.get("plain", &["--upper", "--export", "--quote"]);
    assert_success(&output);
    assert_stdout_eq(&output, "export PLAIN=\"value\"\n");
}

#[test]
fn test_get_outjson() {
    let t = Test::with_parameters(APP_PARAMETERS);

    let output = t.get("plain,other", &["--outjson"]);
    assert_success(&output);
    assert_stdout_eq(&output, "{\n  \"other\": \"x\",\n  \"plain\": \"value\"\n}");
}

#[test]
fn test_get_injson_expands_fields() {
    let t = Test::with_parameters(APP_PARAMETERS);

    let output = t.get("/cfg/app", &["--injson"]);
    assert_success(&output);
    assert_stdout_eq(&output, "DEBUG=false\nNAME=api\nPORT=8080\n");

    let output = t.get("/cfg/app", &["--injson", "--upper", "--outjson"]);
    assert_success(&output);
    assert_stdout_contains(&output, "\"PORT\": \"8080\"");
}

#[test]
fn test_get_injson_on_plain_value_fails() {
    let t = Test::with_parameters(APP_PARAMETERS);

    let output = t.get("plain", &["--injson"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid json in plain");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_get_missing_name_fails() {
    let t = Test::with_parameters(APP_PARAMETERS);

    let output = t.get("nope", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "not found: nope");
}

#[test]
fn test_get_missing_path_fails() {
    let t = Test::with_parameters(APP_PARAMETERS);

    let output = t.get("/nothing/here", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "not found");
}

#[test]
fn test_get_partial_name_batch_succeeds() {
    let t = Test::with_parameters(APP_PARAMETERS);

    let output = t.get("plain,nope", &[]);
    assert_success(&output);
    assert_stdout_eq(&output, "plain=value\n");
}

#[test]
fn test_get_export_with_outjson_fails() {
    let t = Test::with_parameters(APP_PARAMETERS);

    let output = t.get("plain", &["--export", "--outjson"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "can not be used together");
}
