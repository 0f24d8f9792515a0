//! Tests for error handling, settings and CLI flags.

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "Usage");
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "parambulk");
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "_parambulk");
}

#[test]
fn test_completions_invalid_shell_fails() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "tcsh"]).output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_unknown_backend_fails() {
    let t = Test::with_parameters(APP_PARAMETERS);

    let output = t
        .cmd()
        .env("PARAMBULK_BACKEND", "vault")
        .args(["get", "plain"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "unknown store backend: vault");
}

#[test]
fn test_file_backend_without_file_shows_hint() {
    let t = Test::new();

    let output = t
        .cmd()
        .env_remove("PARAMBULK_STORE_FILE")
        .env("PARAMBULK_BACKEND", "file")
        .args(["get", "plain"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "no store file configured");
    assert_stderr_contains(&output, "→");
}

#[test]
fn test_settings_file_selects_store_file() {
    let t = Test::new();
    t.write_file("params.json", r#"{"from_settings": "yes"}"#);
    t.write_file(".parambulk.toml", "[store]\nfile = \"params.json\"\n");

    let output = t
        .cmd()
        .env_remove("PARAMBULK_STORE_FILE")
        .args(["get", "from_settings"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_eq(&output, "from_settings=yes\n");
}

#[test]
fn test_explicit_settings_path() {
    let t = Test::new();
    t.write_file("params.json", r#"{"k": "v"}"#);
    let settings = t.write_file("custom.toml", "[store]\nbackend = \"file\"\nfile = \"params.json\"\n");

    let output = t
        .cmd()
        .env_remove("PARAMBULK_STORE_FILE")
        .env("PARAMBULK_CONFIG", &settings)
        .args(["get", "k"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_eq(&output, "k=v\n");
}

#[test]
fn test_malformed_settings_file_fails() {
    let t = Test::new();
    t.write_file(".parambulk.toml", "[store\nfile = ");

    let output = t.get("plain", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config file");
}

#[test]
fn test_corrupt_store_file_fails() {
    let t = Test::new();
    t.write_file("store.json", "not json");

    let output = t.get("plain", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read store file");
}

#[cfg(target_os = "linux")]
#[test]
fn test_stdout_write_failure_is_reported() {
    let t = Test::with_parameters(APP_PARAMETERS);
    let full = std::fs::OpenOptions::new()
        .write(true)
        .open("/dev/full")
        .unwrap();

    #[allow(deprecated)]
    let output = std::process::Command::new(assert_cmd::cargo::cargo_bin("parambulk"))
        .env("HOME", t.home.path())
        .env("XDG_CONFIG_HOME", t.home.path())
        .env_remove("PARAMBULK_CONFIG")
        .env_remove("PARAMBULK_BACKEND")
        .env("PARAMBULK_STORE_FILE", t.store_path())
        .env("NO_COLOR", "1")
        .current_dir(t.dir.path())
        .args(["get", "plain"])
        .stdout(full)
        .stderr(std::process::Stdio::piped())
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "io error");
}
