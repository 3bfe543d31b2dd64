//! Tests for `variable list --save`.

use crate::support::*;

#[test]
fn test_save_appends_to_env_file() {
    let (t, id) = Test::with_variables("prod", &[("A", "1"), ("B", "2")]);
    t.write(".env", "EXISTING=yes\n");

    let output = t.list_vars(&id, &["--save"]);
    assert_success(&output);
    assert_stdout_contains(&output, "saved 2 variables");

    assert_eq!(t.read(".env"), "EXISTING=yes\nA=1\nB=2\n");
}

#[test]
fn test_save_twice_accumulates() {
    let (t, id) = Test::with_variables("prod", &[("A", "1")]);

    assert_success(&t.list_vars(&id, &["--save", "--env", "out.env"]));
    assert_success(&t.list_vars(&id, &["--save", "--env", "out.env"]));

    assert_eq!(t.read("out.env"), "A=1\nA=1\n");
}

#[test]
fn test_save_single_key() {
    let (t, id) = Test::with_variables("prod", &[("A", "1"), ("B", "2")]);

    assert_success(&t.list_vars(&id, &["--key", "B", "--save", "--env", "b.env"]));

    assert_eq!(t.read("b.env"), "B=2\n");
}

#[test]
fn test_save_warns_about_secrets() {
    let (t, id) = Test::with_deployment("prod");
    assert_success(&t.create_var(&id, &["TOKEN=abc", "--secret"]));

    let output = t.list_vars(&id, &["--save"]);
    assert_success(&output);
    assert_stdout_contains(&output, "1 secret values were written in plain text");
    assert_eq!(t.read(".env"), "TOKEN=abc\n");
}

#[test]
fn test_save_failure_still_lists() {
    let (t, id) = Test::with_variables("prod", &[("A", "1")]);
    std::fs::create_dir(t.path("adir")).unwrap();

    let output = t.list_vars(&id, &["--save", "--env", "adir"]);
    assert_success(&output);
    assert_stdout_contains(&output, "unable to write variables");
    assert_stdout_contains(&output, "A");
}

#[test]
fn test_export_then_import_roundtrip() {
    let (t, source) = Test::with_variables("source", &[("A", "1"), ("URL", "x=y")]);
    let target = t.create_deployment("target");

    assert_success(&t.list_vars(&source, &["--save", "--env", "move.env"]));
    assert_success(&t.create_var(&target, &["--load", "--env", "move.env"]));

    assert_eq!(t.vars(&target), t.vars(&source));
}

#[test]
fn test_save_with_json_keeps_stdout_parseable() {
    let (t, id) = Test::with_deployment("prod");
    assert_success(&t.create_var(&id, &["TOKEN=abc", "--secret"]));

    let output = t.list_vars(&id, &["--save", "--env", "out.env", "--json"]);
    assert_success(&output);

    let rows: Vec<serde_json::Value> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["key"], "TOKEN");
    assert_stderr_contains(&output, "saved 1 variables");
    assert_stderr_contains(&output, "1 secret values were written in plain text");
    assert_eq!(t.read("out.env"), "TOKEN=abc\n");
}

#[test]
fn test_save_failure_with_json_warns_on_stderr() {
    let (t, id) = Test::with_variables("prod", &[("A", "1")]);
    std::fs::create_dir(t.path("adir")).unwrap();

    let output = t.list_vars(&id, &["--save", "--env", "adir", "--json"]);
    assert_success(&output);

    let rows: Vec<serde_json::Value> = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(rows.len(), 1);
    assert_stderr_contains(&output, "unable to write variables");
}
