//! Tests for `depvar deployment` commands.

use crate::support::*;

#[test]
fn test_create_and_list() {
    let t = Test::new();

    let output = t.run(&["deployment", "create", "staging"]);
    assert_success(&output);
    assert_stdout_contains(&output, "created deployment staging");

    let output = t.run(&["deployment", "list"]);
    assert_success(&output);
    assert_stdout_contains(&output, "staging");
    assert_stdout_contains(&output, "LABEL");
    assert!(t.path(".depvar.toml").exists());
}

#[test]
fn test_list_without_state_file() {
    let t = Test::new();

    let output = t.run(&["deployment", "list"]);
    assert_success(&output);
    assert_stdout_contains(&output, "no deployments");
}

#[test]
fn test_create_rejects_blank_label() {
    let t = Test::new();

    let output = t.run(&["deployment", "create", "  "]);
    assert_failure(&output);
    assert_stderr_contains(&output, "label cannot be empty");
}

#[test]
fn test_delete() {
    let (t, id) = Test::with_variables("prod", &[("A", "1")]);

    let output = t.run(&["deployment", "delete", id.as_str(), "--yes"]);
    assert_success(&output);
    assert_stdout_contains(&output, "deleted deployment prod");

    let output = t.list_vars(&id, &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "deployment not found");
}

#[test]
fn test_delete_unknown() {
    let (t, _) = Test::with_deployment("prod");

    let output = t.run(&["deployment", "delete", "nope", "--yes"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "deployment not found: nope");
}

#[test]
fn test_state_path_from_env() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("DEPVAR_STATE", t.path("custom.toml"))
        .args(["deployment", "create", "elsewhere"])
        .output()
        .unwrap();
    assert_success(&output);

    assert!(t.path("custom.toml").exists());
    assert!(!t.path(".depvar.toml").exists());
}

#[test]
fn test_update_label() {
    let (t, id) = Test::with_variables("prod", &[("A", "1")]);

    let output = t.run(&["deployment", "update", id.as_str(), "--label", "production"]);
    assert_success(&output);
    assert_stdout_contains(&output, &format!("updated deployment production ({})", id));

    let output = t.run(&["deployment", "list"]);
    assert_stdout_contains(&output, "production");
    assert_eq!(t.vars(&id), vec![var("A", "1", false)]);
}

#[test]
fn test_update_unknown() {
    let (t, id) = Test::with_deployment("prod");

    let output = t.run(&["deployment", "update", "nope", "--label", "x"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "deployment not found: nope");
    assert_stderr_contains(&output, &format!("available: {}", id));
}

#[test]
fn test_update_rejects_blank_label() {
    let (t, id) = Test::with_deployment("prod");

    let output = t.run(&["deployment", "update", id.as_str(), "--label", " "]);
    assert_failure(&output);
    assert_stderr_contains(&output, "label cannot be empty");
}
