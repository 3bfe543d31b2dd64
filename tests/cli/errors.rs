//! Tests for error handling and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("variable"))
        .stdout(predicate::str::contains("deployment"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    t.cmd().arg("unknown-command").assert().failure();
}

#[test]
fn test_errors_go_to_stderr() {
    let t = Test::new();

    t.cmd()
        .args(["variable", "create", "-d", "missing", "A=1"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("✗ deployment not found: missing"))
        .stderr(predicate::str::contains("→ run: depvar deployment create"));
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.run(&["--version"]);
    assert_success(&output);
    assert_stdout_contains(&output, "depvar");
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.run(&["completions", "bash"]);
    assert_success(&output);
    assert_stdout_contains(&output, "_depvar");
}

#[test]
fn test_list_without_state_file() {
    let t = Test::new();

    let output = t.run(&["variable", "list"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "no deployments exist");
    assert_stderr_contains(&output, "depvar deployment create");
}

#[test]
fn test_unknown_deployment_lists_available() {
    let (t, id) = Test::with_deployment("prod");

    let output = t.create_var("missing", &["A=1"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "deployment not found: missing");
    assert_stderr_contains(&output, &id);
}

#[test]
fn test_multiple_deployments_require_selection() {
    let t = Test::new();
    t.create_deployment("one");
    t.create_deployment("two");

    let output = t.run(&["variable", "list"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "select one with --deployment");
    assert_stderr_contains(&output, "one");
    assert_stderr_contains(&output, "two");
}

#[test]
fn test_corrupt_state_file() {
    let t = Test::new();
    t.write(".depvar.toml", "this is [not toml");

    let output = t.run(&["deployment", "list"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse state file");
}

#[test]
fn test_rejections_do_not_fail_the_command() {
    let (t, id) = Test::with_variables("prod", &[("A", "1")]);
    t.write(".env", "=x\nA=2\nB=\n");

    let output = t.create_var(&id, &["--load"]);
    assert_success(&output);
    assert_eq!(
        stdout(&output).matches('⚠').count(),
        3,
        "expected three rejections, got: {}",
        stdout(&output)
    );
}
