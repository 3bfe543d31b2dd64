//! Tests for `--load` env file import.

use crate::support::*;

#[test]
fn test_load_env_file() {
    let (t, id) = Test::with_deployment("prod");
    t.write(".env", SAMPLE_ENV);

    let output = t.create_var(&id, &["--load"]);
    assert_success(&output);

    assert_eq!(
        t.vars(&id),
        vec![
            var("KEY1", "value1", false),
            var("KEY2", "value2", false),
            var("KEY3", "value3", false),
        ]
    );
}

#[test]
fn test_load_reports_each_rejection() {
    let (t, id) = Test::with_deployment("prod");
    t.write("vars.env", SAMPLE_ENV_COMPLEX);

    let output = t.create_var(&id, &["--load", "--env", "vars.env", "--secret"]);
    assert_success(&output);
    assert_stdout_contains(&output, "line 4: empty key");
    assert_stdout_contains(&output, "line 5: empty value, skipping variable 'EMPTY_VALUE'");
    assert_stdout_contains(&output, "line 6: expected KEY=VALUE");
    assert_stdout_contains(&output, "line 8: 'DATABASE_URL' already defined on line 2");

    assert_eq!(
        t.vars(&id),
        vec![
            var("DATABASE_URL", "postgres://u:p@localhost/db?sslmode=disable", true),
            var("API_KEY", "sk-test-12345", true),
        ]
    );
}

#[test]
fn test_duplicate_in_file_first_wins() {
    let (t, id) = Test::with_deployment("prod");
    t.write(".env", "A=1\nB=2\nA=3\n");

    let output = t.create_var(&id, &["--load"]);
    assert_success(&output);

    assert_eq!(t.vars(&id), vec![var("A", "1", false), var("B", "2", false)]);
}

#[test]
fn test_load_without_update_skips_existing() {
    let (t, id) = Test::with_variables("prod", &[("KEY1", "old")]);
    t.write(".env", SAMPLE_ENV);

    let output = t.create_var(&id, &["--load"]);
    assert_success(&output);
    assert_stdout_contains(&output, "'KEY1' already exists");

    assert_eq!(t.vars(&id)[0], var("KEY1", "old", false));
    assert_eq!(t.vars(&id).len(), 3);
}

#[test]
fn test_load_with_update() {
    let (t, id) = Test::with_variables("prod", &[("KEY1", "old")]);
    t.write(".env", SAMPLE_ENV);

    let output = t.update_var(&id, &["--load"]);
    assert_success(&output);

    assert_eq!(t.vars(&id)[0], var("KEY1", "value1", false));
}

#[test]
fn test_missing_env_file_still_applies_inline() {
    let (t, id) = Test::with_deployment("prod");

    let output = t.create_var(&id, &["INLINE=yes", "--load", "--env", "absent.env"]);
    assert_success(&output);
    assert_stdout_contains(&output, "unable to read");
    assert_stdout_contains(&output, "added INLINE");

    assert_eq!(t.vars(&id), vec![var("INLINE", "yes", false)]);
}

#[test]
fn test_file_can_update_inline_addition() {
    let (t, id) = Test::with_deployment("prod");
    t.write(".env", "NEW=from-file\n");

    let output = t.update_var(&id, &["NEW=inline", "--load"]);
    assert_success(&output);

    assert_eq!(t.vars(&id), vec![var("NEW", "from-file", false)]);
}
