//! Tests for `depvar variable create/update/list`.

use crate::support::*;

#[test]
fn test_create_and_list() {
    let (t, id) = Test::with_deployment("prod");

    let output = t.create_var(&id, &["DATABASE_URL=postgres://localhost/db"]);
    assert_success(&output);
    assert_stdout_contains(&output, "added DATABASE_URL");

    let output = t.list_vars(&id, &[]);
    assert_success(&output);
    assert_stdout_contains(&output, "DATABASE_URL");
    assert_stdout_contains(&output, "postgres://localhost/db");
    assert_stdout_contains(&output, "SECRET");
}

#[test]
fn test_key_and_value_flags() {
    let (t, id) = Test::with_deployment("prod");

    let output = t.create_var(&id, &["--key", "A", "--value", "1", "--secret"]);
    assert_success(&output);

    assert_eq!(t.vars(&id), vec![var("A", "1", true)]);
}

#[test]
fn test_create_does_not_overwrite() {
    let (t, id) = Test::with_variables("prod", &[("K1", "V1")]);

    let output = t.create_var(&id, &["K1=V2"]);
    assert_success(&output);
    assert_stdout_contains(&output, "'K1' already exists");
    assert_stdout_excludes(&output, "added");

    assert_eq!(t.vars(&id), vec![var("K1", "V1", false)]);
}

#[test]
fn test_update_overwrites() {
    let (t, id) = Test::with_variables("prod", &[("K1", "V1")]);

    let output = t.update_var(&id, &["K1=V2"]);
    assert_success(&output);
    assert_stdout_contains(&output, "updated K1");

    assert_eq!(t.vars(&id), vec![var("K1", "V2", false)]);
}

#[test]
fn test_update_keeps_secret() {
    let (t, id) = Test::with_deployment("prod");
    assert_success(&t.create_var(&id, &["S=x", "--secret"]));

    let output = t.update_var(&id, &["S=y"]);
    assert_success(&output);

    assert_eq!(t.vars(&id), vec![var("S", "y", true)]);
}

#[test]
fn test_missing_value_is_reported() {
    let (t, id) = Test::with_deployment("prod");

    let output = t.create_var(&id, &["--key", "ONLY_KEY"]);
    assert_success(&output);
    assert_stdout_contains(&output, "empty value, skipping variable 'ONLY_KEY'");

    assert!(t.vars(&id).is_empty());
}

#[test]
fn test_missing_key_is_reported() {
    let (t, id) = Test::with_deployment("prod");

    let output = t.create_var(&id, &["--value", "orphan"]);
    assert_success(&output);
    assert_stdout_contains(&output, "empty key");
}

#[test]
fn test_list_single_key() {
    let (t, id) = Test::with_variables("prod", &[("A", "1"), ("B", "2")]);

    let output = t.list_vars(&id, &["--key", "B", "--json"]);
    assert_success(&output);
    let rows: Vec<serde_json::Value> = serde_json::from_str(&stdout(&output)).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["index"], 1);
    assert_eq!(rows[0]["key"], "B");
}

#[test]
fn test_list_unknown_key() {
    let (t, id) = Test::with_variables("prod", &[("A", "1")]);

    let output = t.list_vars(&id, &["--key", "NOPE"]);
    assert_success(&output);
    assert_stdout_contains(&output, "no variables found");
}

#[test]
fn test_order_is_preserved() {
    let (t, id) = Test::with_variables("prod", &[("C", "3"), ("A", "1"), ("B", "2")]);

    assert_success(&t.update_var(&id, &["A=10"]));

    let keys: Vec<String> = t.vars(&id).into_iter().map(|(k, _, _)| k).collect();
    assert_eq!(keys, vec!["C", "A", "B"]);
}

#[test]
fn test_single_deployment_is_used_by_default() {
    let (t, _) = Test::with_deployment("only");

    let output = t.run(&["variable", "create", "A=1"]);
    assert_success(&output);
    assert_stdout_contains(&output, "added A");
}
