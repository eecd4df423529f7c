use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn valid_program_prints_summary_and_passes() {
    let mut cmd = cargo_bin_cmd!("minic");
    cmd.arg(fixture_path("valid.c"));

    let output_pred = predicate::str::contains("Total Tokens:")
        .and(predicate::str::contains("Token Type Counts:"))
        .and(predicate::str::contains("(gcd, IDENTIFIER) @ 5:5"))
        .and(predicate::str::contains("Syntax OK"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn syntax_error_fails_with_position() {
    let mut cmd = cargo_bin_cmd!("minic");
    cmd.arg(fixture_path("invalid.c")).arg("--quiet");

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("line 4, column 13"));
}

#[test]
fn tokens_are_written_even_when_syntax_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("tokens.json");

    let mut cmd = cargo_bin_cmd!("minic");
    cmd.arg(fixture_path("invalid.c"))
        .arg("--quiet")
        .arg("-o")
        .arg(&out);
    cmd.assert().failure();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(
        json[0],
        serde_json::json!({"value": "int", "type": "KEYWORD", "line": 1, "column": 1})
    );
}

#[test]
fn tokens_only_skips_the_parser() {
    let mut cmd = cargo_bin_cmd!("minic");
    cmd.arg(fixture_path("invalid.c")).arg("--tokens-only");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Syntax OK").not());
}

#[test]
fn lex_error_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("bad.c");
    fs::write(&src, "int x;\nint $y;\n").unwrap();

    let mut cmd = cargo_bin_cmd!("minic");
    cmd.arg(&src);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Lexer error at line 2, column 5"));
}

#[test]
fn unsupported_output_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("minic");
    cmd.arg(fixture_path("valid.c"))
        .arg("--quiet")
        .arg("-o")
        .arg(dir.path().join("tokens.txt"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file extension: .txt"));
}

#[test]
fn missing_input_file() {
    let mut cmd = cargo_bin_cmd!("minic");
    cmd.arg(fixture_path("does-not-exist.c"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}
