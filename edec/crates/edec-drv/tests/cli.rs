//! End-to-end CLI tests for the `ede` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write source");
    file
}

fn ede() -> Command {
    Command::cargo_bin("ede").expect("binary built")
}

#[test]
fn evaluates_file_and_prints_final_value() {
    let file = source_file("let a = [1..4]; a[0] + a[3]");
    ede()
        .arg(file.path())
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn prints_null_for_nil_result() {
    let file = source_file("if (false) { 1 }");
    ede().arg(file.path()).assert().success().stdout("null\n");
}

#[test]
fn arithmetic_scenario() {
    let file = source_file("(5 + 10 * 2 + 15 / 3) * 2 + -10");
    ede().arg(file.path()).assert().success().stdout("50\n");
}

#[test]
fn print_builtin_writes_before_final_value() {
    let file = source_file("println(\"hello\", 42); 7");
    ede()
        .arg(file.path())
        .assert()
        .success()
        .stdout("hello 42\n7\n");
}

#[test]
fn parse_error_exits_nonzero_with_position() {
    let file = source_file("let x = 5;\nlet 6 = 4;");
    ede()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("\tError: "))
        .stderr(predicate::str::contains("Line: 2"));
}

#[test]
fn runtime_error_exits_nonzero() {
    let file = source_file("let a = [1, 2]; a[5]");
    ede()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("index 5 out of range with length 2"));
}

#[test]
fn missing_file_exits_nonzero() {
    ede()
        .arg("definitely-not-a-file.ede")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read"));
}

#[test]
fn emit_tokens_dumps_the_stream() {
    let file = source_file("let x = 1");
    ede()
        .arg(file.path())
        .args(["--emit", "tokens"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Let"))
        .stdout(predicate::str::contains("Eof"));
}

#[test]
fn emit_ast_dumps_statements() {
    let file = source_file("let x = 1");
    ede()
        .arg(file.path())
        .args(["--emit", "ast"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Let"));
}

#[test]
fn repl_evaluates_lines_from_stdin() {
    ede()
        .write_stdin("let a = 5\na + 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 6"));
}

#[test]
fn match_fallback_scenario() {
    let file = source_file("let obj = match 10 * \"a\" { case error: return \"fallback\" }; obj");
    ede().arg(file.path()).assert().success().stdout("fallback\n");
}

#[test]
fn json_round_trip_scenario() {
    let file =
        source_file("import json; let h = {\"a\": 1, \"b\": [1, 2]}; json.parse(json.string(h)) == h");
    ede().arg(file.path()).assert().success().stdout("true\n");
}
