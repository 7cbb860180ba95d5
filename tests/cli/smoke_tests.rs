use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{MIXED_C, project};

fn langcount() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_langcount"));
    cmd.env_remove("LOGGING");
    cmd
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("binary runs");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("valid json")
}

#[test]
fn shows_help() {
    langcount()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("langcount"))
        .stdout(predicate::str::contains("--count-files"));
}

#[test]
fn requires_a_path() {
    langcount().assert().failure();
}

#[test]
fn table_output_for_mixed_c_file() {
    let dir = project(&[("main.c", MIXED_C)]);
    langcount()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Comments"))
        .stdout(predicate::str::contains("TOTAL"))
        .stdout(predicate::str::contains("Most used language: c"));
}

#[test]
fn json_output_counts_lines() {
    let dir = project(&[("main.c", MIXED_C)]);
    let value = json_output(langcount().args(["-o", "json"]).arg(dir.path()));
    let c = &value["languages"]["c"];
    assert_eq!(c["files"], 1);
    assert_eq!(c["lines"], 7);
    assert_eq!(c["code"], 2);
    assert_eq!(c["comments"], 4);
    assert_eq!(c["blanks"], 1);
    assert_eq!(value["most_used_language"], "c");
}

#[test]
fn unknown_extension_is_dropped_by_default() {
    let dir = project(&[("notes.xyz", "hello\n"), ("a.go", "package a\n")]);
    let value = json_output(langcount().args(["--format", "json"]).arg(dir.path()));
    let languages = value["languages"].as_object().unwrap();
    assert_eq!(languages.keys().collect::<Vec<_>>(), vec!["go"]);
}

#[test]
fn unknown_extension_is_recorded_on_request() {
    let dir = project(&[("notes.xyz", "hello\n")]);
    let value = json_output(langcount().args(["--format", "json", "--unknown"]).arg(dir.path()));
    let bucket = &value["languages"]["unknown_xyz"];
    assert_eq!(bucket["files"], 1);
    assert_eq!(bucket["skipped"], 1);
    assert_eq!(bucket["lines"], 0);
    assert!(value["most_used_language"].is_null());
}

#[test]
fn count_files_mode_skips_line_scanning() {
    let dir = project(&[("a.rs", "fn a() {}\n"), ("b.rs", "fn b() {}\n// c\n")]);
    let value = json_output(langcount().args(["-o", "json", "--count-files"]).arg(dir.path()));
    let rust = &value["languages"]["rust"];
    assert_eq!(rust["files"], 2);
    assert_eq!(rust["lines"], 0);
}

#[test]
fn csv_output_has_header_and_total() {
    let dir = project(&[("a.py", "x = 1\n# c\n")]);
    langcount()
        .args(["-o", "csv"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("language,files,skipped,lines,code,comments,blanks\n"))
        .stdout(predicate::str::contains("python,1,0,2,1,1,0"))
        .stdout(predicate::str::contains("TOTAL,1,0,2,1,1,0"));
}

#[test]
fn empty_directory_fails() {
    let dir = project(&[]);
    langcount()
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No input files"));
}

#[test]
fn missing_path_fails() {
    langcount().arg("/definitely/not/a/real/path").assert().failure();
}

#[test]
fn lists_languages() {
    langcount()
        .arg("--list-languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("rust\n"))
        .stdout(predicate::str::contains("python\n"));
}

#[test]
fn invalid_override_file_fails() {
    let dir = project(&[("langs.json", r#"{"languages": {"bad": {"line_comment": [""]}}}"#)]);
    langcount()
        .arg("--languages")
        .arg(dir.path().join("langs.json"))
        .arg("--list-languages")
        .assert()
        .failure()
        .stderr(predicate::str::contains("language profiles"));
}

#[test]
fn gitignored_files_are_skipped_unless_disabled() {
    let dir = project(&[(".gitignore", "gen/\n"), ("gen/out.go", "package gen\n"), ("main.go", "package main\n")]);

    let value = json_output(langcount().args(["-o", "json"]).arg(dir.path()));
    assert_eq!(value["languages"]["go"]["files"], 1);

    let value = json_output(langcount().args(["-o", "json", "--no-gitignore"]).arg(dir.path()));
    assert_eq!(value["languages"]["go"]["files"], 2);
}
