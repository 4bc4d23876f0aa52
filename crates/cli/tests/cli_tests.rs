//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("verba").unwrap()
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

#[test]
fn test_cli_analyze_file_input() {
    cmd()
        .args(["analyze", &get_fixture_path("article.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Readability score"));
}

#[test]
fn test_cli_analyze_stdin_input() {
    cmd()
        .args(["analyze", "-"])
        .write_stdin("The cat sat. It was happy.")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sentences:          2"));
}

#[test]
fn test_cli_analyze_json_format() {
    cmd()
        .args(["analyze", "-f", "json", &get_fixture_path("article.txt")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::contains("sentence_count"));
}

#[test]
fn test_cli_analyze_with_keywords() {
    cmd()
        .args(["analyze", "-k", "keyword", "-k", "readability", &get_fixture_path("article.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keyword \"keyword\""))
        .stdout(predicate::str::contains("Keyword \"readability\""));
}

#[test]
fn test_cli_analyze_empty_input() {
    cmd()
        .args(["analyze", &get_fixture_path("empty.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Readability score:  0.0"));
}

#[test]
fn test_cli_analyze_output_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("report.txt");

    cmd()
        .args(["analyze", "-o", output.to_str().unwrap(), &get_fixture_path("article.txt")])
        .assert()
        .success();

    assert!(output.exists());
    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.contains("Readability score"));
}

#[test]
fn test_cli_analyze_verbose() {
    cmd()
        .args(["analyze", "-v", &get_fixture_path("article.txt")])
        .assert()
        .success()
        .stderr(predicate::str::contains("Verba"));
}

#[test]
fn test_cli_insert_contains_keyword() {
    cmd()
        .args(["insert", "-k", "backlinks", &get_fixture_path("article.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("backlinks"));
}

#[test]
fn test_cli_insert_seeded_is_reproducible() {
    let first = cmd()
        .args(["insert", "-k", "backlinks", "--seed", "11", &get_fixture_path("article.txt")])
        .assert()
        .success();
    let second = cmd()
        .args(["insert", "-k", "backlinks", "--seed", "11", &get_fixture_path("article.txt")])
        .assert()
        .success();

    assert_eq!(first.get_output().stdout, second.get_output().stdout);
}

#[test]
fn test_cli_insert_existing_keyword_unchanged() {
    cmd()
        .args(["insert", "-k", "cat", "-"])
        .write_stdin("The cat sat on the mat.")
        .assert()
        .success()
        .stdout("The cat sat on the mat.\n");
}

#[test]
fn test_cli_keywords_text_format() {
    cmd()
        .args(["keywords", &get_fixture_path("article.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("search"));
}

#[test]
fn test_cli_keywords_limit() {
    let assert = cmd()
        .args(["keywords", "-l", "3", &get_fixture_path("article.txt")])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 3);
}

#[test]
fn test_cli_keywords_json_format() {
    cmd()
        .args(["keywords", "-f", "json", &get_fixture_path("article.txt")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn test_cli_suggest_local_fallback() {
    cmd()
        .args(["suggest", &get_fixture_path("article.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("search"));
}

#[test]
fn test_cli_suggest_with_model_response() {
    cmd()
        .args([
            "suggest",
            "-r",
            &get_fixture_path("oracle_enhancement.json"),
            &get_fixture_path("article.txt"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("clear writing"));
}

#[test]
fn test_cli_suggest_with_garbage_response() {
    cmd()
        .args([
            "suggest",
            "-r",
            &get_fixture_path("oracle_garbage.txt"),
            &get_fixture_path("article.txt"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("search"));
}

#[test]
fn test_cli_invalid_file() {
    cmd().args(["analyze", "nonexistent.txt"]).assert().failure();
}

#[test]
fn test_cli_invalid_format() {
    cmd()
        .args(["analyze", "-f", "yaml", &get_fixture_path("article.txt")])
        .assert()
        .failure();
}

#[test]
fn test_cli_requires_subcommand() {
    cmd().assert().failure();
}
