//! Integration tests for the tscan CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{name}")
}

fn process(out: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tscan").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("verhaal.json"))
        .arg("-c")
        .arg(fixture_path("tscan.toml"))
        .arg("-o")
        .arg(out.path())
        .arg("-q");
    cmd
}

#[test]
fn test_process_writes_all_reports() {
    let out = TempDir::new().unwrap();
    process(&out).assert().success();

    for suffix in [
        "document.csv",
        "paragraphs.csv",
        "sentences.csv",
        "words.csv",
        "metrics.json",
        "problems.csv",
    ] {
        assert!(
            out.path().join(format!("verhaal.{suffix}")).is_file(),
            "missing verhaal.{suffix}"
        );
    }

    let document = fs::read_to_string(out.path().join("verhaal.document.csv")).unwrap();
    let mut lines = document.lines();
    assert!(lines
        .next()
        .unwrap()
        .starts_with("Inputfile,Par_per_doc,Zin_per_doc,Word_per_doc,Alpino_status,"));
    // the last sentence carries no stored parse
    assert!(lines.next().unwrap().starts_with("verhaal.json,2,3,15,1,"));

    let sentences = fs::read_to_string(out.path().join("verhaal.sentences.csv")).unwrap();
    assert_eq!(sentences.lines().count(), 4);
    assert!(sentences.contains("verhaal.json,p.1.s.1,\"De hond blaft omdat hij honger heeft .\","));
    assert!(sentences.contains("verhaal.json,p.2.s.1,"));

    let paragraphs = fs::read_to_string(out.path().join("verhaal.paragraphs.csv")).unwrap();
    assert!(paragraphs.contains("verhaal.json,p.1,2,11,0,"));
}

#[test]
fn test_metrics_tree_is_written() {
    let out = TempDir::new().unwrap();
    process(&out).assert().success();

    let text = fs::read_to_string(out.path().join("verhaal.metrics.json")).unwrap();
    let metrics: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(metrics["level"], "document");
    let paragraphs = metrics["children"].as_array().unwrap();
    assert_eq!(paragraphs.len(), 2);
    let question = &paragraphs[1]["children"][0]["metrics"];
    assert!(question
        .as_array()
        .unwrap()
        .iter()
        .any(|m| m["class"] == "isQuestion" && m["value"] == "true"));
}

#[test]
fn test_problem_log_lists_unknown_verbs() {
    let out = TempDir::new().unwrap();
    process(&out).assert().success();

    let problems = fs::read_to_string(out.path().join("verhaal.problems.csv")).unwrap();
    assert!(problems.starts_with("missing,word,lemma,voll_lemma\n"));
    assert!(problems.contains("verb,blaft,blaffen,"));
    // nouns are covered by the fixture lexicon
    assert!(!problems.contains("noun,hond"));
}

#[test]
fn test_skip_csv_and_parser() {
    let out = TempDir::new().unwrap();
    process(&out).arg("--skip=c").assert().success();
    assert!(!out.path().join("verhaal.document.csv").exists());
    assert!(out.path().join("verhaal.metrics.json").exists());

    let out = TempDir::new().unwrap();
    process(&out).arg("--skip=p").assert().success();
    let document = fs::read_to_string(out.path().join("verhaal.document.csv")).unwrap();
    assert!(document.lines().nth(1).unwrap().starts_with("verhaal.json,2,3,15,-1,"));
}

#[test]
fn test_modes_write_identical_tables() {
    let sequential = TempDir::new().unwrap();
    process(&sequential).args(["-m", "sequential"]).assert().success();
    let parallel = TempDir::new().unwrap();
    process(&parallel).args(["-m", "parallel"]).assert().success();

    for name in ["verhaal.sentences.csv", "verhaal.words.csv"] {
        assert_eq!(
            fs::read_to_string(sequential.path().join(name)).unwrap(),
            fs::read_to_string(parallel.path().join(name)).unwrap()
        );
    }
}

#[test]
fn test_invalid_skip_letter() {
    let out = TempDir::new().unwrap();
    process(&out)
        .arg("--skip=x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid skip option 'x'"));
}

#[test]
fn test_word_without_pos_fails() {
    let out = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("tscan").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("broken.json"))
        .arg("-o")
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("doesn't have POS tag info"));
}

#[test]
fn test_no_matching_files() {
    let mut cmd = Command::cargo_bin("tscan").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg("tests/fixtures/*.nothing")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_validate_fixture_settings() {
    let mut cmd = Command::cargo_bin("tscan").unwrap();
    cmd.arg("validate")
        .arg("-c")
        .arg(fixture_path("tscan.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings are valid"))
        .stdout(predicate::str::contains("nouns"))
        .stdout(predicate::str::contains("connectives"));
}

#[test]
fn test_validate_rejects_lsa() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tscan.toml");
    fs::write(&path, "[services]\nuse_lsa = true\n").unwrap();

    let mut cmd = Command::cargo_bin("tscan").unwrap();
    cmd.arg("validate")
        .arg("-c")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("LSA is not supported"));
}

#[test]
fn test_generate_config() {
    let mut cmd = Command::cargo_bin("tscan").unwrap();
    cmd.arg("generate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[analysis]"))
        .stdout(predicate::str::contains("mtld_threshold = 0.72"))
        .stdout(predicate::str::contains("[lexicons]"));
}
