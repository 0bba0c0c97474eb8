//! CLI integration tests driving the compiled binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn dnastat() -> Command {
    Command::cargo_bin("dnastat").unwrap()
}

// ============================================
// Analyze Command Tests
// ============================================

#[test]
fn analyze_file_prints_summary() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reads.fasta");
    fs::write(&path, ">seq1\nACGT\nACGT\n").unwrap();

    dnastat()
        .arg("analyze")
        .arg(&path)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("reads.fasta"))
        .stdout(predicate::str::contains("Total Length: 8"))
        .stdout(predicate::str::contains("GC Content:   50.00%"));
}

#[test]
fn analyze_reads_stdin_when_no_file_given() {
    dnastat()
        .arg("analyze")
        .arg("--quiet")
        .write_stdin("ACGTACGTAC")
        .assert()
        .success()
        .stdout(predicate::str::contains("pasted sequence"))
        .stdout(predicate::str::contains("Total Length: 10"))
        .stdout(predicate::str::contains("A:3 C:3 G:2 T:2"));
}

#[test]
fn analyze_out_writes_csv_export() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("reads.txt");
    let out = dir.path().join("stats.csv");
    fs::write(&input, "ACGTACGTAC").unwrap();

    dnastat()
        .arg("analyze")
        .arg(&input)
        .arg("--quiet")
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported CSV to:"));

    let csv = fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("Base,Count,Percentage\n"));
    assert!(csv.contains("GC Content,50.00%"));
    assert!(csv.contains("Total Length,10"));
}

#[test]
fn analyze_empty_input_fails() {
    dnastat()
        .arg("analyze")
        .arg("--quiet")
        .write_stdin(">header only\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no sequence data"));
}

#[test]
fn analyze_missing_file_fails_with_path() {
    dnastat()
        .arg("analyze")
        .arg("/nonexistent/reads.fasta")
        .arg("--quiet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read sequence file"));
}

#[test]
fn analyze_warns_about_invalid_characters() {
    dnastat()
        .arg("analyze")
        .arg("--quiet")
        .write_stdin("ACGTN")
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid characters ignored"))
        .stdout(predicate::str::contains("Total Length: 4"));
}

#[test]
fn analyze_multiple_files_prints_history() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.seq");
    let b = dir.path().join("b.seq");
    fs::write(&a, "AAAA").unwrap();
    fs::write(&b, "GGGGGG").unwrap();

    dnastat()
        .arg("analyze")
        .arg(&a)
        .arg(&b)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Results history (newest first):"))
        .stdout(predicate::str::contains("b.seq - 6 bases"))
        .stdout(predicate::str::contains("a.seq - 4 bases"));
}

#[test]
fn analyze_window_size_override_changes_profile() {
    dnastat()
        .arg("analyze")
        .arg("--quiet")
        .arg("--window-size")
        .arg("4")
        .write_stdin("ACGTACGT")
        .assert()
        .success()
        .stdout(predicate::str::contains("GC Windows:   2"));
}

// ============================================
// Config Command Tests
// ============================================

#[test]
fn config_path_prints_toml_location() {
    dnastat()
        .arg("config")
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_show_prints_analysis_section() {
    dnastat()
        .arg("config")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("[analysis]"))
        .stdout(predicate::str::contains("chunk_size"));
}

// ============================================
// Completions Command Tests
// ============================================

#[test]
fn completions_bash_emits_script() {
    dnastat()
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("dnastat"));
}

#[test]
fn completions_rejects_unknown_shell() {
    dnastat()
        .arg("completions")
        .arg("notashell")
        .assert()
        .failure();
}
