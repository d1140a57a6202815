use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_string_analyzer"))
}

fn run_json(args: &[&str]) -> Value {
    let output = bin().args(args).args(["--format", "json"]).output().expect("binary runs");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("valid JSON")
}

#[test]
fn json_counts_partition_the_input() {
    let input = "Prix: 12€ ± 3%, café";
    let json = run_json(&["--input-string", input, "-c"]);
    let counts = json["counts"].as_object().expect("counts object");
    let sum: u64 = counts.values().map(|v| v.as_u64().unwrap()).sum();
    assert_eq!(sum, input.chars().count() as u64);
    assert_eq!(json["total"], sum);
    assert_eq!(json["mode"], "comprehensive");
    assert_eq!(json["input"], input);
}

#[test]
fn json_reports_buckets_in_scheme_order() {
    let json = run_json(&["--input-string", "\u{7}", "--hide-input"]);
    let keys: Vec<&str> = json["counts"].as_object().unwrap().keys().map(String::as_str).collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, ["alphabet", "non_alphanumeric", "numeric", "other"]);
    assert_eq!(json["counts"]["other"], 1);
    assert!(json.get("input").is_none());
}

#[test]
fn category_breakdown_is_optional() {
    let without = run_json(&["--input-string", "é€"]);
    assert!(without.get("categories").is_none());

    let with = run_json(&["--input-string", "é€", "--mode", "comprehensive", "--categories"]);
    assert_eq!(with["categories"]["alphabet_lower"], 1);
    assert_eq!(with["categories"]["currency"], 1);
}

#[test]
fn writes_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.csv");
    bin()
        .args(["--input-string", "a1", "--format", "csv", "-o"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "bucket,count\nnumeric,1\nalphabet,1\nnon_alphanumeric,0\nother,0\n");
}

#[test]
fn unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("profile.txt");
    bin()
        .args(["--input-string", "a", "-o"])
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to write file"));
}

#[test]
fn verbose_logging_goes_to_stderr() {
    bin()
        .args(["--input-string", "ab", "-vv"])
        .env_remove("STRING_ANALYZER_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("alphabet: 2"))
        .stderr(predicate::str::contains("analyzed 2 characters"));
}
