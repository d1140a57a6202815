use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_string_analyzer"))
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("string_analyzer"))
        .stdout(predicate::str::contains("--input-string"));
}

#[test]
fn prints_input_and_basic_counts() {
    bin()
        .args(["--input-string", "abc 123!"])
        .assert()
        .success()
        .stdout("input_string: abc 123!\n{numeric: 3, alphabet: 3, non_alphanumeric: 2, other: 0}\n");
}

#[test]
fn comprehensive_flag_switches_buckets() {
    bin()
        .args(["--input_string", "$", "--is_comprehensive"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "{numeric: 0, lower_letter: 0, upper_letter: 0, ascii: 0, extended_ascii: 0, extended_alphabet: 0, symbols: 1, other: 0}",
        ));
}

#[test]
fn missing_input_fails_with_usage() {
    bin()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--input-string"));
}

#[test]
fn empty_input_is_accepted() {
    bin()
        .args(["--input-string", "", "--hide-input"])
        .assert()
        .success()
        .stdout("{numeric: 0, alphabet: 0, non_alphanumeric: 0, other: 0}\n");
}
