use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn numerology() -> Command {
    Command::new(env!("CARGO_BIN_EXE_numerology"))
}

#[test]
fn reads_every_line_including_empty_ones() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, "cat\n\n dog \n").unwrap();

    numerology()
        .args(["-f", "-p", "-u"])
        .arg(&path)
        .assert()
        .success()
        .stdout("cat: 6\n: 0\n dog : 17\n");
}

#[test]
fn last_line_without_newline() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tail.txt");
    fs::write(&path, "a\nb").unwrap();

    numerology()
        .args(["--file", "--chaldean", "--simple"])
        .arg(&path)
        .assert()
        .success()
        .stdout("1/1\n2/2\n");
}

#[test]
fn files_are_processed_in_order() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("1.txt");
    let second = dir.path().join("2.txt");
    fs::write(&first, "b\n").unwrap();
    fs::write(&second, "a\n").unwrap();

    numerology()
        .args(["-f", "-p", "-r", "-s"])
        .arg(&first)
        .arg(&second)
        .assert()
        .success()
        .stdout("2\n1\n");
}

#[test]
fn missing_file_aborts_after_earlier_output() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.txt");
    fs::write(&good, "cat\n").unwrap();
    let missing = dir.path().join("missing.txt");
    let after = dir.path().join("after.txt");
    fs::write(&after, "dog\n").unwrap();

    numerology()
        .args(["-f", "-p", "-s"])
        .arg(&good)
        .arg(&missing)
        .arg(&after)
        .assert()
        .failure()
        .stdout("6/6\n")
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn empty_file_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    numerology().arg("-f").arg(&path).assert().success().stdout("");
}

#[test]
fn lone_carriage_return_ends_a_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mac.txt");
    fs::write(&path, "a\rb\nc\r\r\n").unwrap();

    numerology()
        .args(["-f", "-p", "-u"])
        .arg(&path)
        .assert()
        .success()
        .stdout("a: 1\nb: 2\nc: 3\n: 0\n");
}

#[test]
fn crlf_file_matches_lf_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dos.txt");
    fs::write(&path, "cat\r\n\r\ndog\r\n").unwrap();

    numerology()
        .args(["-f", "-p", "-u"])
        .arg(&path)
        .assert()
        .success()
        .stdout("cat: 6\n: 0\ndog: 17\n");
}
