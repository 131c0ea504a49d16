// SPDX-FileCopyrightText: 2025 xfnw
//
// SPDX-License-Identifier: MPL-2.0

use std::{
    ffi::OsStr,
    io::Write,
    path::Path,
    process::{Command, Output, Stdio},
};

static BIN: &str = env!("CARGO_BIN_EXE_ipfilter");
static DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data");

fn command_output(args: impl IntoIterator<Item = impl AsRef<OsStr>>, input: &str) -> Output {
    let mut child = Command::new(BIN)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout_of(args: &[&str], input: &str) -> String {
    let output = command_output(args, input);
    dbg!(str::from_utf8(&output.stderr).unwrap());
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

fn snapshot(args: &[&str], expected: &str) {
    let sample = Path::new(DATA_DIR).join("sample.tsv");
    let mut args = args.to_vec();
    args.push(sample.to_str().unwrap());
    let output = stdout_of(&args, "");
    let expected = std::fs::read_to_string(Path::new(DATA_DIR).join(expected)).unwrap();

    let mut lines = output.lines();
    for (n, el) in expected.lines().enumerate() {
        assert_eq!(lines.next().unwrap(), el, "line {}", n + 1);
    }
    assert_eq!(lines.next(), None);
}

#[test]
fn sort_two() {
    assert_eq!(
        stdout_of(&["sort"], "1.2.3.4\tX\n5.6.7.8\tY\n"),
        "5.6.7.8\n1.2.3.4\n"
    );
}

#[test]
fn prefix_first() {
    assert_eq!(
        stdout_of(&["prefix", "-o", "1"], "1.2.3.4\n1.2.9.9\n2.0.0.0\n"),
        "1.2.3.4\n1.2.9.9\n"
    );
}

#[test]
fn prefix_pair() {
    assert_eq!(
        stdout_of(&["prefix", "-o", "1", "-o", "2"], "1.2.3.4\n1.9.3.4\n"),
        "1.2.3.4\n"
    );
}

#[test]
fn prefix_nothing() {
    assert_eq!(stdout_of(&["prefix"], "1.2.3.4\n1.9.3.4\n"), "");
}

#[test]
fn any_position() {
    assert_eq!(
        stdout_of(
            &["any", "46"],
            "46.1.2.3\n1.46.2.3\n1.2.46.3\n1.2.3.46\n1.2.3.4\n"
        ),
        "46.1.2.3\n1.46.2.3\n1.2.46.3\n1.2.3.46\n"
    );
}

#[test]
fn any_sorted() {
    assert_eq!(
        stdout_of(&["any", "-s", "46"], "1.2.3.46\n46.1.2.3\n1.2.3.4\n"),
        "46.1.2.3\n1.2.3.46\n"
    );
}

#[test]
fn default_report() {
    let input = "1.2.3.4\tX\n46.70.1.1\tY\n1.46.0.0\tZ\n";
    let expected = "46.70.1.1\n1.46.0.0\n1.2.3.4\n\
                    1.46.0.0\n1.2.3.4\n\
                    46.70.1.1\n\
                    46.70.1.1\n1.46.0.0\n";
    assert_eq!(stdout_of(&[], input), expected);
    assert_eq!(stdout_of(&["report"], input), expected);
}

#[test]
fn custom_report() {
    let input = "1.2.3.4\n1.2.9.9\n5.6.7.8\n";
    let expected = "5.6.7.8\n1.2.9.9\n1.2.3.4\n\
                    5.6.7.8\n\
                    1.2.9.9\n1.2.3.4\n\
                    1.2.9.9\n";
    assert_eq!(
        stdout_of(
            &["report", "-f", "5", "-p", "1", "-p", "2", "-a", "9"],
            input
        ),
        expected
    );
}

#[test]
fn malformed() {
    let output = command_output(["sort"], "1.2.3.4\tX\n1.2.three.4\tZ\n");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("three"), "{stderr}");
    assert!(stderr.contains("line: 2"), "{stderr}");
}

#[test]
fn malformed_report() {
    let output = command_output([] as [&str; 0], "1.2.3.4\n1.2.3\n");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_file() {
    let output = command_output(["sort", "/nonexistent/ipfilter/input"], "");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn verbose() {
    let output = command_output(["-v", "sort"], "1.2.3.4\n");
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("read 1 addresses"), "{stderr}");
}

#[test]
fn sample_report() {
    snapshot(&["report"], "sample.out");
}

#[test]
fn sample_prefix() {
    snapshot(&["prefix", "-o", "46"], "sample-prefix-46.out");
}

#[test]
fn sample_any_sorted() {
    snapshot(&["any", "--sorted", "46"], "sample-any-46-sorted.out");
}
