#![allow(missing_docs, clippy::tests_outside_test_module)]

use std::process::{Command, Output};

use assert_cmd::cargo::CommandCargoExt;

#[allow(deprecated)]
fn run(args: &[&str]) -> Output {
    let mut cmd = Command::cargo_bin("hpath").expect("binary exists");
    cmd.env_remove("RUST_LOG");
    cmd.args(args).output().expect("hpath runs")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn point_prints_coordinate() {
    let out = run(&["point", "-d", "2", "-n", "1", "1"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "(0, 1)\n");

    let out = run(&["point", "-d", "2", "-n", "3", "45"]);
    assert_eq!(stdout(&out), "(6, 5)\n");
}

#[test]
fn index_prints_path_position() {
    let out = run(&["index", "-d", "3", "-n", "2", "3", "0", "0"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "63\n");
}

#[test]
fn path_lists_every_cell() {
    let out = run(&["path", "-d", "2", "-n", "1"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "0: (0, 0)\n1: (0, 1)\n2: (1, 1)\n3: (1, 0)\n");

    let out = run(&["path", "-d", "2", "-n", "2", "--chunk", "14:16"]);
    assert_eq!(stdout(&out), "14: (2, 0)\n15: (3, 0)\n");
}

#[test]
fn degenerate_curve_has_one_cell() {
    let out = run(&["path", "-d", "4", "-n", "0"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "0: (0, 0, 0, 0)\n");
}

#[test]
fn check_passes() {
    for dimension in ["2", "3", "4"] {
        let out = run(&["check", "-d", dimension, "-n", "3"]);
        assert!(out.status.success(), "check failed for {dimension}D");
        assert!(stdout(&out).starts_with("OK!"));
    }
}

#[test]
fn out_of_range_index_fails() {
    let out = run(&["point", "-d", "2", "-n", "2", "16"]);
    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("out of range"), "stderr: {err}");
}

#[test]
fn out_of_range_coordinate_fails() {
    let out = run(&["index", "-d", "2", "-n", "2", "4", "0"]);
    assert!(!out.status.success());
}

#[test]
fn dimension_mismatch_fails() {
    let out = run(&["index", "-d", "3", "-n", "2", "1", "1"]);
    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("3 dimensions"), "stderr: {err}");
}

#[test]
fn invalid_spec_fails() {
    let out = run(&["point", "-d", "3", "-n", "22", "0"]);
    assert!(!out.status.success());
    let out = run(&["point", "-d", "0", "-n", "1", "0"]);
    assert!(!out.status.success());
}

#[test]
fn chunk_past_end_fails() {
    let out = run(&["path", "-d", "2", "-n", "1", "--chunk", "2:9"]);
    assert!(!out.status.success());
}

#[test]
fn chunk_reaches_last_cell_of_full_width_curve() {
    let out = run(&[
        "path",
        "-d",
        "2",
        "-n",
        "32",
        "--chunk",
        "18446744073709551615:18446744073709551616",
    ]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "18446744073709551615: (4294967295, 0)\n");
}
