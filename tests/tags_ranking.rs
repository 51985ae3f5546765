//! `upsolve tags` output, checked with insta snapshots.

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;

mod util;
use util::{HANDLE, make_round_fixture};

#[test]
fn ranking_json_is_rarest_first()
{
    let tmp = make_round_fixture();

    let out = Command::cargo_bin("upsolve")
        .expect("bin")
        .current_dir(tmp.path())
        .args(["--quiet", "tags", HANDLE, "--snapshot-dir", ".", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: Value = serde_json::from_slice(&out).expect("valid json");

    insta::assert_yaml_snapshot!(v, @r"
    - count: 1
      index: 0
      tag: brute force
    - count: 1
      index: 1
      tag: data structures
    - count: 2
      index: 2
      tag: graphs
    - count: 2
      index: 3
      tag: dp
    ");
}

#[test]
fn ranking_text_lines()
{
    let tmp = make_round_fixture();

    Command::cargo_bin("upsolve")
        .expect("bin")
        .current_dir(tmp.path())
        .args(["--quiet", "--no-color", "tags", HANDLE, "--snapshot-dir", "."])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0. brute force: 1\n1. data structures: 1\n"));
}

#[test]
fn tags_without_handle_fails()
{
    let tmp = assert_fs::TempDir::new().expect("tempdir");

    Command::cargo_bin("upsolve")
        .expect("bin")
        .current_dir(tmp.path())
        .args(["tags", "--snapshot-dir", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No handle given"));
}
