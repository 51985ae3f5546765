use std::process::Command;

use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn init_writes_config_once()
{
    let tmp = assert_fs::TempDir::new().expect("tempdir");

    Command::cargo_bin("upsolve")
        .expect("bin")
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .success();

    tmp.child("upsolve.toml")
        .assert(predicate::str::contains("base_url = \"https://codeforces.com/api\""));

    Command::cargo_bin("upsolve")
        .expect("bin")
        .current_dir(tmp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    Command::cargo_bin("upsolve")
        .expect("bin")
        .current_dir(tmp.path())
        .args(["init", "--force"])
        .assert()
        .success();
}

#[test]
fn completions_default_to_stdout()
{
    Command::cargo_bin("upsolve")
        .expect("bin")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("upsolve"));
}

#[test]
fn completions_into_a_directory()
{
    let tmp = assert_fs::TempDir::new().expect("tempdir");
    let out = tmp.child("completions");

    Command::cargo_bin("upsolve")
        .expect("bin")
        .args(["--dry-run", "completions", "zsh", "--out-dir"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("_upsolve"));
    out.assert(predicate::path::missing());

    Command::cargo_bin("upsolve")
        .expect("bin")
        .args(["--quiet", "completions", "zsh", "--out-dir"])
        .arg(out.path())
        .assert()
        .success();
    out.child("_upsolve")
        .assert(predicate::str::starts_with("#compdef upsolve"));
}
