use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("signin")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("--email"));
}

#[test]
fn test_login_help_mentions_password_env() {
    cargo_bin_cmd!("signin")
        .args(["login", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SIGNIN_PASSWORD"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("signin")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}
