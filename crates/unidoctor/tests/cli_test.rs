// CLI surface smoke tests. Anything touching the network is covered by
// the api crate's wiremock tests; these only exercise argument parsing.

use assert_cmd::Command;
use predicates::prelude::*;

fn unidoctor() -> Command {
    Command::cargo_bin("unidoctor").expect("binary builds")
}

#[test]
fn help_lists_commands() {
    unidoctor()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("channels"))
        .stdout(predicate::str::contains("apply-plan"));
}

#[test]
fn version_prints() {
    unidoctor()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("unidoctor"));
}

#[test]
fn no_args_shows_usage() {
    unidoctor()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    unidoctor().arg("frobnicate").assert().failure().code(2);
}

#[test]
fn completions_generate_for_bash() {
    unidoctor()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unidoctor"));
}
