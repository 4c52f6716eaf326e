use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

const FIRST_PROMPT: &str = "Enter the name of the first country (type EXIT to quit): ";
const SECOND_PROMPT: &str = "Enter the name of the second country (type EXIT to quit): ";

fn cli() -> Command {
    let fixtures = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .canonicalize()
        .expect("fixture feeds present");
    let mut cmd = cargo_bin_cmd!("roadtrip");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .arg("--data-dir")
        .arg(fixtures);
    cmd
}

#[test]
fn interactive_is_the_default_command() {
    cli()
        .write_stdin("Belgium\nSwitzerland\nEXIT\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(FIRST_PROMPT))
        .stdout(predicate::str::contains(
            "Route from Belgium to Switzerland:\n\
             * Belgium --> France (262 km.)\n\
             * France --> Switzerland (435 km.)\n",
        ));
}

#[test]
fn invalid_names_are_rejected_and_reprompted() {
    cli()
        .arg("interactive")
        .write_stdin("Atlantis\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{FIRST_PROMPT}Invalid country name. Please enter a valid country name.\n{FIRST_PROMPT}"
        )));
}

#[test]
fn unreachable_pair_reports_no_path() {
    cli()
        .arg("interactive")
        .write_stdin("Japan\nCanada\n")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{FIRST_PROMPT}{SECOND_PROMPT}No path found.\n{FIRST_PROMPT}"
        )));
}

#[test]
fn historical_name_routes_to_canonical_node() {
    cli()
        .arg("interactive")
        .write_stdin("German Federal Republic\nswitzerland\nEXIT\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route from Germany to Switzerland:\n* Germany --> Switzerland (753 km.)\n",
        ));
}
