use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .canonicalize()
        .expect("fixture feeds present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("roadtrip");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env_remove("ROADTRIP_DATA_DIR")
        .arg("--data-dir")
        .arg(fixtures_dir());
    cmd
}

#[test]
fn route_prints_each_crossing() {
    cli()
        .args(["route", "--from", "Canada", "--to", "Guatemala"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route from Canada to Guatemala:"))
        .stdout(predicate::str::contains(
            "* Canada --> United States of America (737 km.)",
        ))
        .stdout(predicate::str::contains("* Mexico --> Guatemala (1064 km.)"))
        .stdout(predicate::str::contains("Total: 4,835 km over 3 borders"));
}

#[test]
fn route_accepts_aliases() {
    cli()
        .args(["route", "--from", "US", "--to", "Belize"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Route from United States of America to Belize:",
        ));
}

#[test]
fn json_format_outputs_summary() {
    cli()
        .args(["--format", "json", "route", "--from", "Belgium", "--to", "Switzerland"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_km\": 697"))
        .stdout(predicate::str::contains("\"to\": \"France\""));
}

#[test]
fn rich_format_outputs_markdown() {
    cli()
        .args(["route", "--from", "Luxembourg", "--to", "Switzerland", "--format", "rich"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**Route**"))
        .stdout(predicate::str::contains("722 km"));
}

#[test]
fn unknown_country_error_is_friendly() {
    cli()
        .args(["route", "--from", "Canda", "--to", "Mexico"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown country 'Canda'"))
        .stderr(predicate::str::contains("Did you mean 'Canada'?"));
}

#[test]
fn disconnected_countries_report_no_route() {
    cli()
        .args(["route", "--from", "Belize", "--to", "Luxembourg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "No route found between Belize and Luxembourg.",
        ));
}

#[test]
fn directional_hint_is_shown() {
    cli()
        .args(["--directional", "route", "--from", "Japan", "--to", "Canada"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("without --directional"));
}

#[test]
fn distance_command_resolves_names() {
    cli()
        .args(["distance", "--from", "Congo", "--to", "Gabon"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Republic of the Congo -> Gabon: 841 km\n"));
}

#[test]
fn resolve_command_reports_short_id() {
    cli()
        .args(["resolve", "German Federal Republic"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "German Federal Republic -> Germany (GMY)\n  also known as: German Federal Republic\n",
        ));
}

#[test]
fn resolve_json_reports_miss() {
    cli()
        .args(["--format", "json", "resolve", "Atlantis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"resolved\": false"))
        .stdout(predicate::str::contains("\"canonical\": \"Atlantis\""));
}

#[test]
fn missing_feeds_fail_with_context() {
    let temp = tempdir().expect("create temp dir");
    let mut cmd = cargo_bin_cmd!("roadtrip");
    cmd.env("RUST_LOG", "error")
        .env_remove("ROADTRIP_DATA_DIR")
        .arg("--data-dir")
        .arg(temp.path())
        .args(["route", "--from", "Canada", "--to", "Mexico"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to load the country feeds"))
        .stderr(predicate::str::contains("distance feed not found"));
}

#[test]
fn data_dir_env_var_is_honoured() {
    let mut cmd = cargo_bin_cmd!("roadtrip");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env("ROADTRIP_DATA_DIR", fixtures_dir())
        .args(["distance", "--from", "Canada", "--to", "United States"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("737 km"));
}

#[test]
fn lenient_flag_skips_malformed_records() {
    let temp = tempdir().expect("create temp dir");
    for name in ["capdist.csv", "state_name.tsv", "borders.txt"] {
        fs::copy(fixtures_dir().join(name), temp.path().join(name)).expect("copy fixture");
    }
    let names = temp.path().join("state_name.tsv");
    let mut contents = fs::read_to_string(&names).expect("read names");
    contents.push_str("999\tXXX\n");
    fs::write(&names, contents).expect("write names");

    let mut strict = cargo_bin_cmd!("roadtrip");
    strict
        .env("RUST_LOG", "error")
        .arg("--data-dir")
        .arg(temp.path())
        .args(["resolve", "Canada"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed name record on line 17"));

    let mut lenient = cargo_bin_cmd!("roadtrip");
    lenient
        .env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .arg("--data-dir")
        .arg(temp.path())
        .arg("--lenient")
        .args(["resolve", "Canada"])
        .assert()
        .success()
        .stderr(predicate::str::contains("skipped 1 malformed feed record(s)"))
        .stdout(predicate::str::diff("Canada -> Canada (CAN)\n"));
}

#[test]
fn per_feed_override_is_used() {
    let temp = tempdir().expect("create temp dir");
    let borders = temp.path().join("only-canada.txt");
    fs::write(&borders, "Canada = United States 8,891 km\n").expect("write borders");

    cli()
        .arg("--borders")
        .arg(&borders)
        .args(["route", "--from", "Canada", "--to", "Mexico"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No route found"));
}
