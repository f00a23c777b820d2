use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Pin the year so results do not depend on the clock.
fn bounds(dir: &TempDir) -> PathBuf {
    write(dir, "validation.toml", "current_year = 2025\n")
}

/// An empty env file keeps a stray `.env` from leaking into the run.
fn empty_env(dir: &TempDir) -> PathBuf {
    write(dir, "test.env", "")
}

fn catalogctl(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("catalogctl");
    cmd.current_dir(dir.path())
        .env_remove("CATALOG_VALIDATION_PATH")
        .env_remove("CATALOG_VALIDATION_JSON")
        .arg("--config")
        .arg(bounds(dir))
        .arg("--env-file")
        .arg(empty_env(dir));
    cmd
}

fn valid_movie_form(dir: &TempDir) -> PathBuf {
    write(
        dir,
        "movie.json",
        r#"{
            "czechName": "Pelíšky",
            "originalName": "Pelíšky",
            "year": "1999",
            "language": "CZ",
            "media": [{"hours": "1", "minutes": "56", "seconds": "0"}],
            "imdb": true,
            "imdbCode": "0167261",
            "genres": [1, 4]
        }"#,
    )
}

fn stdout_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).unwrap()
}

#[test]
fn help_lists_commands() {
    let mut cmd = cargo_bin_cmd!("catalogctl");
    let out = cmd.arg("--help").assert().success().get_output().stdout.clone();
    let text = String::from_utf8_lossy(&out);
    for command in ["check", "to-entity", "to-form", "rules"] {
        assert!(text.contains(command), "help missing {command}");
    }
}

#[test]
fn check_accepts_valid_movie() {
    let dir = TempDir::new().unwrap();
    let form = valid_movie_form(&dir);

    catalogctl(&dir)
        .arg("check")
        .arg("movie")
        .arg(&form)
        .assert()
        .success()
        .stdout(predicate::str::contains("movie form is valid"));
}

#[test]
fn check_rejects_book_without_language() {
    let dir = TempDir::new().unwrap();
    let form =
        write(&dir, "book.json", r#"{"author": "Čapek", "title": "R.U.R."}"#);

    catalogctl(&dir)
        .arg("check")
        .arg("book")
        .arg(&form)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "at least one language must be selected",
        ));
}

#[test]
fn check_json_report_lists_paths() {
    let dir = TempDir::new().unwrap();
    let form = write(
        &dir,
        "episode.json",
        r#"{
            "number": "0",
            "name": "Pilot",
            "length": {"hours": "0", "minutes": "0", "seconds": "0"}
        }"#,
    );

    let out = catalogctl(&dir)
        .args(["check", "episode"])
        .arg(&form)
        .arg("--json")
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report = stdout_json(&out);
    let paths: Vec<&str> = report
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["number", "length"]);
}

#[test]
fn to_entity_renumbers_and_derives_imdb_code() {
    let dir = TempDir::new().unwrap();
    let form = valid_movie_form(&dir);

    let out = catalogctl(&dir)
        .args(["to-entity", "movie"])
        .arg(&form)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let movie = stdout_json(&out);
    assert_eq!(movie["imdbCode"], 167_261);
    assert_eq!(movie["year"], 1999);
    assert_eq!(movie["media"][0]["number"], 1);
    assert_eq!(movie["media"][0]["length"], 6_960);
    assert_eq!(
        movie["genres"][1],
        serde_json::json!({"kind": "reference", "id": 4})
    );
}

#[test]
fn to_entity_refuses_invalid_form() {
    let dir = TempDir::new().unwrap();
    let form = write(&dir, "genre.json", r#"{"name": "  "}"#);

    catalogctl(&dir)
        .args(["to-entity", "genre"])
        .arg(&form)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("name: must not be blank"));
}

#[test]
fn to_form_splits_lengths() {
    let dir = TempDir::new().unwrap();
    let song = write(
        &dir,
        "song.json",
        r#"{"id": 3, "name": "Track", "length": 3725}"#,
    );

    let out = catalogctl(&dir)
        .args(["to-form", "song"])
        .arg(&song)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let form = stdout_json(&out);
    assert_eq!(
        form["length"],
        serde_json::json!({"hours": "1", "minutes": "2", "seconds": "5"})
    );
}

#[test]
fn book_has_no_mapper() {
    let dir = TempDir::new().unwrap();
    let form = write(
        &dir,
        "book.json",
        r#"{"author": "a", "title": "b", "czech": true}"#,
    );

    catalogctl(&dir)
        .args(["to-entity", "book"])
        .arg(&form)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no book mapper"));
}

#[test]
fn rules_reflect_configured_bounds() {
    let dir = TempDir::new().unwrap();

    catalogctl(&dir)
        .args(["rules", "season"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "startYear: must be a four digit year between 1930 and 2025",
        ))
        .stdout(predicate::str::contains(
            "(form): start year must not be after end year",
        ));
}

#[test]
fn unknown_kind_is_a_usage_error() {
    let dir = TempDir::new().unwrap();

    catalogctl(&dir)
        .args(["rules", "album"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown form kind"));
}

#[test]
fn impossible_bounds_fail_fast() {
    let dir = TempDir::new().unwrap();
    let config =
        write(&dir, "bad.toml", "min_year = 2030\ncurrent_year = 2020\n");

    let mut cmd = cargo_bin_cmd!("catalogctl");
    cmd.current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("--env-file")
        .arg(empty_env(&dir))
        .args(["rules", "movie"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load validation bounds"));
}

#[test]
fn missing_env_file_is_reported() {
    let dir = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("catalogctl");
    cmd.current_dir(dir.path())
        .arg("--config")
        .arg(bounds(&dir))
        .arg("--env-file")
        .arg(Path::new("absent.env"))
        .args(["rules", "movie"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("env file absent.env does not exist"));
}

#[test]
fn info_logging_reports_the_bounds_source() {
    let dir = TempDir::new().unwrap();

    catalogctl(&dir)
        .env("RUST_LOG", "info")
        .args(["rules", "genre"])
        .assert()
        .success()
        .stderr(predicate::str::contains("catalogctl ready"))
        .stderr(predicate::str::contains("validation.toml"));
}
