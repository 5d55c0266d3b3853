#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

const EXPECTED: &str = concat!(
    r#"{"users":[{"id":"1","name":"Albin Jaye"},{"id":"2","name":"Dipika Crescentia"},{"id":"3","name":"Ankit Sacnite"}],"#,
    r#""songs":[{"id":"1","artist":"Camila Cabello","title":"Never Be the Same"},{"id":"2","artist":"Zedd","title":"The Middle"},{"id":"3","artist":"The Weeknd","title":"Pray For Me"},{"id":"4","artist":"Drake","title":"God's Plan"},{"id":"5","artist":"Bebe Rexha","title":"Meant to Be"},{"id":"6","artist":"Imagine Dragons","title":"Whatever It Takes"}],"#,
    r#""playlists":[{"id":"2","user_id":"3","song_ids":["1","2","5"]},{"id":"3","user_id":"1","song_ids":["2","6"]},{"id":"4","user_id":"1","song_ids":["1","5"]}]}"#,
    "\n"
);

fn fixture(name: &str) -> String {
    Path::new(FIXTURES).join(name).display().to_string()
}

/// A command isolated from the user's own config.
fn mixtape_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mixtape").unwrap();
    cmd.env("MIXTAPE_CONFIG_DIR", config_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn replays_changes_from_stdin() {
    let temp = TempDir::new().unwrap();
    let records = fs::read_to_string(fixture("mixtape.json")).unwrap();

    mixtape_cmd(&temp)
        .arg(fixture("changes.json"))
        .write_stdin(records)
        .assert()
        .success()
        .stdout(EXPECTED)
        .stderr(predicate::str::contains(
            "Song not found. Operation AddSong failed.",
        ))
        .stderr(predicate::str::contains(
            "User not found. Operation AddPlaylist failed.",
        ))
        .stderr(predicate::str::contains(
            "Playlist not found. Operation RemovePlaylist failed.",
        ))
        .stderr(predicate::str::contains("has no song_id"));
}

#[test]
fn reads_and_writes_files() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("output.json");

    mixtape_cmd(&temp)
        .arg(fixture("changes.json"))
        .arg("--input")
        .arg(fixture("mixtape.json"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&output).unwrap(), EXPECTED);
}

#[test]
fn unknown_collection_is_reported_and_skipped() {
    let temp = TempDir::new().unwrap();
    let changes = temp.path().join("changes.json");
    fs::write(&changes, "[]").unwrap();

    mixtape_cmd(&temp)
        .arg(&changes)
        .write_stdin(r#"{"albums": [{"id": "1"}], "users": [{"id": "1", "name": "Albin Jaye"}]}"#)
        .assert()
        .success()
        .stdout(r#"{"users":[{"id":"1","name":"Albin Jaye"}],"songs":[],"playlists":[]}"#.to_string() + "\n")
        .stderr("Unprocessable collection type 'albums'.\n");
}

#[test]
fn strict_mode_exits_with_two_but_still_writes_output() {
    let temp = TempDir::new().unwrap();

    mixtape_cmd(&temp)
        .arg(fixture("changes.json"))
        .arg("--input")
        .arg(fixture("mixtape.json"))
        .arg("--strict")
        .assert()
        .code(2)
        .stdout(EXPECTED);
}

#[test]
fn strict_mode_can_come_from_config() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.json"), r#"{"strict": true}"#).unwrap();

    mixtape_cmd(&temp)
        .arg(fixture("changes.json"))
        .arg("--input")
        .arg(fixture("mixtape.json"))
        .assert()
        .code(2);
}

#[test]
fn clean_strict_run_succeeds() {
    let temp = TempDir::new().unwrap();
    let changes = temp.path().join("changes.json");
    fs::write(
        &changes,
        r#"[{"optype": "AddSong", "playlist_id": "1", "song_id": "6"}]"#,
    )
    .unwrap();

    mixtape_cmd(&temp)
        .arg(&changes)
        .arg("--input")
        .arg(fixture("mixtape.json"))
        .arg("--strict")
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout(predicate::str::contains(
            r#"{"id":"1","user_id":"2","song_ids":["3","4","6"]}"#,
        ));
}

#[test]
fn pretty_output_is_indented() {
    let temp = TempDir::new().unwrap();

    mixtape_cmd(&temp)
        .arg(fixture("changes.json"))
        .arg("--input")
        .arg(fixture("mixtape.json"))
        .arg("--pretty")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\n  \"users\": [\n"));
}

#[test]
fn unknown_optype_is_fatal() {
    let temp = TempDir::new().unwrap();
    let changes = temp.path().join("changes.json");
    fs::write(&changes, r#"[{"optype": "RenameSong", "id": "1"}]"#).unwrap();

    mixtape_cmd(&temp)
        .arg(&changes)
        .arg("--input")
        .arg(fixture("mixtape.json"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("RenameSong"));
}

#[test]
fn malformed_operation_is_reported_not_fatal() {
    let temp = TempDir::new().unwrap();
    let changes = temp.path().join("changes.json");
    fs::write(
        &changes,
        r#"[{"optype": "AddSong", "playlist_id": "1"}, {"optype": "RemovePlaylist", "id": "1"}]"#,
    )
    .unwrap();

    mixtape_cmd(&temp)
        .arg(&changes)
        .arg("--input")
        .arg(fixture("mixtape.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Invalid definition: missing field `song_id`. Operation AddSong failed.",
        ))
        .stdout(predicate::str::contains(r#""playlists":[{"id":"2""#));
}

#[test]
fn missing_changes_file_is_fatal() {
    let temp = TempDir::new().unwrap();

    mixtape_cmd(&temp)
        .arg(temp.path().join("nope.json"))
        .write_stdin("{}")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nope.json"));
}

#[test]
fn malformed_records_are_fatal() {
    let temp = TempDir::new().unwrap();

    mixtape_cmd(&temp)
        .arg(fixture("changes.json"))
        .write_stdin(r#"{"users": "everyone"}"#)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "collection 'users' must be a list",
        ));
}

#[test]
fn bad_config_is_fatal() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("mixtape.json");
    fs::write(&config, r#"{"batch_size": 0}"#).unwrap();

    mixtape_cmd(&temp)
        .arg(fixture("changes.json"))
        .arg("--config")
        .arg(&config)
        .write_stdin("{}")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("batch_size"));
}
