#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable
//! End-to-end tests for the `fernweh` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fernweh() -> Command {
    Command::cargo_bin("fernweh").unwrap()
}

/// A two-room world written to a temp directory.
fn small_world(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("world.json");
    fs::write(
        &path,
        r#"{
  "title": "Tiny House",
  "startRoom": "porch",
  "rooms": {
    "porch": {
      "name": "Porch",
      "description": "A sagging wooden porch.",
      "exits": { "n": "parlour" },
      "outside": true
    },
    "parlour": {
      "name": "Parlour",
      "description": "A dim parlour full of clocks.",
      "exits": { "s": "porch" }
    }
  },
  "objects": [
    {
      "name": "umbrella",
      "shortNames": ["brolly"],
      "article": "an",
      "location": "porch",
      "carryable": true,
      "inventorySpace": 2,
      "descriptionInitial": "An umbrella leans against the railing."
    }
  ],
  "welcomeMessages": ["Welcome to the tiny house."],
  "responses": ["Eh?"],
  "timePeriods": [{ "hour": 6, "name": "Morning", "message": "Morning light creeps in." }]
}"#,
    )
    .unwrap();
    path
}

fn prefs(dir: &TempDir) -> PathBuf {
    dir.path().join("prefs.json")
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_bundled_world() {
    fernweh()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed for 'The Cottage at Fernweh'"))
        .stdout(predicate::str::contains("6 rooms"));
}

#[test]
fn check_passes_world_file() {
    let dir = TempDir::new().unwrap();
    let world = small_world(&dir);
    fernweh()
        .args(["check", "--world"])
        .arg(&world)
        .assert()
        .success()
        .stdout(predicate::str::contains("'Tiny House'"))
        .stdout(predicate::str::contains("2 rooms, 2 exits, 1 objects, 1 time periods"));
}

#[test]
fn check_fails_dangling_exit() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(
        &path,
        r#"{ "startRoom": "a", "rooms": { "a": { "name": "A", "exits": { "e": "nowhere" } } } }"#,
    )
    .unwrap();
    fernweh()
        .args(["check", "--world"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("nowhere"));
}

#[test]
fn check_fails_missing_file() {
    fernweh()
        .args(["check", "--world", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// rooms
// ---------------------------------------------------------------------------

#[test]
fn rooms_lists_every_room() {
    fernweh()
        .arg("rooms")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cottage Garden"))
        .stdout(predicate::str::contains("Front Hall"))
        .stdout(predicate::str::contains("brass lantern"))
        .stdout(predicate::str::contains("starting in Cottage Garden"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_is_the_default() {
    let dir = TempDir::new().unwrap();
    fernweh()
        .arg("--prefs")
        .arg(prefs(&dir))
        .write_stdin("north\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Fernweh."))
        .stdout(predicate::str::contains("Front Hall"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn play_small_world() {
    let dir = TempDir::new().unwrap();
    let world = small_world(&dir);
    fernweh()
        .args(["play", "--seed", "7", "--world"])
        .arg(&world)
        .arg("--prefs")
        .arg(prefs(&dir))
        .write_stdin("take brolly\nn\ni\nxyzzy\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Umbrella: taken."))
        .stdout(predicate::str::contains("Parlour"))
        .stdout(predicate::str::contains("an umbrella."))
        .stdout(predicate::str::contains("Eh?"))
        .stdout(predicate::str::contains("Moves: 2"));
}

#[test]
fn play_ends_at_end_of_input() {
    let dir = TempDir::new().unwrap();
    fernweh()
        .arg("--prefs")
        .arg(prefs(&dir))
        .write_stdin("look\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!").not());
}

#[test]
fn play_start_hour_sets_the_clock() {
    let dir = TempDir::new().unwrap();
    fernweh()
        .args(["--start-hour", "21.5", "--prefs"])
        .arg(prefs(&dir))
        .write_stdin("time\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The current time is 21:30."))
        .stdout(predicate::str::contains("It is currently Night."));
}

#[test]
fn display_mode_survives_restarts() {
    let dir = TempDir::new().unwrap();
    let prefs = prefs(&dir);

    fernweh()
        .arg("--prefs")
        .arg(&prefs)
        .write_stdin("mode\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to dark mode."));

    let stored = fs::read_to_string(&prefs).unwrap();
    assert!(stored.contains("\"gameMode\""));
    assert!(stored.contains("\"dark\""));

    fernweh()
        .arg("--prefs")
        .arg(&prefs)
        .write_stdin("mode\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to light mode."));
}

#[test]
fn invalid_world_refuses_to_play() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    fernweh()
        .args(["play", "--world"])
        .arg(&path)
        .arg("--prefs")
        .arg(prefs(&dir))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
