use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn modkit_cmd() -> Command {
    Command::cargo_bin("modkit").unwrap()
}

#[test]
fn init_creates_manifest() {
    let tmp = TempDir::new().unwrap();

    modkit_cmd()
        .current_dir(tmp.path())
        .args([
            "init",
            "--name",
            "megamod",
            "--description",
            "A mega mod",
            "--game",
            "skyrim.exe",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(tmp.path().join("Modkit.toml")).unwrap();
    assert!(content.contains("name = \"megamod\""));
    assert!(content.contains("skyrim.exe"));
    assert!(content.contains(">=v0.0.0"));
}

#[test]
fn init_refuses_second_run() {
    let tmp = TempDir::new().unwrap();

    modkit_cmd()
        .current_dir(tmp.path())
        .args(["init", "--name", "a", "--description", "", "--game", ""])
        .assert()
        .success();

    modkit_cmd()
        .current_dir(tmp.path())
        .args(["init", "--name", "b", "--description", "", "--game", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_with_custom_game_version() {
    let tmp = TempDir::new().unwrap();

    modkit_cmd()
        .current_dir(tmp.path())
        .args([
            "init",
            "--name",
            "megamod",
            "--description",
            "",
            "--game",
            "skyrim.exe",
            "--game-version",
            ">=v1.5.0",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(tmp.path().join("Modkit.toml")).unwrap();
    assert!(content.contains(">=v1.5.0"));
}

#[test]
fn verbose_flag_is_accepted_globally() {
    let tmp = TempDir::new().unwrap();

    modkit_cmd()
        .current_dir(tmp.path())
        .args([
            "--verbose",
            "init",
            "--name",
            "megamod",
            "--description",
            "",
            "--game",
            "",
        ])
        .assert()
        .success();

    assert!(tmp.path().join("Modkit.toml").is_file());
}

#[test]
fn add_outside_project_fails() {
    let tmp = TempDir::new().unwrap();

    modkit_cmd()
        .current_dir(tmp.path())
        .args(["add", "afloesch/megamod"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("modkit init"));
}

#[test]
fn install_outside_project_fails() {
    let tmp = TempDir::new().unwrap();

    modkit_cmd()
        .current_dir(tmp.path())
        .args(["install"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("modkit init"));
}
