//! Basic CLI integration tests. None of these reach the network.

#![allow(deprecated)] // Command::cargo_bin deprecated for custom build-dir; still works for default

use assert_cmd::Command;
use pretty_assertions::assert_eq;

fn cli() -> Command {
    Command::cargo_bin("vgmdb-lookup").unwrap()
}

#[test]
fn help_prints_and_exits_success() {
    cli().arg("--help").assert().success();
}

#[test]
fn config_show_json_valid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let out = cli()
        .args(["config", "show", "--json", "--config"])
        .arg(&path)
        .assert()
        .success();
    let stdout = std::str::from_utf8(&out.get_output().stdout).unwrap();
    let v: serde_json::Value = serde_json::from_str(stdout).expect("config show --json should output valid JSON");
    assert_eq!(v["vgmdb"]["source_weight"], 1.0);
    assert_eq!(v["vgmdb"]["lang-priority"], "ja, en, ja-latn");
}

#[test]
fn config_set_then_show() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    cli()
        .args(["config", "set", "vgmdb.lang-priority", "en, ja", "--config"])
        .arg(&path)
        .assert()
        .success();

    let out = cli()
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .success();
    let stdout = std::str::from_utf8(&out.get_output().stdout).unwrap();
    assert!(stdout.contains("lang-priority = \"en, ja\""));
}

#[test]
fn config_set_unknown_key_fails() {
    let dir = tempfile::tempdir().unwrap();
    cli()
        .args(["config", "set", "vgmdb.colour", "blue", "--config"])
        .arg(dir.path().join("config.toml"))
        .assert()
        .failure();
}

#[test]
fn foreign_album_id_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let out = cli()
        .args(["album", "discogs:1234", "--config"])
        .arg(dir.path().join("config.toml"))
        .assert()
        .success();
    let stdout = std::str::from_utf8(&out.get_output().stdout).unwrap();
    assert!(stdout.contains("No album found"));
}

#[test]
fn punctuation_only_search_has_no_results() {
    let dir = tempfile::tempdir().unwrap();
    let out = cli()
        .args(["search", "--json", "!!!", "--config"])
        .arg(dir.path().join("config.toml"))
        .assert()
        .success();
    let stdout = std::str::from_utf8(&out.get_output().stdout).unwrap();
    let v: serde_json::Value = serde_json::from_str(stdout).unwrap();
    assert_eq!(v, serde_json::json!([]));
}

#[test]
fn config_set_refuses_to_overwrite_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let broken = "[vgmdb\nsource_weight = ";
    std::fs::write(&path, broken).unwrap();

    cli()
        .args(["config", "set", "vgmdb.source_weight", "2", "--config"])
        .arg(&path)
        .assert()
        .failure();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), broken);
}
