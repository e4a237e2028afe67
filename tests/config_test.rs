//! Tests for settings loading.

use noughts::{GameConfig, ThemeName};
use std::path::PathBuf;
use tempfile::tempdir;

fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("noughts.toml");
    std::fs::write(&path, contents).expect("Failed to write config");
    (dir, path)
}

#[test]
fn test_defaults() {
    let config = GameConfig::default();
    assert_eq!(*config.turn_seconds(), 30);
    assert_eq!(*config.ai_delay_ms(), 1000);
    assert_eq!(*config.theme(), ThemeName::Light);
    assert_eq!(
        *config.history_path(),
        PathBuf::from("noughts_history.json")
    );
}

#[test]
fn test_full_file() {
    let (_dir, path) = write_config(
        r#"
turn_seconds = 45
ai_delay_ms = 250
theme = "dark"
history_path = "games.json"
"#,
    );

    let config = GameConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.turn_seconds(), 45);
    assert_eq!(*config.ai_delay_ms(), 250);
    assert_eq!(*config.theme(), ThemeName::Dark);
    assert_eq!(*config.history_path(), PathBuf::from("games.json"));
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = write_config("theme = \"dark\"\n");

    let config = GameConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.theme(), ThemeName::Dark);
    assert_eq!(*config.turn_seconds(), 30);
    assert_eq!(*config.ai_delay_ms(), 1000);
}

#[test]
fn test_missing_file_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = GameConfig::from_file(dir.path().join("absent.toml"));
    assert!(result.is_err());
}

#[test]
fn test_malformed_file_fails() {
    let (_dir, path) = write_config("turn_seconds = \"soon\"\n");
    assert!(GameConfig::from_file(&path).is_err());
}

#[test]
fn test_overrides() {
    let mut config = GameConfig::default();
    config.set_turn_seconds(10);
    config.set_theme(ThemeName::Dark);
    config.set_history_path(PathBuf::from("elsewhere.json"));
    assert_eq!(*config.turn_seconds(), 10);
    assert_eq!(*config.theme(), ThemeName::Dark);
    assert_eq!(*config.history_path(), PathBuf::from("elsewhere.json"));
}
