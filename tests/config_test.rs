//! Tests for loading driver configuration from TOML files.

use std::fs;
use tempfile::TempDir;
use tic_tac_two::{AppConfig, Mark, Mode, Overrides};

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("tic_tac_two.toml");
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn test_load_full_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
mode = "ava"
agent_mark = "X"
seed = 42
agent_delay_ms = 0
max_turns = 30
"#,
    );

    let config = AppConfig::load(Some(path)).unwrap();
    assert_eq!(*config.mode(), Mode::AgentVsAgent);
    assert_eq!(*config.agent_mark(), Mark::X);
    assert_eq!(*config.seed(), Some(42));
    assert_eq!(*config.agent_delay_ms(), 0);
    assert_eq!(*config.max_turns(), Some(30));
    assert_eq!(*config.board_size(), 5);
}

#[test]
fn test_missing_keys_use_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "mode = \"hva\"\n");

    let config = AppConfig::from_file(&path).unwrap();
    assert_eq!(*config.mode(), Mode::HumanVsAgent);
    assert_eq!(*config.agent_mark(), Mark::O);
    assert_eq!(*config.agent_delay_ms(), 500);
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_overrides_beat_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "mode = \"hva\"\nseed = 1\n");

    let config = AppConfig::from_file(&path).unwrap().with_overrides(Overrides {
        mode: Some(Mode::HumanVsHuman),
        ..Overrides::default()
    });
    assert_eq!(*config.mode(), Mode::HumanVsHuman);
    assert_eq!(*config.seed(), Some(1));
}

#[test]
fn test_malformed_toml_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "mode = [not toml");

    let err = AppConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"), "{err}");
}

#[test]
fn test_unknown_mode_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "mode = \"solo\"\n");
    assert!(AppConfig::from_file(&path).is_err());
}

#[test]
fn test_board_smaller_than_grid_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "board_size = 2\n");

    let err = AppConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("smaller than the 3x3 grid"), "{err}");
}

#[test]
fn test_board_above_limit_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "board_size = 100000\n");

    let err = AppConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("larger than the maximum of 64"), "{err}");
}

#[test]
fn test_missing_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"), "{err}");
}
