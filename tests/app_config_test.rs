//! Tests for loading CLI settings from TOML.

use connect_k_cli::{AppConfig, GameArgs};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = write_config("");
    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(*config.size(), 3);
    assert_eq!(*config.win_condition(), 3);
    assert_eq!(config.log_filter(), "info");
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_file_values_are_loaded() {
    let file = write_config(
        r#"
size = 7
win_condition = 5
max_depth = 2
adjacent_only_from = 4
seed = 42
log_filter = "connect_k=debug"
"#,
    );
    let config = AppConfig::from_file(file.path()).unwrap();
    let game = config.game_config().unwrap();
    assert_eq!(game.size(), 7);
    assert_eq!(game.win_condition(), 5);
    let bot = config.bot_config().unwrap();
    assert_eq!(bot.max_depth(), 2);
    assert_eq!(bot.adjacent_only_from(), 4);
    assert_eq!(*config.seed(), Some(42));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = AppConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(error.message.starts_with("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("size = \"large\"");
    let error = AppConfig::from_file(file.path()).unwrap_err();
    assert!(error.message.starts_with("Failed to parse config"));
    assert!(error.to_string().contains("app_config.rs"));
}

#[test]
fn test_invalid_board_is_rejected_on_use() {
    let file = write_config("size = 3\nwin_condition = 4");
    let config = AppConfig::from_file(file.path()).unwrap();
    let error = config.game_config().unwrap_err();
    assert!(error.message.contains("Win condition 4 exceeds board size 3"));
}

#[test]
fn test_command_line_overrides_file() {
    let file = write_config("size = 5\nwin_condition = 4\nmax_depth = 3");
    let mut config = AppConfig::from_file(file.path()).unwrap();
    config.apply_overrides(&GameArgs {
        size: Some(6),
        depth: Some(0),
        ..GameArgs::default()
    });
    assert_eq!(*config.size(), 6);
    assert_eq!(*config.win_condition(), 4);
    assert!(config.bot_config().is_err());
}

#[test]
fn test_load_without_path_is_default() {
    assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
}
