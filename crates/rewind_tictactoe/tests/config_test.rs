//! Tests for session configuration loading.

use rewind_tictactoe::{GameState, HistoryDirection, MoveListOrder, SessionConfig};
use std::io::Write;

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "move_list_order = \"follow_direction\"").unwrap();
    writeln!(file, "initial_direction = \"descending\"").unwrap();

    let config = SessionConfig::from_file(file.path()).expect("Valid config");
    assert_eq!(config.move_list_order(), &MoveListOrder::FollowDirection);
    assert_eq!(config.initial_direction(), &HistoryDirection::Descending);
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let err = SessionConfig::from_file(dir.path().join("absent.toml")).unwrap_err();

    assert!(err.message.starts_with("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_partial_config_fills_defaults() {
    let config = SessionConfig::from_toml_str("initial_direction = \"descending\"").unwrap();
    assert_eq!(config.move_list_order(), &MoveListOrder::Inert);
    assert_eq!(config.initial_direction(), &HistoryDirection::Descending);
}

#[test]
fn test_game_starts_with_configured_direction() {
    let config = SessionConfig::new(MoveListOrder::FollowDirection, HistoryDirection::Descending);
    let mut game = GameState::with_config(&config);

    game.apply_move_at(0).unwrap();

    let steps: Vec<usize> = game.snapshot().moves().iter().map(|m| *m.step()).collect();
    assert_eq!(game.direction(), HistoryDirection::Descending);
    assert_eq!(steps, vec![1, 0]);
}
