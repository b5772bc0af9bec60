//! Config tests - JSON loading and validation as the runner uses them

use serde_json::json;
use tetro_field::core::{ConfigError, Game, GameConfig};
use tetro_field::types::Point;

#[test]
fn test_partial_json_keeps_defaults() {
    let doc = json!({ "step_delay_ms": 300, "seed": 42 }).to_string();
    let config = GameConfig::from_json_str(&doc).unwrap();

    assert_eq!(config.step_delay_ms, 300);
    assert_eq!(config.seed, 42);
    assert_eq!(config.board_width, 10);
    assert_eq!(config.lock_delay_ms, 500);
    assert_eq!(config.spawn_position, Point::new(-1, 8));
}

#[test]
fn test_custom_board_and_spawn() {
    let doc = json!({
        "board_width": 6,
        "board_height": 12,
        "spawn_position": { "x": 0, "y": 4 }
    })
    .to_string();
    let config = GameConfig::from_json_str(&doc).unwrap();

    let mut game = Game::new(config, ()).unwrap();
    game.start();
    assert_eq!(game.field().width(), 6);
    assert_eq!(game.field().height(), 12);
    assert_eq!(game.active().unwrap().position(), Point::new(0, 4));
}

#[test]
fn test_invalid_values_rejected() {
    let doc = json!({ "lock_delay_ms": 0 }).to_string();
    assert_eq!(GameConfig::from_json_str(&doc), Err(ConfigError::ZeroLockDelay));

    let doc = json!({ "board_width": 0 }).to_string();
    assert!(matches!(
        GameConfig::from_json_str(&doc),
        Err(ConfigError::EmptyBoard { width: 0, .. })
    ));

    let doc = json!({ "spawn_position": { "x": 7, "y": 0 } }).to_string();
    assert_eq!(
        GameConfig::from_json_str(&doc),
        Err(ConfigError::SpawnOutOfBounds(Point::new(7, 0)))
    );
}

#[test]
fn test_oversized_board_rejected_before_allocation() {
    let doc = json!({ "board_width": 70000, "board_height": 70000 }).to_string();
    assert_eq!(
        GameConfig::from_json_str(&doc),
        Err(ConfigError::BoardTooLarge {
            width: 70000,
            height: 70000
        })
    );

    let config = GameConfig {
        board_width: 70000,
        board_height: 70000,
        ..GameConfig::default()
    };
    assert!(matches!(
        Game::new(config, ()),
        Err(ConfigError::BoardTooLarge { .. })
    ));
}

#[test]
fn test_malformed_json_reports_error() {
    let err = GameConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
    assert!(err.to_string().starts_with("invalid config json"));
}

#[test]
fn test_invalid_config_refused_by_game() {
    let config = GameConfig {
        board_height: -1,
        ..GameConfig::default()
    };
    assert!(Game::new(config, ()).is_err());
}
