//! Config module - setup values validated before the first spawn
//!
//! The simulation itself never second-guesses its configuration, so every
//! precondition it relies on is checked here once.

use serde::Deserialize;
use thiserror::Error;

use crate::types::{
    Bounds, Difficulty, Point, BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_STEP_DELAY_MS, LOCK_DELAY_MS,
    SPAWN_POSITION,
};

/// Reasons a configuration cannot start a game
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board must be at least 1x1, got {width}x{height}")]
    EmptyBoard { width: i32, height: i32 },
    #[error("board of {width}x{height} cells is too large")]
    BoardTooLarge { width: i32, height: i32 },
    #[error("lock delay must be positive")]
    ZeroLockDelay,
    #[error("spawn position ({}, {}) lies outside the board", .0.x, .0.y)]
    SpawnOutOfBounds(Point),
    #[error("no tetromino definitions to spawn from")]
    NoDefinitions,
    #[error("invalid config json: {0}")]
    Json(String),
}

/// Everything a [`crate::Game`] needs to know before its first tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_width: i32,
    pub board_height: i32,
    pub spawn_position: Point,
    /// Milliseconds between forced descents
    pub step_delay_ms: u32,
    /// Grace period once a descent is blocked
    pub lock_delay_ms: u32,
    /// Seed for the piece picker
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            spawn_position: SPAWN_POSITION,
            step_delay_ms: DEFAULT_STEP_DELAY_MS,
            lock_delay_ms: LOCK_DELAY_MS,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Default config with the step delay of a difficulty preset
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            step_delay_ms: difficulty.step_delay_ms(),
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) JSON document; missing keys keep defaults
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::centered(self.board_width, self.board_height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width <= 0 || self.board_height <= 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.board_width,
                height: self.board_height,
            });
        }
        if self.board_width.checked_mul(self.board_height).is_none() {
            return Err(ConfigError::BoardTooLarge {
                width: self.board_width,
                height: self.board_height,
            });
        }
        if self.lock_delay_ms == 0 {
            return Err(ConfigError::ZeroLockDelay);
        }
        if !self.bounds().contains(self.spawn_position) {
            return Err(ConfigError::SpawnOutOfBounds(self.spawn_position));
        }
        Ok(())
    }
}
