//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game: the field, the
//! falling piece with its timers, line clearing and the driver that ties them
//! together. It has **no dependencies** on drawing, input devices or audio:
//!
//! - **Deterministic**: Same seed and tick sequence produce identical games
//! - **Testable**: Every rule is reachable through plain method calls
//! - **Portable**: The owner decides the tick rate and how to present state
//!
//! # Module Structure
//!
//! - [`field`]: grid of occupied cells, validity checks, row collapse
//! - [`piece`]: the active piece, its rotation and its step/lock timers
//! - [`tetromino`]: canonical shapes and the quarter-turn transform
//! - [`game`]: the driver owning field, piece, piece source and collaborator
//! - [`events`]: callbacks the core fires (lines cleared, game over)
//! - [`scoring`]: points per clearing pass
//! - [`rng`]: seeded piece selection
//! - [`config`]: setup values and their validation
//! - [`snapshot`]: read-only view for presentation layers
//!
//! # Game Rules
//!
//! - **No kicks**: a rotation either fits in place or is rejected
//! - **Lock delay**: 500ms grace once a forced descent is blocked; any
//!   successful move restarts it
//! - **Hard drop**: locks immediately, no grace period
//! - **Scoring**: 100/300/500/800 for 1/2/3/4+ rows in one pass
//! - **Game over**: the next piece does not fit at the spawn position
//!
//! # Example
//!
//! ```
//! use tetro_field_core::{Game, GameConfig, ScoreKeeper};
//! use tetro_field_types::GameAction;
//!
//! let mut game = Game::new(GameConfig::default(), ScoreKeeper::new()).unwrap();
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//! game.tick(16);
//!
//! assert!(!game.game_over());
//! assert_eq!(game.events().score(), 0);
//! ```
//!
//! # Timing
//!
//! Call [`Game::tick`](game::Game::tick) with the elapsed milliseconds.
//! The step delay (1000ms by default) can be changed at any time with
//! [`Game::set_step_delay`](game::Game::set_step_delay).

pub mod config;
pub mod events;
pub mod field;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod tetromino;

pub use tetro_field_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig};
pub use events::{GameEvents, ScoreKeeper};
pub use field::PlayingField;
pub use game::Game;
pub use piece::{FallingPiece, TickOutcome};
pub use rng::{PieceSource, RandomSource, SequenceSource, SimpleRng};
pub use scoring::line_clear_points;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use tetromino::{rotate_offset, rotated_cells, standard_set, wrap_rotation, TetrominoDefinition};
