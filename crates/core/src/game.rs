//! Game module - the simulation driver
//!
//! `Game` owns the field, the single active piece, the piece source and the
//! events collaborator. It is the only writer of the field: every entry point
//! takes `&mut self`, so a timer tick can never interleave with a player input
//! and the lifted-footprint state inside an operation is never observable.
//!
//! Lifecycle: `new` validates the configuration, `start` spawns the first
//! piece, then the owner calls `tick(elapsed_ms)` at whatever rate it likes
//! and forwards player intents in between.

use crate::config::{ConfigError, GameConfig};
use crate::events::GameEvents;
use crate::field::PlayingField;
use crate::piece::{FallingPiece, TickOutcome};
use crate::rng::{PieceSource, RandomSource};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::tetromino::{standard_set, TetrominoDefinition};
use crate::types::{Difficulty, GameAction, Point};

/// Complete simulation state
pub struct Game<E: GameEvents = ()> {
    config: GameConfig,
    field: PlayingField,
    definitions: Vec<TetrominoDefinition>,
    source: Box<dyn PieceSource>,
    active: Option<FallingPiece>,
    events: E,
    step_delay_ms: u32,
    pieces_spawned: u32,
    started: bool,
    paused: bool,
    game_over: bool,
}

impl<E: GameEvents> Game<E> {
    /// Create a game with the standard pieces and a seeded random source
    pub fn new(config: GameConfig, events: E) -> Result<Self, ConfigError> {
        Self::with_parts(
            config,
            standard_set(),
            Box::new(RandomSource::new(config.seed)),
            events,
        )
    }

    /// Create a game with explicit definitions and piece source
    pub fn with_parts(
        config: GameConfig,
        definitions: Vec<TetrominoDefinition>,
        source: Box<dyn PieceSource>,
        events: E,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if definitions.is_empty() {
            return Err(ConfigError::NoDefinitions);
        }
        Ok(Self::assemble(config, definitions, source, events))
    }

    /// Build from parts that are already known to be valid
    fn assemble(
        config: GameConfig,
        definitions: Vec<TetrominoDefinition>,
        source: Box<dyn PieceSource>,
        events: E,
    ) -> Self {
        Self {
            config,
            field: PlayingField::new(config.board_width, config.board_height),
            definitions,
            source,
            active: None,
            events,
            step_delay_ms: config.step_delay_ms,
            pieces_spawned: 0,
            started: false,
            paused: false,
            game_over: false,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn field(&self) -> &PlayingField {
        &self.field
    }

    pub fn active(&self) -> Option<&FallingPiece> {
        self.active.as_ref()
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    pub fn into_events(self) -> E {
        self.events
    }

    pub fn definitions(&self) -> &[TetrominoDefinition] {
        &self.definitions
    }

    pub fn step_delay_ms(&self) -> u32 {
        self.step_delay_ms
    }

    /// Number of pieces successfully placed at spawn
    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Change the difficulty knob; the active piece picks it up at its next step
    pub fn set_step_delay(&mut self, step_delay_ms: u32) {
        self.step_delay_ms = step_delay_ms;
        if let Some(piece) = self.active.as_mut() {
            piece.set_step_delay(step_delay_ms);
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.set_step_delay(difficulty.step_delay_ms());
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Spawn the next piece from the source
    pub fn spawn_piece(&mut self) -> bool {
        let idx = self.source.next_index(self.definitions.len());
        let definition = self.definitions[idx.min(self.definitions.len() - 1)];
        self.spawn_definition(definition)
    }

    /// Spawn a specific definition at the configured spawn position
    ///
    /// If the footprint does not fit, the round ends: nothing is stamped, the
    /// board is emptied and `on_game_over` fires.
    pub fn spawn_definition(&mut self, definition: TetrominoDefinition) -> bool {
        if self.game_over {
            return false;
        }

        let piece = FallingPiece::spawn(
            self.config.spawn_position,
            definition,
            self.step_delay_ms,
            self.config.lock_delay_ms,
        );

        if !self.field.is_valid_position(&piece.cells(), piece.position()) {
            self.active = None;
            self.game_over = true;
            self.field.clear_board();
            self.events.on_game_over();
            return false;
        }

        piece.stamp(&mut self.field);
        self.active = Some(piece);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        true
    }

    fn playable(&self) -> bool {
        self.started && !self.paused && !self.game_over
    }

    /// Main tick - advance the active piece's timers
    ///
    /// Returns true when the piece locked during this tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.playable() {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        match piece.tick(&mut self.field, elapsed_ms) {
            TickOutcome::Falling => false,
            TickOutcome::Locked => {
                self.finish_lock();
                true
            }
        }
    }

    /// The active piece is already committed: drop it, clear rows, spawn next
    fn finish_lock(&mut self) {
        self.active = None;
        self.field.clear_all_lines(&mut self.events);
        self.spawn_piece();
    }

    fn with_active(&mut self, f: impl FnOnce(&mut FallingPiece, &PlayingField) -> bool) -> bool {
        if !self.playable() {
            return false;
        }
        match self.active.as_mut() {
            Some(piece) => piece.lifted(&mut self.field, f),
            None => false,
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.with_active(|piece, field| piece.shift(field, Point::LEFT))
    }

    pub fn move_right(&mut self) -> bool {
        self.with_active(|piece, field| piece.shift(field, Point::RIGHT))
    }

    pub fn rotate_cw(&mut self) -> bool {
        self.with_active(|piece, field| piece.rotate(field, 1))
    }

    pub fn rotate_ccw(&mut self) -> bool {
        self.with_active(|piece, field| piece.rotate(field, -1))
    }

    /// Drop to the lowest reachable row and lock without any grace period
    pub fn hard_drop(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        piece.hard_drop(&mut self.field);
        self.finish_lock();
        true
    }

    /// Empty the board and begin a new round
    pub fn restart(&mut self) {
        self.field.clear_board();
        self.active = None;
        self.step_delay_ms = self.config.step_delay_ms;
        self.pieces_spawned = 0;
        self.started = false;
        self.paused = false;
        self.game_over = false;
        self.events.on_restart();
        self.start();
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::RotateCw => self.rotate_cw(),
            GameAction::RotateCcw => self.rotate_ccw(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Pause => {
                if self.game_over {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows.resize_with(self.field.height() as usize, Vec::new);
        for (dst, src) in out.rows.iter_mut().zip(self.field.rows()) {
            dst.clear();
            dst.extend_from_slice(src);
        }

        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.ghost = self.active.as_ref().map(|p| p.ghost_position(&self.field));
        out.step_delay_ms = self.step_delay_ms;
        out.started = self.started;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Game<()> {
    fn default() -> Self {
        let config = GameConfig::default();
        Self::assemble(
            config,
            standard_set(),
            Box::new(RandomSource::new(config.seed)),
            (),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceSource;
    use crate::types::{GameEvent, PieceKind};

    fn game_with(kinds: &[PieceKind]) -> Game<Vec<GameEvent>> {
        let defs = standard_set();
        let indices = kinds
            .iter()
            .map(|k| defs.iter().position(|d| d.kind == *k).unwrap())
            .collect();
        Game::with_parts(
            GameConfig::default(),
            defs,
            Box::new(SequenceSource::new(indices)),
            Vec::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_game_state() {
        let game = Game::new(GameConfig::default(), ()).unwrap();
        assert!(!game.started());
        assert!(!game.paused());
        assert!(!game.game_over());
        assert!(game.active().is_none());
        assert_eq!(game.field().occupied_count(), 0);
    }

    #[test]
    fn test_start_spawns_and_stamps() {
        let mut game = game_with(&[PieceKind::T]);
        game.start();
        let piece = game.active().unwrap();
        assert_eq!(piece.kind(), PieceKind::T);
        assert_eq!(piece.position(), Point::new(-1, 8));
        assert_eq!(game.field().occupied_count(), 4);
        assert_eq!(game.pieces_spawned(), 1);

        // Idempotent
        game.start();
        assert_eq!(game.pieces_spawned(), 1);
    }

    #[test]
    fn test_empty_definitions_rejected() {
        let result = Game::with_parts(
            GameConfig::default(),
            Vec::new(),
            Box::new(RandomSource::new(1)),
            (),
        );
        assert_eq!(result.err(), Some(ConfigError::NoDefinitions));
    }

    #[test]
    fn test_inputs_ignored_before_start() {
        let mut game = game_with(&[PieceKind::T]);
        assert!(!game.move_left());
        assert!(!game.hard_drop());
        assert!(!game.tick(5000));
    }

    #[test]
    fn test_pause_blocks_ticks_and_inputs() {
        let mut game = game_with(&[PieceKind::O]);
        game.start();
        assert!(game.apply_action(GameAction::Pause));
        assert!(game.paused());

        let before = game.active().unwrap().position();
        assert!(!game.tick(5000));
        assert!(!game.move_left());
        assert_eq!(game.active().unwrap().position(), before);

        assert!(game.apply_action(GameAction::Pause));
        assert!(game.move_left());
    }

    #[test]
    fn test_set_step_delay_reaches_active_piece() {
        let mut game = game_with(&[PieceKind::O]);
        game.start();
        game.set_difficulty(Difficulty::Hard);
        assert_eq!(game.step_delay_ms(), 300);
        assert_eq!(game.active().unwrap().step_delay_ms(), 300);
    }

    #[test]
    fn test_default_game() {
        let mut game = Game::default();
        assert_eq!(game.config(), &GameConfig::default());
        assert_eq!(game.definitions(), standard_set().as_slice());
        assert_eq!(game.step_delay_ms(), GameConfig::default().step_delay_ms);
        game.start();
        assert!(game.active().is_some());
    }
}
