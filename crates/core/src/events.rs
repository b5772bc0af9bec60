//! Events module - the seam between the simulation and its collaborators
//!
//! The core never reaches out to a global score manager. Whoever drives the
//! game hands a [`GameEvents`] implementation to [`crate::Game`] at
//! construction time and receives these calls synchronously, from inside the
//! tick or input call that caused them.

use crate::scoring::line_clear_points;
use crate::types::GameEvent;

/// Notifications fired by the core
pub trait GameEvents {
    /// One clearing pass removed `count` rows (`count >= 1`)
    fn on_lines_cleared(&mut self, count: u32);

    /// A freshly spawned piece could not be placed; the round is over
    fn on_game_over(&mut self);

    /// A single row is about to collapse
    fn on_line_cleared_at(&mut self, _row: i32) {}

    /// The board was emptied and a new round begins
    fn on_restart(&mut self) {}
}

/// Ignore every notification
impl GameEvents for () {
    fn on_lines_cleared(&mut self, _count: u32) {}

    fn on_game_over(&mut self) {}
}

/// Record every notification in order
impl GameEvents for Vec<GameEvent> {
    fn on_lines_cleared(&mut self, count: u32) {
        self.push(GameEvent::LinesCleared(count));
    }

    fn on_game_over(&mut self) {
        self.push(GameEvent::GameOver);
    }

    fn on_line_cleared_at(&mut self, row: i32) {
        self.push(GameEvent::LineClearedAt(row));
    }
}

impl<E: GameEvents + ?Sized> GameEvents for &mut E {
    fn on_lines_cleared(&mut self, count: u32) {
        (**self).on_lines_cleared(count);
    }

    fn on_game_over(&mut self) {
        (**self).on_game_over();
    }

    fn on_line_cleared_at(&mut self, row: i32) {
        (**self).on_line_cleared_at(row);
    }

    fn on_restart(&mut self) {
        (**self).on_restart();
    }
}

/// Score bookkeeping for one session
///
/// Keeps the running score, total lines and an in-memory high score.
/// Persisting the high score between sessions is left to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreKeeper {
    score: u32,
    lines: u32,
    high_score: u32,
    game_over: bool,
}

impl ScoreKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a previously persisted high score
    pub fn with_high_score(high_score: u32) -> Self {
        Self {
            high_score,
            ..Self::default()
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Begin a new round, keeping the high score
    pub fn reset(&mut self) {
        *self = Self::with_high_score(self.high_score);
    }
}

impl GameEvents for ScoreKeeper {
    fn on_lines_cleared(&mut self, count: u32) {
        self.lines = self.lines.saturating_add(count);
        self.score = self.score.saturating_add(line_clear_points(count));
    }

    fn on_game_over(&mut self) {
        self.game_over = true;
        self.high_score = self.high_score.max(self.score);
    }

    fn on_restart(&mut self) {
        self.reset();
    }
}
