//! Piece module - the single falling piece and its timers
//!
//! The piece keeps no reference to the field; every operation borrows the
//! field for the duration of the call. Operations that test validity
//! ([`FallingPiece::shift`], [`FallingPiece::rotate`],
//! [`FallingPiece::drop_to_floor`]) expect the piece's own footprint to be
//! lifted off the field first. [`FallingPiece::lifted`] wraps that
//! lift → mutate → stamp sequence; [`FallingPiece::tick`] and
//! [`FallingPiece::hard_drop`] do it internally.
//!
//! # Timers
//!
//! - The piece keeps its own clock, advanced by `tick(elapsed_ms)`.
//! - A forced one-row descent happens whenever the clock reaches the next step
//!   time; the step time then moves `step_delay_ms` ahead.
//! - The lock timer grows by the elapsed time once per tick and is reset by
//!   every successful move. When a forced descent is blocked and the lock
//!   timer has reached `lock_delay_ms`, the piece locks.

use crate::field::PlayingField;
use crate::tetromino::{rotated_cells, wrap_rotation, PieceShape, TetrominoDefinition};
use crate::types::{PieceKind, Point};

/// Result of one timer-driven tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still active, footprint re-stamped
    Falling,
    /// Committed to the field; the piece must be replaced
    Locked,
}

/// The active falling piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallingPiece {
    definition: TetrominoDefinition,
    position: Point,
    /// Clockwise quarter turns from the spawn orientation (0..=3)
    rotation: u8,
    clock_ms: u64,
    step_at_ms: u64,
    lock_timer_ms: u32,
    step_delay_ms: u32,
    lock_delay_ms: u32,
}

impl FallingPiece {
    /// Fresh piece in spawn orientation with reset timers
    ///
    /// The caller still has to check the spawn position against the field.
    pub fn spawn(
        position: Point,
        definition: TetrominoDefinition,
        step_delay_ms: u32,
        lock_delay_ms: u32,
    ) -> Self {
        Self {
            definition,
            position,
            rotation: 0,
            clock_ms: 0,
            step_at_ms: step_delay_ms as u64,
            lock_timer_ms: 0,
            step_delay_ms,
            lock_delay_ms,
        }
    }

    pub fn definition(&self) -> &TetrominoDefinition {
        &self.definition
    }

    pub fn kind(&self) -> PieceKind {
        self.definition.kind
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn lock_timer_ms(&self) -> u32 {
        self.lock_timer_ms
    }

    pub fn step_delay_ms(&self) -> u32 {
        self.step_delay_ms
    }

    pub fn lock_delay_ms(&self) -> u32 {
        self.lock_delay_ms
    }

    /// Milliseconds until the next forced descent
    pub fn step_in_ms(&self) -> u64 {
        self.step_at_ms.saturating_sub(self.clock_ms)
    }

    /// Change the step delay; takes effect from the next scheduled step
    pub fn set_step_delay(&mut self, step_delay_ms: u32) {
        self.step_delay_ms = step_delay_ms;
    }

    /// Current cell offsets, derived from the canonical shape and rotation
    pub fn cells(&self) -> PieceShape {
        rotated_cells(&self.definition.cells, self.rotation)
    }

    /// Absolute board coordinates of the current footprint
    pub fn absolute_cells(&self) -> [Point; 4] {
        self.cells().map(|c| c + self.position)
    }

    /// Write the footprint into the field
    pub fn stamp(&self, field: &mut PlayingField) {
        field.stamp(&self.cells(), self.position, self.definition.tile());
    }

    /// Erase the footprint from the field
    pub fn lift(&self, field: &mut PlayingField) {
        field.clear(&self.cells(), self.position);
    }

    /// Run `f` with the footprint lifted, then stamp it back
    pub fn lifted<R>(
        &mut self,
        field: &mut PlayingField,
        f: impl FnOnce(&mut Self, &PlayingField) -> R,
    ) -> R {
        self.lift(field);
        let result = f(self, field);
        self.stamp(field);
        result
    }

    /// Move by `delta` if the target is valid
    ///
    /// A successful move resets the lock timer. Footprint must be lifted.
    pub fn shift(&mut self, field: &PlayingField, delta: Point) -> bool {
        let candidate = self.position + delta;
        if !field.is_valid_position(&self.cells(), candidate) {
            return false;
        }
        self.position = candidate;
        self.lock_timer_ms = 0;
        true
    }

    /// Rotate in place by `direction` quarter turns (`1` clockwise, `-1`
    /// counter-clockwise)
    ///
    /// No kicks: if the rotated shape does not fit at the current anchor the
    /// rotation index is restored and nothing changes. Footprint must be lifted.
    pub fn rotate(&mut self, field: &PlayingField, direction: i32) -> bool {
        let previous = self.rotation;
        self.rotation = wrap_rotation(previous as i32 + direction);

        if !field.is_valid_position(&self.cells(), self.position) {
            self.rotation = previous;
            return false;
        }
        true
    }

    /// Move down until blocked; returns the number of rows travelled
    ///
    /// Terminates because every successful move lowers the piece and the
    /// field has a bottom edge. Footprint must be lifted.
    pub fn drop_to_floor(&mut self, field: &PlayingField) -> u32 {
        let mut rows = 0;
        while self.shift(field, Point::DOWN) {
            rows += 1;
        }
        rows
    }

    /// Hard drop: fall as far as possible and commit immediately, skipping the
    /// lock delay. Expects the footprint stamped (as between ticks).
    pub fn hard_drop(&mut self, field: &mut PlayingField) -> u32 {
        self.lifted(field, |piece, field| piece.drop_to_floor(field))
    }

    /// Advance the timers by `elapsed_ms` and apply a forced descent if due
    ///
    /// The lock timer grows on every tick, falling or not; every successful
    /// shift (forced descents included) zeroes it, so only time spent blocked
    /// since the last move counts toward the lock.
    ///
    /// Expects the footprint stamped and leaves it stamped. On
    /// [`TickOutcome::Locked`] that stamp is the permanent commit.
    pub fn tick(&mut self, field: &mut PlayingField, elapsed_ms: u32) -> TickOutcome {
        self.lifted(field, |piece, field| {
            piece.clock_ms += elapsed_ms as u64;
            piece.lock_timer_ms = piece.lock_timer_ms.saturating_add(elapsed_ms);

            if piece.clock_ms >= piece.step_at_ms {
                piece.step(field)
            } else {
                TickOutcome::Falling
            }
        })
    }

    fn step(&mut self, field: &PlayingField) -> TickOutcome {
        self.step_at_ms = self.clock_ms + self.step_delay_ms as u64;

        if self.shift(field, Point::DOWN) {
            return TickOutcome::Falling;
        }

        if self.lock_timer_ms >= self.lock_delay_ms {
            TickOutcome::Locked
        } else {
            TickOutcome::Falling
        }
    }

    /// Check if the cells at `position` fit, treating the piece's own current
    /// footprint as free. Safe to call whether or not the piece is stamped.
    fn fits_ignoring_self(&self, field: &PlayingField, position: Point) -> bool {
        let own = self.absolute_cells();
        self.cells().iter().all(|&offset| {
            let p = offset + position;
            match field.get(p) {
                Some(None) => true,
                Some(Some(_)) => own.contains(&p),
                None => false,
            }
        })
    }

    /// Check if a one-row descent is blocked
    pub fn is_grounded(&self, field: &PlayingField) -> bool {
        !self.fits_ignoring_self(field, self.position + Point::DOWN)
    }

    /// Anchor position a hard drop would land on
    pub fn ghost_position(&self, field: &PlayingField) -> Point {
        let mut pos = self.position;
        while self.fits_ignoring_self(field, pos + Point::DOWN) {
            pos = pos + Point::DOWN;
        }
        pos
    }
}
