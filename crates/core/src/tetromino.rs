//! Tetromino module - canonical piece shapes and quarter-turn rotation
//!
//! Each definition stores the four cell offsets of its spawn orientation.
//! Rotated orientations are always derived from those canonical offsets plus a
//! rotation index, never by transforming an already transformed shape.

use crate::types::{PieceKind, Point};

/// Offsets of the four cells of a piece, relative to its anchor
pub type PieceShape = [Point; 4];

/// 90° rotation matrix `[cos, sin, -sin, cos]`
pub const ROTATION_MATRIX: [i32; 4] = [0, 1, -1, 0];

/// Number of distinct rotation states
pub const ROTATION_STATES: i32 = 4;

/// Immutable description of one piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TetrominoDefinition {
    pub kind: PieceKind,
    pub cells: PieceShape,
}

impl TetrominoDefinition {
    /// Build a definition from raw `(x, y)` offset data
    pub fn new(kind: PieceKind, raw: [(i32, i32); 4]) -> Self {
        Self {
            kind,
            cells: raw.map(|(x, y)| Point::new(x, y)),
        }
    }

    /// Canonical definition for a piece kind
    pub fn of(kind: PieceKind) -> Self {
        let raw = match kind {
            PieceKind::I => [(-1, 1), (0, 1), (1, 1), (2, 1)],
            PieceKind::J => [(-1, 1), (-1, 0), (0, 0), (1, 0)],
            PieceKind::L => [(1, 1), (-1, 0), (0, 0), (1, 0)],
            PieceKind::O => [(0, 1), (1, 1), (0, 0), (1, 0)],
            PieceKind::S => [(0, 1), (1, 1), (-1, 0), (0, 0)],
            PieceKind::T => [(0, 1), (-1, 0), (0, 0), (1, 0)],
            PieceKind::Z => [(-1, 1), (0, 1), (0, 0), (1, 0)],
        };
        Self::new(kind, raw)
    }

    /// Tile written into the board for this piece
    pub fn tile(&self) -> PieceKind {
        self.kind
    }

    /// Cells for the given rotation index
    pub fn cells_at(&self, rotation: u8) -> PieceShape {
        rotated_cells(&self.cells, rotation)
    }
}

/// The seven classic definitions, in `PieceKind::ALL` order
pub fn standard_set() -> Vec<TetrominoDefinition> {
    PieceKind::ALL
        .iter()
        .map(|&kind| TetrominoDefinition::of(kind))
        .collect()
}

/// Rotate one offset a quarter turn
///
/// `direction` is `1` (clockwise) or `-1` (counter-clockwise); the matrix is
/// scaled by it, so applying `-d` after `d` restores the input exactly.
pub fn rotate_offset(cell: Point, direction: i32) -> Point {
    let m = ROTATION_MATRIX;
    Point::new(
        (cell.x * m[0] + cell.y * m[1]) * direction,
        (cell.x * m[2] + cell.y * m[3]) * direction,
    )
}

/// Wrap any rotation counter into `0..4`, negative values included
pub fn wrap_rotation(index: i32) -> u8 {
    (((index % ROTATION_STATES) + ROTATION_STATES) % ROTATION_STATES) as u8
}

/// Derive the shape for `rotation` clockwise quarter turns from the canonical cells
pub fn rotated_cells(canonical: &PieceShape, rotation: u8) -> PieceShape {
    let turns = wrap_rotation(rotation as i32);
    canonical.map(|cell| (0..turns).fold(cell, |c, _| rotate_offset(c, 1)))
}
