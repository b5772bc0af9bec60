use crate::piece::FallingPiece;
use crate::types::{Cell, PieceKind, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub position: Point,
    pub rotation: u8,
    /// Absolute board coordinates of the four cells
    pub cells: [Point; 4],
}

impl From<&FallingPiece> for ActiveSnapshot {
    fn from(value: &FallingPiece) -> Self {
        Self {
            kind: value.kind(),
            position: value.position(),
            rotation: value.rotation(),
            cells: value.absolute_cells(),
        }
    }
}

/// Read-only view handed to drawing and HUD layers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    /// Top row first; the active piece is included
    pub rows: Vec<Vec<Cell>>,
    pub active: Option<ActiveSnapshot>,
    /// Where the active piece would land
    pub ghost: Option<Point>,
    pub step_delay_ms: u32,
    pub started: bool,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.rows.clear();
        self.active = None;
        self.ghost = None;
        self.step_delay_ms = 0;
        self.started = false;
        self.paused = false;
        self.game_over = false;
    }

    pub fn playable(&self) -> bool {
        self.started && !self.game_over && !self.paused
    }
}
