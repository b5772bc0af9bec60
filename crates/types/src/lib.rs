//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the simulation.
//! All types are plain data with no behavior beyond small conversions, making them
//! usable in any context (core logic, a drawing layer, a score display).
//!
//! # Board Coordinates
//!
//! The playfield is a rectangle centered on the origin:
//!
//! - **Width**: 10 columns, x in `[-5, 5)`
//! - **Height**: 20 rows, y in `[-10, 10)`
//! - **Up is +y**: a piece falls by moving `(0, -1)`
//! - **Spawn position**: `(-1, 8)`, two rows below the top edge
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Default fixed timestep of the runner (~60 FPS) |
//! | `DEFAULT_STEP_DELAY_MS` | 1000 | Interval between forced one-row descents |
//! | `LOCK_DELAY_MS` | 500 | Grace period before a blocked piece locks |
//!
//! # Difficulty
//!
//! | Difficulty | Step delay |
//! |------------|------------|
//! | Easy | 1000ms |
//! | Medium | 500ms |
//! | Hard | 300ms |
//!
//! # Examples
//!
//! ```
//! use tetro_field_types::{Bounds, Difficulty, PieceKind, Point, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let bounds = Bounds::centered(BOARD_WIDTH, BOARD_HEIGHT);
//! assert_eq!(bounds.x_min(), -5);
//! assert_eq!(bounds.y_max(), 10);
//! assert!(bounds.contains(Point::new(-5, 9)));
//! assert!(!bounds.contains(Point::new(5, 0)));
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Difficulty::from_str("hard").map(|d| d.step_delay_ms()), Some(300));
//! ```

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: i32 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: i32 = 20;

/// Anchor position of a freshly spawned piece
pub const SPAWN_POSITION: Point = Point { x: -1, y: 8 };

/// Fixed timestep used by the headless runner (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default interval between forced descents (1 second per row)
pub const DEFAULT_STEP_DELAY_MS: u32 = 1000;

/// Grace period once a forced descent is blocked
pub const LOCK_DELAY_MS: u32 = 500;

/// Points awarded for clearing N lines in a single pass
///
/// - 0 lines: 0 points
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 500 points
/// - 4 or more lines: 800 points
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Integer 2D coordinate, used both for absolute board cells and for
/// offsets relative to a piece anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };
    pub const DOWN: Point = Point { x: 0, y: -1 };
    pub const LEFT: Point = Point { x: -1, y: 0 };
    pub const RIGHT: Point = Point { x: 1, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Fixed playfield rectangle `[x_min, x_max) × [y_min, y_max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    origin: Point,
    width: i32,
    height: i32,
}

impl Bounds {
    /// Rectangle of the given size centered on the origin
    ///
    /// The lower corner is `(-width / 2, -height / 2)`.
    pub const fn centered(width: i32, height: i32) -> Self {
        Self {
            origin: Point::new(-width / 2, -height / 2),
            width,
            height,
        }
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    pub const fn x_min(&self) -> i32 {
        self.origin.x
    }

    /// Exclusive upper column bound
    pub const fn x_max(&self) -> i32 {
        self.origin.x + self.width
    }

    pub const fn y_min(&self) -> i32 {
        self.origin.y
    }

    /// Exclusive upper row bound
    pub const fn y_max(&self) -> i32 {
        self.origin.y + self.height
    }

    /// Check if a cell lies inside the rectangle
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.x_min() && p.x < self.x_max() && p.y >= self.y_min() && p.y < self.y_max()
    }
}

/// The seven tetromino piece kinds
///
/// The kind doubles as the tile identifier written into the board, so a
/// drawing layer can pick a color per kind:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetro_field_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled with the tile of the specified piece kind
pub type Cell = Option<PieceKind>;

/// Player-intent inputs accepted by the simulation driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece a quarter turn clockwise
    RotateCw,
    /// Rotate piece a quarter turn counter-clockwise
    RotateCcw,
    /// Drop piece to the lowest reachable row and lock it immediately
    HardDrop,
    /// Toggle pause state
    Pause,
    /// Clear the board and start a new round
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive camelCase names)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetro_field_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("harddrop"), Some(GameAction::HardDrop));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "harddrop" => Some(GameAction::HardDrop),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::HardDrop => "hardDrop",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Difficulty presets, each mapping to a step delay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Milliseconds between forced descents
    pub fn step_delay_ms(&self) -> u32 {
        match self {
            Difficulty::Easy => 1000,
            Difficulty::Medium => 500,
            Difficulty::Hard => 300,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Notification emitted by the core towards its collaborators
///
/// Mirrors the `GameEvents` callbacks one-to-one so a recorder can keep an
/// ordered log of what happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A single row is about to collapse (cosmetic hook)
    LineClearedAt(i32),
    /// One clearing pass removed this many rows (always >= 1)
    LinesCleared(u32),
    /// A freshly spawned piece could not be placed
    GameOver,
}
