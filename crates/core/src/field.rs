//! Field module - the occupied-cell grid
//!
//! The field is a rectangle centered on the origin (10x20 by default).
//! Storage is a flat row-major vector indexed from the lower-left corner, so a
//! coordinate outside the bounds simply has no slot and can never be populated.
//!
//! The field knows nothing about the active piece beyond the shapes and
//! positions passed into it. Callers must lift the piece's own footprint
//! before asking [`PlayingField::is_valid_position`], otherwise the piece
//! collides with itself.

use crate::events::GameEvents;
use crate::types::{Bounds, Cell, PieceKind, Point, BOARD_HEIGHT, BOARD_WIDTH};

/// The playing field
#[derive(Debug, Clone, PartialEq)]
pub struct PlayingField {
    bounds: Bounds,
    /// Row-major cells, row `y_min` first
    cells: Vec<Cell>,
}

impl PlayingField {
    /// Create an empty field of the given size
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Bounds::centered(width, height);
        let len = width.max(0) as usize * height.max(0) as usize;
        Self {
            bounds,
            cells: vec![None; len],
        }
    }

    /// Fixed rectangle of valid coordinates
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    #[inline(always)]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        let col = (p.x - self.bounds.x_min()) as usize;
        let row = (p.y - self.bounds.y_min()) as usize;
        Some(row * self.bounds.width() as usize + col)
    }

    /// Get the cell at a coordinate
    /// Returns None if out of bounds
    pub fn get(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|idx| self.cells[idx])
    }

    /// Set the cell at a coordinate
    /// Returns false (and writes nothing) if out of bounds
    pub fn set(&mut self, p: Point, cell: Cell) -> bool {
        match self.index(p) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a coordinate is inside the field and filled
    pub fn is_occupied(&self, p: Point) -> bool {
        matches!(self.get(p), Some(Some(_)))
    }

    /// Check if every cell of `shape`, anchored at `position`, is inside the
    /// bounds and unoccupied
    pub fn is_valid_position(&self, shape: &[Point], position: Point) -> bool {
        shape.iter().all(|&offset| {
            let p = offset + position;
            matches!(self.get(p), Some(None))
        })
    }

    /// Write `tile` at every cell of the shape
    pub fn stamp(&mut self, shape: &[Point], position: Point, tile: PieceKind) {
        for &offset in shape {
            self.set(offset + position, Some(tile));
        }
    }

    /// Empty every cell of the shape
    pub fn clear(&mut self, shape: &[Point], position: Point) {
        for &offset in shape {
            self.set(offset + position, None);
        }
    }

    /// Check if a row is completely filled
    pub fn is_line_full(&self, row: i32) -> bool {
        let b = self.bounds;
        (b.x_min()..b.x_max()).all(|col| self.is_occupied(Point::new(col, row)))
    }

    /// Empty `row` and shift every row above it down by one
    ///
    /// The top row ends up empty.
    pub fn collapse_line(&mut self, row: i32) {
        let b = self.bounds;
        for col in b.x_min()..b.x_max() {
            self.set(Point::new(col, row), None);
        }

        for r in row..b.y_max() {
            for col in b.x_min()..b.x_max() {
                // Reading above the top edge yields an empty cell
                let above = self.get(Point::new(col, r + 1)).flatten();
                self.set(Point::new(col, r), above);
            }
        }
    }

    /// Clear every full row in one bottom-up pass and report the result
    ///
    /// The cursor only advances past rows that are not full: after a collapse
    /// the row above has moved into the cursor row and must be tested again.
    /// Fires `on_line_cleared_at` before each collapse and `on_lines_cleared`
    /// once when at least one row went. Returns the number of rows cleared.
    pub fn clear_all_lines<E>(&mut self, events: &mut E) -> u32
    where
        E: GameEvents + ?Sized,
    {
        let b = self.bounds;
        let mut row = b.y_min();
        let mut cleared = 0u32;

        while row < b.y_max() {
            if self.is_line_full(row) {
                events.on_line_cleared_at(row);
                self.collapse_line(row);
                cleared += 1;
            } else {
                row += 1;
            }
        }

        if cleared > 0 {
            events.on_lines_cleared(cleared);
        }
        cleared
    }

    /// Empty the entire grid
    pub fn clear_board(&mut self) {
        self.cells.fill(None);
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Rows from top to bottom, each left to right
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.bounds.width().max(1) as usize).rev()
    }
}

impl Default for PlayingField {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
