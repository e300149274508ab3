//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or holds the
//! kind of the piece that locked there. Dimensions are fixed at creation.
//! Storage is a flat row-major vector.
//! Coordinates: (x, y) with x growing left to right and y growing top to bottom.
//!
//! Out-of-range queries follow collision semantics: left/right of the board and
//! below the floor count as occupied, anything above the top row counts as
//! free so pieces can spawn partially off-board.

use crate::error::ConfigError;
use crate::piece::ActivePiece;
use crate::types::{
    Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, MAX_DIMENSION, MIN_HEIGHT, MIN_WIDTH,
};

/// Whether a `width x height` board is accepted: every piece must fit at the
/// spawn anchor and coordinates must stay in `i8`.
pub fn dimensions_in_range(width: u8, height: u8) -> bool {
    (MIN_WIDTH..=MAX_DIMENSION).contains(&width) && (MIN_HEIGHT..=MAX_DIMENSION).contains(&height)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board
    pub fn new(width: u8, height: u8) -> Result<Self, ConfigError> {
        if !dimensions_in_range(width, height) {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        })
    }

    /// Empty 10x20 board
    pub fn standard() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            cells: vec![None; BOARD_WIDTH as usize * BOARD_HEIGHT as usize],
        }
    }

    /// Parse a board from text rows, top row first.
    ///
    /// `.` is empty, a piece letter (any case) is a locked cell of that kind.
    /// All rows must share one length.
    pub fn from_rows(rows: &[&str]) -> Result<Self, ConfigError> {
        let height = u8::try_from(rows.len()).unwrap_or(u8::MAX);
        let width = rows
            .first()
            .map(|r| u8::try_from(r.chars().count()).unwrap_or(u8::MAX))
            .unwrap_or(0);
        let mut board = Self::new(width, height)?;

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width as usize {
                return Err(ConfigError::InvalidBoardRow(y));
            }
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '.' => None,
                    other => Some(
                        PieceKind::from_str(&other.to_string())
                            .ok_or(ConfigError::InvalidBoardRow(y))?,
                    ),
                };
                board.cells[y * width as usize + x] = cell;
            }
        }
        Ok(board)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Collision query.
    ///
    /// In range: true if filled. Horizontally out of range or at/below the
    /// floor: true. Above the top (y < 0) with x in range: false.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= self.width as i8 || y >= self.height as i8 {
            return true;
        }
        if y < 0 {
            return false;
        }
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        let width = self.width as usize;
        let start = y * width;
        self.cells[start..start + width].iter().all(|cell| cell.is_some())
    }

    /// New board with every filled cell of `piece` stamped with its kind.
    ///
    /// Cells off the visible board (including above the top) are dropped.
    pub fn merge(&self, piece: &ActivePiece) -> Board {
        let mut merged = self.clone();
        for (x, y) in piece.cells() {
            merged.set(x, y, Some(piece.kind));
        }
        merged
    }

    /// New board with all full rows removed and the rest compacted downward,
    /// plus the number of rows removed.
    pub fn clear_full_rows(&self) -> (Board, usize) {
        let mut cleared = self.clone();
        let count = cleared.compact_full_rows();
        (cleared, count)
    }

    /// Two-pointer compaction, bottom to top, in place.
    fn compact_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut write_y = height;
        let mut removed = 0;

        for read_y in (0..height).rev() {
            if self.is_row_full(read_y) {
                removed += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        // Rows above the last survivor become empty.
        self.cells[..write_y * width].fill(None);

        removed
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
