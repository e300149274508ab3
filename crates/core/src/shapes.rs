//! Shape catalog - piece matrices and rotation
//!
//! Every kind owns a square bitmask matrix (2x2 for O, 4x4 for I, 3x3 for the
//! rest). Catalog entries are constants; rotation produces a new matrix.
//!
//! ```text
//! I (4)   J (3)  L (3)  O (2)  S (3)  T (3)  Z (3)
//! ....    #..    ..#    ##     .##    .#.    ##.
//! ####    ###    ###    ##     ##.    ###    .##
//! ....    ...    ...           ...    ...    ...
//! ....
//! ```

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::ConfigError;
use crate::types::PieceKind;

/// Largest matrix side in the catalog
pub const MAX_SHAPE_SIZE: usize = 4;

/// Filled cells per piece
pub const MINOS_PER_PIECE: usize = 4;

/// Square bitmask matrix, stored in a fixed 4x4 array.
///
/// Only the top-left `size x size` region is meaningful; `cells[row][col]`.
/// Serialization emits just that region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    const fn from_rows<const N: usize>(rows: [[u8; N]; N]) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut y = 0;
        while y < N {
            let mut x = 0;
            while x < N {
                cells[y][x] = rows[y][x] != 0;
                x += 1;
            }
            y += 1;
        }
        Self {
            size: N as u8,
            cells,
        }
    }

    /// Side length of the square matrix
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the cell at column `x`, row `y` is filled.
    /// Coordinates outside the matrix are empty.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        let n = self.size as usize;
        x < n && y < n && self.cells[y][x]
    }

    /// Offsets `(dx, dy)` of filled cells in row-major order
    pub fn filled(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |y| {
            (0..n)
                .filter(move |&x| self.cells[y][x])
                .map(move |x| (x as i8, y as i8))
        })
    }

    pub fn filled_count(&self) -> usize {
        self.filled().count()
    }

    /// Rows of the meaningful region, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        let n = self.size as usize;
        self.cells[..n].iter().map(move |row| &row[..n])
    }

    /// 90° clockwise rotation: `new[x][size - 1 - y] = old[y][x]`
    pub fn rotated_cw(&self) -> Shape {
        let n = self.size as usize;
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for y in 0..n {
            for x in 0..n {
                cells[x][n - 1 - y] = self.cells[y][x];
            }
        }
        Shape {
            size: self.size,
            cells,
        }
    }
}

impl Serialize for Shape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<&[bool]> = self.rows().collect();
        let mut state = serializer.serialize_struct("Shape", 2)?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("cells", &rows)?;
        state.end()
    }
}

const I_SHAPE: Shape = Shape::from_rows([
    [0, 0, 0, 0],
    [1, 1, 1, 1],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);

const J_SHAPE: Shape = Shape::from_rows([
    [1, 0, 0],
    [1, 1, 1],
    [0, 0, 0],
]);

const L_SHAPE: Shape = Shape::from_rows([
    [0, 0, 1],
    [1, 1, 1],
    [0, 0, 0],
]);

const O_SHAPE: Shape = Shape::from_rows([
    [1, 1],
    [1, 1],
]);

const S_SHAPE: Shape = Shape::from_rows([
    [0, 1, 1],
    [1, 1, 0],
    [0, 0, 0],
]);

const T_SHAPE: Shape = Shape::from_rows([
    [0, 1, 0],
    [1, 1, 1],
    [0, 0, 0],
]);

const Z_SHAPE: Shape = Shape::from_rows([
    [1, 1, 0],
    [0, 1, 1],
    [0, 0, 0],
]);

/// Canonical (spawn orientation) shape of a piece kind
pub fn shape_of(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// Check every catalog entry is a 2..=4 square with exactly four filled cells.
pub fn validate_catalog() -> Result<(), ConfigError> {
    for kind in PieceKind::ALL {
        let shape = shape_of(kind);
        let size = shape.size() as usize;
        if !(2..=MAX_SHAPE_SIZE).contains(&size) || shape.filled_count() != MINOS_PER_PIECE {
            return Err(ConfigError::CorruptShape(kind));
        }
    }
    Ok(())
}
