//! Piece controller - the falling piece and its collision checks
//!
//! An [`ActivePiece`] is a small `Copy` value: kind, current (possibly
//! rotated) shape and top-left anchor. Moves and rotations return a new value;
//! the game loop decides whether to commit it.
//!
//! Rotation has no wall kicks. A rotation that collides is rejected outright.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::shapes::{shape_of, Shape, MAX_SHAPE_SIZE};
use crate::types::PieceKind;

/// Absolute board coordinates of a piece's filled cells
pub type PieceCells = ArrayVec<(i8, i8), { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// New piece in canonical orientation, anchored at
    /// `(width / 2 - 1, 0)`.
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        Self {
            kind,
            shape: shape_of(kind),
            x: (board_width / 2) as i8 - 1,
            y: 0,
        }
    }

    /// Absolute coordinates of every filled cell
    pub fn cells(&self) -> PieceCells {
        self.shape
            .filled()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// Whether the piece shifted by `(dx, dy)` would hit a wall, the floor or
    /// a locked cell. Cells above the top never collide.
    pub fn collides(&self, board: &Board, dx: i8, dy: i8) -> bool {
        self.shape
            .filled()
            .any(|(mx, my)| board.is_occupied(self.x + mx + dx, self.y + my + dy))
    }

    /// Anchor shifted by `(dx, dy)`. Callers check [`collides`](Self::collides) first.
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Shape turned 90° clockwise around the unchanged anchor
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }

    /// Rows the piece can fall before resting
    pub fn drop_distance(&self, board: &Board) -> u32 {
        let mut steps: i8 = 0;
        while !self.collides(board, 0, steps + 1) {
            steps += 1;
        }
        steps as u32
    }
}

/// Free-function form of [`ActivePiece::collides`]
pub fn collides(piece: &ActivePiece, board: &Board, dx: i8, dy: i8) -> bool {
    piece.collides(board, dx, dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_is_centered() {
        let p = ActivePiece::spawn(PieceKind::T, 10);
        assert_eq!((p.x, p.y), (4, 0));
        assert_eq!(p.shape, shape_of(PieceKind::T));

        let p = ActivePiece::spawn(PieceKind::I, 7);
        assert_eq!(p.x, 2);
    }

    #[test]
    fn cells_are_absolute() {
        let p = ActivePiece::spawn(PieceKind::O, 10);
        assert_eq!(p.cells().as_slice(), &[(4, 0), (5, 0), (4, 1), (5, 1)]);
    }

    #[test]
    fn walls_collide() {
        let board = Board::standard();
        let p = ActivePiece::spawn(PieceKind::O, 10);
        assert!(!p.collides(&board, -4, 0));
        assert!(p.collides(&board, -5, 0));
        assert!(!p.collides(&board, 4, 0));
        assert!(p.collides(&board, 5, 0));
    }

    #[test]
    fn floor_collides() {
        let board = Board::standard();
        let p = ActivePiece::spawn(PieceKind::O, 10);
        assert!(!p.collides(&board, 0, 18));
        assert!(p.collides(&board, 0, 19));
        assert_eq!(p.drop_distance(&board), 18);
    }

    #[test]
    fn above_top_is_free() {
        let board = Board::standard();
        let p = ActivePiece::spawn(PieceKind::I, 10).translated(0, -3);
        assert!(!p.collides(&board, 0, 0));
        assert!(!p.collides(&board, 0, -5));
    }

    #[test]
    fn locked_cells_collide() {
        let mut board = Board::standard();
        board.set(4, 3, Some(PieceKind::Z));
        let p = ActivePiece::spawn(PieceKind::O, 10);
        assert!(!p.collides(&board, 0, 1));
        assert!(p.collides(&board, 0, 2));
        assert_eq!(p.drop_distance(&board), 1);
    }

    #[test]
    fn collides_does_not_move_piece() {
        let board = Board::standard();
        let p = ActivePiece::spawn(PieceKind::S, 10);
        let copy = p;
        let _ = collides(&p, &board, 3, 7);
        assert_eq!(p, copy);
    }

    #[test]
    fn rotation_keeps_anchor() {
        let p = ActivePiece::spawn(PieceKind::L, 10).translated(-2, 5);
        let r = p.rotated();
        assert_eq!((r.x, r.y), (p.x, p.y));
        assert_eq!(r.shape, p.shape.rotated_cw());
    }
}
