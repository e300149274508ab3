//! Render snapshot - the immutable view handed to presentation
//!
//! The grid already has the active piece composited in. Cells hold the piece
//! kind; colors come from [`PieceKind::color`]. `Display` prints a plain-text
//! grid (`.` for empty, the kind letter for filled cells).

use std::fmt;

use serde::Serialize;

use crate::board::Board;
use crate::game_state::Status;
use crate::piece::ActivePiece;
use crate::shapes::{shape_of, Shape};
use crate::types::{Cell, PieceKind, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    pub shape: Shape,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            x: value.x,
            y: value.y,
            shape: value.shape,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Rgb,
}

impl From<PieceKind> for NextSnapshot {
    fn from(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: shape_of(kind),
            color: kind.color(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderSnapshot {
    pub width: u8,
    pub height: u8,
    /// Rows top to bottom, active piece included
    pub grid: Vec<Vec<Cell>>,
    pub active: Option<ActiveSnapshot>,
    pub next: NextSnapshot,
    pub score: u32,
    pub lines: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl RenderSnapshot {
    pub(crate) fn capture(
        board: &Board,
        active: Option<&ActivePiece>,
        next: PieceKind,
        score: u32,
        lines: u32,
        status: Status,
    ) -> Self {
        let display = match active {
            Some(piece) => board.merge(piece),
            None => board.clone(),
        };
        Self {
            width: board.width(),
            height: board.height(),
            grid: display.rows().map(|row| row.to_vec()).collect(),
            active: active.copied().map(ActiveSnapshot::from),
            next: NextSnapshot::from(next),
            score,
            lines,
            paused: status == Status::Paused,
            game_over: status == Status::GameOver,
        }
    }

    /// Cell at `(x, y)`; `None` when empty or out of range
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.grid.get(y).and_then(|row| row.get(x)).copied().flatten()
    }

    pub fn color_at(&self, x: usize, y: usize) -> Option<Rgb> {
        self.cell(x, y).map(|kind| kind.color())
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl fmt::Display for RenderSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for cell in row {
                let ch = cell.map(|k| k.letter()).unwrap_or('.');
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "score {}  lines {}  next {}", self.score, self.lines, self.next.kind.letter())?;
        if self.game_over {
            write!(f, "  GAME OVER")?;
        } else if self.paused {
            write!(f, "  PAUSED")?;
        }
        Ok(())
    }
}
