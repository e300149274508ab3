//! Game state module - the state machine
//!
//! Ties together board, pieces, piece source and scoring. Every transition
//! takes `&mut self`, builds the new board/piece values first and commits them
//! at the end, so no caller ever observes a half-applied step.
//!
//! States: `Running`, `Paused`, `GameOver`. Movement commands only act while
//! running; in any other state they are no-ops that return `false`.

use log::{debug, trace};
use serde::Serialize;

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::piece::ActivePiece;
use crate::rng::{PieceSource, UniformPieces};
use crate::scoring::calculate_lock_score;
use crate::shapes::validate_catalog;
use crate::snapshot::RenderSnapshot;
use crate::types::{Command, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    Running,
    Paused,
    GameOver,
}

/// Summary of the most recent lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    pub drop_bonus: u32,
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformPieces> {
    board: Board,
    active: Option<ActivePiece>,
    next: PieceKind,
    source: S,
    score: u32,
    lines: u32,
    status: Status,
    last_event: Option<LockEvent>,
}

impl GameState<UniformPieces> {
    /// New game with uniform random pieces, seeded from the config or entropy.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let source = match config.seed {
            Some(seed) => UniformPieces::new(seed),
            None => UniformPieces::from_entropy(),
        };
        Self::with_source(config, source)
    }

    /// Standard 10x20 game with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        let mut source = UniformPieces::new(seed);
        let board = Board::standard();
        let (active, next, status) = Self::first_pieces(&board, &mut source);
        Self::assemble(board, active, next, status, source)
    }
}

impl<S: PieceSource> GameState<S> {
    /// New game drawing pieces from `source`.
    ///
    /// Refuses to start on invalid dimensions, a zero drop interval or a
    /// corrupt shape catalog.
    pub fn with_source(config: &GameConfig, mut source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        validate_catalog()?;
        let board = Board::new(config.width, config.height)?;
        let (active, next, status) = Self::first_pieces(&board, &mut source);
        Ok(Self::assemble(board, active, next, status, source))
    }

    fn assemble(
        board: Board,
        active: Option<ActivePiece>,
        next: PieceKind,
        status: Status,
        source: S,
    ) -> Self {
        Self {
            board,
            active,
            next,
            source,
            score: 0,
            lines: 0,
            status,
            last_event: None,
        }
    }

    /// Spawn the first active piece and draw the lookahead.
    fn first_pieces(board: &Board, source: &mut S) -> (Option<ActivePiece>, PieceKind, Status) {
        let piece = ActivePiece::spawn(source.next_kind(), board.width());
        let next = source.next_kind();
        if piece.collides(board, 0, 0) {
            (None, next, Status::GameOver)
        } else {
            (Some(piece), next, Status::Running)
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub fn is_paused(&self) -> bool {
        self.status == Status::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.status == Status::GameOver
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn next(&self) -> PieceKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply one command. Returns whether the state changed.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_horizontal(-1),
            Command::MoveRight => self.move_horizontal(1),
            Command::SoftDrop => self.move_down(),
            Command::Rotate => self.rotate(),
            Command::HardDrop => self.hard_drop(),
            Command::TogglePause => self.toggle_pause(),
            Command::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Automatic descent step.
    pub fn tick(&mut self) -> bool {
        trace!("descent tick");
        self.move_down()
    }

    /// Piece to act on, only while running.
    fn playable_piece(&self) -> Option<ActivePiece> {
        match self.status {
            Status::Running => self.active,
            Status::Paused | Status::GameOver => None,
        }
    }

    /// Move down one row, or lock when blocked.
    pub fn move_down(&mut self) -> bool {
        let Some(piece) = self.playable_piece() else {
            return false;
        };
        if piece.collides(&self.board, 0, 1) {
            self.lock(piece, None);
        } else {
            self.active = Some(piece.translated(0, 1));
        }
        true
    }

    pub fn move_horizontal(&mut self, dx: i8) -> bool {
        let Some(piece) = self.playable_piece() else {
            return false;
        };
        if piece.collides(&self.board, dx, 0) {
            return false;
        }
        self.active = Some(piece.translated(dx, 0));
        true
    }

    /// Rotate clockwise in place; rejected wholesale on collision.
    pub fn rotate(&mut self) -> bool {
        let Some(piece) = self.playable_piece() else {
            return false;
        };
        let rotated = piece.rotated();
        if rotated.collides(&self.board, 0, 0) {
            return false;
        }
        self.active = Some(rotated);
        true
    }

    /// Fall to the lowest legal row and lock, scoring two points per row.
    pub fn hard_drop(&mut self) -> bool {
        let Some(piece) = self.playable_piece() else {
            return false;
        };
        let steps = piece.drop_distance(&self.board);
        self.lock(piece.translated(0, steps as i8), Some(steps));
        true
    }

    /// Running <-> Paused. Ignored after game over.
    pub fn toggle_pause(&mut self) -> bool {
        self.status = match self.status {
            Status::Running => Status::Paused,
            Status::Paused => Status::Running,
            Status::GameOver => return false,
        };
        debug!("status -> {:?}", self.status);
        true
    }

    /// Fresh running game on an empty board of the same size.
    pub fn reset(&mut self) {
        let board = Board::new(self.board.width(), self.board.height())
            .unwrap_or_else(|_| Board::standard());
        let (active, next, status) = Self::first_pieces(&board, &mut self.source);

        self.board = board;
        self.active = active;
        self.next = next;
        self.score = 0;
        self.lines = 0;
        self.status = status;
        self.last_event = None;
        debug!("game reset");
    }

    /// Merge, clear rows, score, promote the lookahead and check for game over.
    fn lock(&mut self, piece: ActivePiece, hard_drop_steps: Option<u32>) {
        let merged = self.board.merge(&piece);
        let (board, cleared) = merged.clear_full_rows();
        let score = calculate_lock_score(cleared, hard_drop_steps.unwrap_or(0));

        let spawned = ActivePiece::spawn(self.next, board.width());
        let next = self.source.next_kind();
        let game_over = spawned.collides(&board, 0, 0);

        self.board = board;
        self.score = self.score.saturating_add(score.total);
        self.lines = self.lines.saturating_add(cleared as u32);
        self.next = next;
        if game_over {
            self.active = None;
            self.status = Status::GameOver;
        } else {
            self.active = Some(spawned);
        }

        self.last_event = Some(LockEvent {
            kind: piece.kind,
            lines_cleared: cleared as u32,
            line_clear_score: score.line_clear_score,
            drop_bonus: score.drop_bonus,
            game_over,
        });

        if cleared > 0 {
            debug!("cleared {} rows for {} points", cleared, score.line_clear_score);
        }
        if game_over {
            debug!("game over with score {}", self.score);
        }
    }

    /// Immutable view for the presentation layer
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(
            &self.board,
            self.active.as_ref(),
            self.next,
            self.score,
            self.lines,
            self.status,
        )
    }
}

impl Default for GameState<UniformPieces> {
    fn default() -> Self {
        Self::seeded(1)
    }
}
