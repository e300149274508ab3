//! RNG module - piece selection
//!
//! Pieces are drawn independently and uniformly from the seven kinds. There is
//! no bag, so repeats and droughts are possible.
//!
//! [`PieceSource`] is the seam: [`UniformPieces`] is the game's generator,
//! [`FixedSequence`] replays a fixed cycle for tests and replays.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

pub trait PieceSource {
    /// Draw the next piece kind
    fn next_kind(&mut self) -> PieceKind;
}

/// Uniform independent draws from a seeded generator
#[derive(Debug, Clone)]
pub struct UniformPieces {
    seed: u64,
    rng: StdRng,
}

impl UniformPieces {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed from the thread RNG
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this generator started from
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl PieceSource for UniformPieces {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.random_range(0..PieceKind::ALL.len())]
    }
}

/// Endless cycle over a fixed list of kinds
#[derive(Debug, Clone)]
pub struct FixedSequence {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl FixedSequence {
    /// Returns `None` for an empty list.
    pub fn new(kinds: &[PieceKind]) -> Option<Self> {
        if kinds.is_empty() {
            return None;
        }
        Some(Self {
            kinds: kinds.to_vec(),
            index: 0,
        })
    }

    /// Same kind forever
    pub fn repeat(kind: PieceKind) -> Self {
        Self {
            kinds: vec![kind],
            index: 0,
        }
    }
}

impl PieceSource for FixedSequence {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.index];
        self.index = (self.index + 1) % self.kinds.len();
        kind
    }
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}
