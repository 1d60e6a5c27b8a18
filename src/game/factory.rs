// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Random piece factory.
//!
//! Draws uniformly over the piece kinds and assigns each created piece
//! a unique, strictly increasing identifier. The id counter is owned by
//! the factory and never resets for the life of the process.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::piece::{Piece, PieceId, PieceKind};

/// Generator of new pieces with unique ids
pub struct PieceFactory {
    /// Random source for kind selection, seeded once at construction
    rng: StdRng,
    /// Next identifier to assign
    next_id: PieceId,
}

impl PieceFactory {
    /// Create a factory seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            next_id: 0,
        }
    }

    /// Create a factory with a fixed seed for reproducible draws
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            next_id: 0,
        }
    }

    /// Create a new piece with a random kind and the next identifier
    ///
    /// Always succeeds; the counter advances by exactly one per call.
    pub fn create_piece(&mut self) -> Piece {
        let kind = PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())];
        let id = self.next_id;
        self.next_id += 1;
        Piece::new(kind, id)
    }

    /// Total number of pieces created so far
    ///
    /// Equals the next identifier to be assigned.
    pub fn pieces_created(&self) -> u64 {
        self.next_id
    }
}

impl Default for PieceFactory {
    fn default() -> Self {
        Self::new()
    }
}
