use std::hash::{DefaultHasher, Hasher};

use lazy_static::lazy_static;

use crate::{game::consts::SIZE, prelude::*};

/// Two colors times two ranks.
const PIECES: usize = 4;

/// We need a bitstring for each piece on each cell.
const NUM_BITSTRINGS: usize = PIECES * SIZE;

lazy_static! {
    /// The table of bitstrings used by the zobrist calculations.
    static ref BITSTRINGS: [u64; NUM_BITSTRINGS] =
    {
        let mut table = [0u64; NUM_BITSTRINGS];
        let mut hasher = DefaultHasher::new();

        for (i, bitstring) in table.iter_mut().enumerate()
        {
            hasher.write_u64(i as u64);
            *bitstring = hasher.finish();
        }
        table
    };
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// An incrementally maintained zobrist hash of a piece layout.
pub struct ZobristTable
{
    /// The hash being operated on.
    current: ZobristHash,
}

impl ZobristTable
{
    /// Gets the hash associated with the current layout.
    pub fn get(&self) -> ZobristHash
    {
        self.current
    }

    /// Hashes a piece into or out of a particular position. The operation is symmetric.
    pub fn hash(&mut self, piece: &Piece, at: Position) -> &mut Self
    {
        let index = PIECES * at.index() + piece.index();
        self.current ^= BITSTRINGS[index];
        self
    }
}

/// A zobrist hash of the pieces on a board. It does not encode whose turn it is.
pub type ZobristHash = u64;
