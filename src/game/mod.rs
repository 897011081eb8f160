pub(crate) mod board;
pub mod cell;
pub mod color;
pub(crate) mod path;
pub mod piece;
pub(crate) mod rules;

pub use board::{Board, GameState, Undo, ZobristHash};
pub use cell::{Cell, Position};
pub use color::Color;
pub use path::Path;
pub use piece::{Piece, Rank, Registry};
pub use rules::Draughts;

/// The dimensions of the playable part of the board.
///
/// Only the dark squares are playable, so every row of eight squares holds four cells.
pub mod consts
{
    pub const ROWS: usize = 8;
    pub const ROW_LENGTH: usize = 4;
    pub const SIZE: usize = ROWS * ROW_LENGTH;

    /// The longest possible jump sequence captures every enemy piece once.
    pub const MAX_CAPTURES: usize = 12;
    pub const MAX_PATH: usize = MAX_CAPTURES + 1;
}
