use crate::prelude::*;

pub mod config;
pub mod heuristics;
pub mod inplace;
pub mod minimax;
pub mod ordering;
pub mod scores;
pub mod table;

pub use config::*;
pub use heuristics::{Material, Mobility};
pub use inplace::InPlace;
pub use minimax::Minimax;
pub use ordering::CapturesFirst;
pub use scores::{Outcome, Window, LOSS, WIN};
pub use table::{Memo, TranspositionTable, Unmemoized};

/// A source of candidate moves for the search.
pub trait MoveGenerator
{
    /// Generates every legal path for `color` on `board`, including forced capture sequences.
    ///
    /// An empty list means `color` cannot move, which the search treats as a terminal position for that side.
    fn generate(&self, board: &Board, color: Color) -> Vec<Path>;
}

/// Scores a position. Higher is better for `color`.
pub trait Heuristic
{
    fn evaluate(&self, board: &Board, color: Color) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(&Board, Color) -> f64,
{
    fn evaluate(&self, board: &Board, color: Color) -> f64
    {
        self(board, color)
    }
}

impl<G: MoveGenerator + ?Sized> MoveGenerator for &G
{
    fn generate(&self, board: &Board, color: Color) -> Vec<Path>
    {
        (**self).generate(board, color)
    }
}
