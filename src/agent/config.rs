use crate::prelude::*;

/// The number of plies a search looks ahead.
pub type Depth = u8;

#[derive(Clone, Debug)]
/// Everything a search needs to know up front. It does not change during a search.
pub struct SearchConfig<H>
{
    /// The color the search plays for; every evaluation is made from its point of view.
    pub color:     Color,
    /// The position to search from.
    pub board:     Board,
    /// How many plies to look ahead. A depth of 0 only evaluates the board.
    pub depth:     Depth,
    pub heuristic: H,
}

impl<H: Heuristic> SearchConfig<H>
{
    /// Creates a new search configuration.
    pub fn new(color: Color, board: Board, depth: Depth, heuristic: H) -> Self
    {
        SearchConfig {
            color,
            board,
            depth,
            heuristic,
        }
    }

    /// The color to move at a ply: the search's own color when maximizing, its opponent when minimizing.
    pub fn mover(&self, minimizing: bool) -> Color
    {
        if minimizing
        {
            self.color.flip()
        }
        else
        {
            self.color
        }
    }
}
