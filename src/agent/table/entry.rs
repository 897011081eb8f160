use crate::prelude::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How a stored value relates to the true value of its position.
pub enum Bound
{
    /// The search failed high: the true value is at least the stored one.
    Lower = 1,
    /// The search failed low: the true value is at most the stored one.
    Upper = 2,
    Exact = 3,
}

impl Bound
{
    /// Classifies a node's value against the window it was searched with.
    pub fn classify(value: f64, window: Window) -> Bound
    {
        if value <= window.alpha
        {
            Bound::Upper
        }
        else if value >= window.beta
        {
            Bound::Lower
        }
        else
        {
            Bound::Exact
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Identifies a searched node: the piece layout, the plies left to search, and which side was to move.
pub struct Key
{
    pub hash:       ZobristHash,
    pub depth:      Depth,
    pub minimizing: bool,
}

#[derive(Clone, Debug)]
/// Data associated with the most recent search of a particular node.
pub struct Entry
{
    pub value: f64,
    pub bound: Bound,
    /// The best path found, relative to the board that was searched.
    pub path:  Option<Path>,
}
