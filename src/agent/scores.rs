use crate::prelude::*;

/// The value of a position the maximizing side cannot move in.
pub const LOSS: f64 = f64::NEG_INFINITY;

/// The value of a position the minimizing side cannot move in.
pub const WIN: f64 = f64::INFINITY;

#[derive(Clone, Copy, Debug, PartialEq)]
/// The alpha-beta window: the range of values that can still influence the result above the current node.
pub struct Window
{
    pub alpha: f64,
    pub beta:  f64,
}

impl Default for Window
{
    fn default() -> Self
    {
        Window::FULL
    }
}

impl Window
{
    /// The unbounded window every top-level search starts with.
    pub const FULL: Window = Window { alpha: LOSS, beta: WIN };

    /// Whether a node's best value so far makes its remaining candidates irrelevant.
    pub fn cutoff(&self, value: f64, minimizing: bool) -> bool
    {
        if minimizing
        {
            value <= self.alpha
        }
        else
        {
            value >= self.beta
        }
    }

    /// Raises alpha (maximizing) or lowers beta (minimizing) to account for a value.
    pub fn narrow(&mut self, value: f64, minimizing: bool)
    {
        if minimizing
        {
            self.beta = self.beta.min(value);
        }
        else
        {
            self.alpha = self.alpha.max(value);
        }
    }

    /// Whether the window has closed, so that no value can fall strictly inside it.
    pub fn closed(&self) -> bool
    {
        self.alpha >= self.beta
    }
}

#[derive(Clone, Debug)]
/// The result of searching a position: its value and the path that achieves it.
pub struct Outcome
{
    pub value: f64,
    pub path:  Option<Path>,
}

impl Outcome
{
    /// An evaluated leaf, with no move attached.
    pub fn leaf(value: f64) -> Self
    {
        Outcome { value, path: None }
    }

    /// The outcome of a node before any candidate has been examined.
    ///
    /// If no candidate ever is, the mover has no legal move and this is what the node returns.
    pub fn terminal(minimizing: bool) -> Self
    {
        Outcome::leaf(if minimizing { WIN } else { LOSS })
    }

    /// Offers a candidate's value, keeping it only when it is strictly better than the best so far.
    ///
    /// The first candidate is always kept. Ties keep the earlier candidate. Returns whether the candidate was kept.
    pub fn improve(&mut self, value: f64, path: Path, minimizing: bool) -> bool
    {
        let better = if minimizing { value < self.value } else { value > self.value };
        if self.path.is_none() || better
        {
            self.value = value;
            self.path = Some(path);
            true
        }
        else
        {
            false
        }
    }
}
