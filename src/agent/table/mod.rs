use mini_moka::unsync::Cache;

use crate::prelude::*;

mod entry;

pub use entry::{Bound, Entry, Key};

/// A strategy that remembers searched nodes so they need not be searched again.
///
/// The engine probes before expanding a node and records the node's outcome afterwards.
pub trait Memo
{
    /// Looks a node up before it is expanded.
    ///
    /// Returns an outcome when the stored result settles the node; otherwise it may narrow `window` using a stored
    /// bound and returns `None`.
    fn probe(&mut self, board: &Board, depth: Depth, minimizing: bool, window: &mut Window) -> Result<Option<Outcome>>;

    /// Stores the outcome of a node searched with `window`.
    fn record(&mut self, board: &Board, depth: Depth, minimizing: bool, window: Window, outcome: &Outcome);
}

#[derive(Clone, Copy, Debug, Default)]
/// The memo strategy that remembers nothing.
pub struct Unmemoized;

impl Memo for Unmemoized
{
    fn probe(&mut self, _board: &Board, _depth: Depth, _minimizing: bool, _window: &mut Window) -> Result<Option<Outcome>>
    {
        Ok(None)
    }

    fn record(&mut self, _board: &Board, _depth: Depth, _minimizing: bool, _window: Window, _outcome: &Outcome) {}
}

/// A bounded transposition table keyed by position, remaining depth and side to move.
///
/// Values are stored from the point of view of the searching color, so a table must only be used by searches for one
/// color and one heuristic.
pub struct TranspositionTable
{
    cache:  Cache<Key, Entry>,
    hits:   u64,
    misses: u64,
}

impl std::fmt::Debug for TranspositionTable
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(
            f,
            "TranspositionTable {{ entries: {}, hits: {}, misses: {} }}",
            self.cache.entry_count(),
            self.hits,
            self.misses
        )
    }
}

impl TranspositionTable
{
    /// Creates a table holding at most `capacity` entries.
    pub fn new(capacity: u64) -> TranspositionTable
    {
        log::trace!("Allocated a TranspositionTable with {} entries.", capacity);

        TranspositionTable {
            cache:  Cache::new(capacity),
            hits:   0,
            misses: 0,
        }
    }

    /// How many probes found a stored node.
    pub fn hits(&self) -> u64
    {
        self.hits
    }

    /// How many probes found nothing.
    pub fn misses(&self) -> u64
    {
        self.misses
    }
}

impl Memo for TranspositionTable
{
    fn probe(&mut self, board: &Board, depth: Depth, minimizing: bool, window: &mut Window) -> Result<Option<Outcome>>
    {
        let key = Key {
            hash: board.zobrist(),
            depth,
            minimizing,
        };

        let Some(entry) = self.cache.get(&key).cloned()
        else
        {
            self.misses += 1;
            return Ok(None);
        };
        self.hits += 1;

        // The stored path belongs to whichever board was searched; rebind it to this one.
        let path = entry.path.map(|p| p.translate(board)).transpose()?;
        let outcome = Outcome { value: entry.value, path };

        match entry.bound
        {
            | Bound::Exact => return Ok(Some(outcome)),
            | Bound::Lower => window.alpha = window.alpha.max(entry.value),
            | Bound::Upper => window.beta = window.beta.min(entry.value),
        };

        if window.closed()
        {
            return Ok(Some(outcome));
        }
        Ok(None)
    }

    fn record(&mut self, board: &Board, depth: Depth, minimizing: bool, window: Window, outcome: &Outcome)
    {
        let key = Key {
            hash: board.zobrist(),
            depth,
            minimizing,
        };

        let entry = Entry {
            value: outcome.value,
            bound: Bound::classify(outcome.value, window),
            path:  outcome.path.clone(),
        };
        self.cache.insert(key, entry);
    }
}
