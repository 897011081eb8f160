use crate::prelude::*;

/// Minimax search with alpha-beta pruning over independent board copies.
///
/// Every candidate is played on its own duplicate of the board, so no branch can observe another's moves and the
/// board handed to `search` is never touched.
///
/// The result does not depend on pruning: a search with the window forced open at every node returns the same value,
/// only after examining more branches. Among candidates of equal value the first one generated wins, so the move
/// generator's order decides ties.
pub struct Minimax<G, H, M = Unmemoized>
{
    config:    SearchConfig<H>,
    generator: G,
    memo:      M,

    /// The number of candidate paths examined, at any depth.
    explored: u64,
}

impl<G, H> Minimax<G, H>
where
    G: MoveGenerator,
    H: Heuristic,
{
    /// Creates a new engine that remembers nothing between nodes.
    pub fn new(config: SearchConfig<H>, generator: G) -> Self
    {
        Minimax {
            config,
            generator,
            memo: Unmemoized,
            explored: 0,
        }
    }
}

impl<G, H, M> Minimax<G, H, M>
where
    G: MoveGenerator,
    H: Heuristic,
    M: Memo,
{
    /// Searches the configured board to the configured depth.
    pub fn best_move(&mut self) -> Result<Outcome>
    {
        let board = self.config.board.duplicate();
        let before = self.explored;
        let outcome = self.search(&board, self.config.depth, false, Window::FULL)?;

        match &outcome.path
        {
            | Some(path) => log::debug!(
                "{} at depth {}: found {} scored {} after {} paths",
                self.config.color,
                self.config.depth,
                path,
                outcome.value,
                self.explored - before
            ),
            | None => log::debug!("{} at depth {}: no move, scored {}", self.config.color, self.config.depth, outcome.value),
        };

        Ok(outcome)
    }

    /// The number of candidate paths examined so far, at any depth.
    pub fn explored(&self) -> u64
    {
        self.explored
    }

    /// Gets the memo strategy.
    pub fn memo(&self) -> &M
    {
        &self.memo
    }

    /// Searches `board` to `depth` plies.
    ///
    /// At depth 0 the heuristic is evaluated for the configured color, whoever is to move. Otherwise the mover is the
    /// configured color when maximizing and its opponent when minimizing; each of its candidate paths is played on a
    /// fresh copy of the board and searched one ply shallower, until the window proves the remaining candidates
    /// irrelevant.
    ///
    /// The returned path is `None` at depth 0 and when the mover has no legal move.
    pub fn search(&mut self, board: &Board, depth: Depth, minimizing: bool, window: Window) -> Result<Outcome>
    {
        if depth == 0
        {
            return Ok(Outcome::leaf(self.config.heuristic.evaluate(board, self.config.color)));
        }

        let mut window = window;
        if let Some(outcome) = self.memo.probe(board, depth, minimizing, &mut window)?
        {
            return Ok(outcome);
        }
        let searched = window;

        let mover = self.config.mover(minimizing);
        let mut best = Outcome::terminal(minimizing);

        for candidate in self.generator.generate(board, mover)
        {
            self.explored += 1;

            let mut copy = board.duplicate();
            let path = candidate.translate(&copy)?;
            copy.play(&path).map_err(Error::internal)?;

            let value = self.search(&copy, depth - 1, !minimizing, window)?.value;

            best.improve(value, path, minimizing);
            window.narrow(best.value, minimizing);

            if window.cutoff(best.value, minimizing)
            {
                break;
            }
        }

        self.memo.record(board, depth, minimizing, searched, &best);
        Ok(best)
    }
}

impl<G, H, M> Minimax<G, H, M>
where
    G: MoveGenerator,
    H: Heuristic,
{
    /// Replaces the memo strategy.
    pub fn with_memo<N: Memo>(self, memo: N) -> Minimax<G, H, N>
    {
        Minimax {
            config: self.config,
            generator: self.generator,
            memo,
            explored: self.explored,
        }
    }

    /// Takes the memo strategy back, so it can be reused by another engine.
    pub fn into_memo(self) -> M
    {
        self.memo
    }
}
