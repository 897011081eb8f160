use crate::prelude::*;

/// Minimax search with alpha-beta pruning that plays and takes back moves on a single board.
///
/// This trades the per-branch board copies of `Minimax` for a strict play/undo discipline: every move played is taken
/// back before its node returns, including when the node is cut off or a child fails. It returns the same values,
/// paths and explored counts as `Minimax` without a memo.
pub struct InPlace<G, H>
{
    config:    SearchConfig<H>,
    generator: G,
    explored:  u64,
}

impl<G, H> InPlace<G, H>
where
    G: MoveGenerator,
    H: Heuristic,
{
    /// Creates a new engine.
    pub fn new(config: SearchConfig<H>, generator: G) -> Self
    {
        InPlace {
            config,
            generator,
            explored: 0,
        }
    }

    /// Searches the configured board to the configured depth.
    pub fn best_move(&mut self) -> Result<Outcome>
    {
        let mut board = self.config.board.duplicate();
        let outcome = self.search(&mut board, self.config.depth, false, Window::FULL)?;
        log::debug!(
            "{} at depth {}: scored {} after {} paths",
            self.config.color,
            self.config.depth,
            outcome.value,
            self.explored
        );
        Ok(outcome)
    }

    /// The number of candidate paths examined so far, at any depth.
    pub fn explored(&self) -> u64
    {
        self.explored
    }

    /// Searches `board` to `depth` plies. The board is left exactly as it was found.
    pub fn search(&mut self, board: &mut Board, depth: Depth, minimizing: bool, window: Window) -> Result<Outcome>
    {
        if depth == 0
        {
            return Ok(Outcome::leaf(self.config.heuristic.evaluate(board, self.config.color)));
        }

        let mut window = window;
        let mover = self.config.mover(minimizing);
        let mut best = Outcome::terminal(minimizing);

        for path in self.generator.generate(board, mover)
        {
            self.explored += 1;

            let undo = board.play(&path).map_err(Error::internal)?;
            let child = self.search(board, depth - 1, !minimizing, window);
            board.undo(&undo);

            best.improve(child?.value, path, minimizing);
            window.narrow(best.value, minimizing);

            if window.cutoff(best.value, minimizing)
            {
                break;
            }
        }

        Ok(best)
    }
}
