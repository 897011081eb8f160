use std::cmp::Reverse;

use itertools::Itertools;

use crate::prelude::*;

#[derive(Clone, Copy, Debug, Default)]
/// A move generator that hands out the longest capture sequences first.
///
/// Paths capturing the same number of pieces keep the order of the wrapped generator. Trying strong moves early lets
/// alpha-beta cut off sooner; it can also change which of several equally valued paths a search settles on.
pub struct CapturesFirst<G>(pub G);

impl<G: MoveGenerator> MoveGenerator for CapturesFirst<G>
{
    fn generate(&self, board: &Board, color: Color) -> Vec<Path>
    {
        self.0
            .generate(board, color)
            .into_iter()
            .sorted_by_key(|path| Reverse(path.captures().len()))
            .collect()
    }
}
