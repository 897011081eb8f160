use arrayvec::ArrayVec;
use itertools::Itertools;

use crate::{
    game::consts::{MAX_CAPTURES, MAX_PATH},
    prelude::*,
};

#[derive(Clone, Debug)]
/// The route a piece travels during one turn, along with the enemy pieces it jumps.
///
/// The first cell is the origin and the last the destination; any cells in between are intermediate jump landings.
/// Captures are listed in travel order, each as the cell the captured piece stood on.
///
/// A path snapshots the cells of the board it was generated against. Use `translate` before playing it on any
/// other board.
pub struct Path
{
    cells:    ArrayVec<Cell, MAX_PATH>,
    captures: ArrayVec<Cell, MAX_CAPTURES>,
}

impl Path
{
    /// Builds a path, checking its shape.
    pub fn new(cells: &[Cell], captures: &[Cell]) -> Result<Path>
    {
        if cells.len() < 2 || cells.len() > MAX_PATH
        {
            let err_msg = format!("A path visits 2 to {} cells (found {}).", MAX_PATH, cells.len());
            return Err(Error::new(Kind::InvalidMove, err_msg));
        }

        if captures.len() > cells.len() - 1
        {
            let err_msg = format!("{} captures cannot happen in {} steps.", captures.len(), cells.len() - 1);
            return Err(Error::new(Kind::InvalidMove, err_msg));
        }

        if captures.iter().any(|cell| cell.is_empty())
        {
            return Err(Error::new(Kind::InvalidMove, "Captured cells must hold a piece.".into()));
        }

        Ok(Path {
            cells:    cells.iter().copied().collect(),
            captures: captures.iter().copied().collect(),
        })
    }

    /// Assembles a path from parts already known to be well formed.
    pub(crate) fn from_parts(cells: ArrayVec<Cell, MAX_PATH>, captures: ArrayVec<Cell, MAX_CAPTURES>) -> Path
    {
        debug_assert!(cells.len() >= 2 && captures.len() < cells.len());
        Path { cells, captures }
    }

    /// The cells captured along the way, in travel order.
    pub fn captures(&self) -> &[Cell]
    {
        &self.captures
    }

    /// The cells visited, from origin to destination.
    pub fn cells(&self) -> &[Cell]
    {
        &self.cells
    }

    /// The cell the move ends on.
    pub fn destination(&self) -> &Cell
    {
        &self.cells[self.cells.len() - 1]
    }

    /// Whether this path jumps over at least one enemy piece.
    pub fn is_capture(&self) -> bool
    {
        !self.captures.is_empty()
    }

    /// The cell the move starts from.
    pub fn origin(&self) -> &Cell
    {
        &self.cells[0]
    }

    /// Rebinds this path onto another board.
    ///
    /// Every cell is looked up by board position on the target, and every captured piece is replaced by the piece
    /// standing on the same position there. A captured position left empty on the target means the path does not
    /// belong to that board at all.
    pub fn translate(&self, target: &Board) -> Result<Path>
    {
        let cells = self.cells.iter().map(|cell| *target.cell(cell.position())).collect();

        let mut captures = ArrayVec::new();
        for cell in &self.captures
        {
            let rebound = target.cell(cell.position());
            if rebound.is_empty()
            {
                let err_msg = format!("Cannot translate {}: nothing to capture at {}.", self, cell.position());
                return Err(Error::internal(Error::new(Kind::InvalidMove, err_msg)));
            }
            captures.push(*rebound);
        }

        Ok(Path { cells, captures })
    }

    /// The ranks of the captured pieces, in travel order.
    fn captured_ranks(&self) -> impl Iterator<Item = Option<Rank>> + '_
    {
        self.captures.iter().map(|cell| cell.piece.map(|p| p.rank))
    }

    /// The board positions visited, in travel order.
    fn positions(&self) -> impl Iterator<Item = Position> + '_
    {
        self.cells.iter().map(|cell| cell.position())
    }
}

impl PartialEq for Path
{
    fn eq(&self, other: &Self) -> bool
    {
        self.positions().eq(other.positions()) && self.captured_ranks().eq(other.captured_ranks())
    }
}

impl Eq for Path {}

impl std::hash::Hash for Path
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H)
    {
        self.positions().for_each(|p| p.hash(state));
        self.captured_ranks().for_each(|r| r.hash(state));
    }
}

impl std::fmt::Display for Path
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let separator = if self.is_capture() { "x" } else { "-" };
        write!(f, "{}", self.positions().join(separator))
    }
}
