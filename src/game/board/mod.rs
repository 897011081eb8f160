use arrayvec::ArrayVec;

use crate::{
    game::consts::{MAX_CAPTURES, ROWS, ROW_LENGTH, SIZE},
    prelude::*,
};

mod state;
mod zobrist;

pub use state::GameState;
pub use zobrist::ZobristHash;
use zobrist::ZobristTable;

#[derive(Clone)]
/// A checkers board: the 32 playable cells in storage order, top row first.
pub struct Board
{
    /// Cells indexed by storage index, which is the board position minus one.
    cells: [Cell; SIZE],

    /// A utility to calculate zobrist hashes for this board.
    ///
    /// It does not own any memo table; that responsibility is left to the agent.
    zobrist: ZobristTable,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Everything needed to take back a move played with `Board::play`.
pub struct Undo
{
    pub origin:      Position,
    pub destination: Position,
    pub piece:       Piece,
    pub captured:    ArrayVec<Cell, MAX_CAPTURES>,
}

impl PartialEq for Board
{
    fn eq(&self, other: &Self) -> bool
    {
        self.cells == other.cells
    }
}

impl Eq for Board {}

impl Default for Board
{
    fn default() -> Self
    {
        Board::new()
    }
}

impl std::fmt::Debug for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "Board {{ {}, {:#018x} }}", crate::notation::encode(self), self.zobrist.get())
    }
}

impl std::fmt::Display for Board
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        for row in 0..ROWS
        {
            let mut line = String::new();
            for column in 0..ROW_LENGTH
            {
                let cell = &self.cells[row * ROW_LENGTH + column];
                let symbol = cell.piece.map(|p| p.symbol()).unwrap_or('.');
                if row % 2 == 0
                {
                    line.push_str(&format!(" {}", symbol));
                }
                else
                {
                    line.push_str(&format!("{} ", symbol));
                }
            }
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl std::hash::Hash for Board
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H)
    {
        self.zobrist.get().hash(state)
    }
}

impl Board
{
    /// Creates an empty board.
    pub fn new() -> Board
    {
        Board {
            cells:   std::array::from_fn(|i| Cell::new(Position::from_index(i))),
            zobrist: ZobristTable::default(),
        }
    }

    /// Gets the cell at a board position.
    pub fn cell(&self, position: Position) -> &Cell
    {
        &self.cells[position.index()]
    }

    /// Gets every cell in storage order.
    pub fn cells(&self) -> &[Cell]
    {
        &self.cells
    }

    /// Counts the pieces of a color, optionally restricted to a rank.
    pub fn count(&self, color: Color, rank: Option<Rank>) -> usize
    {
        self.pieces(color).filter(|(_, piece)| rank.map_or(true, |r| piece.rank == r)).count()
    }

    /// Produces an independent copy of this board.
    ///
    /// The copy shares nothing with the original, so either can be played on without affecting the other.
    pub fn duplicate(&self) -> Board
    {
        Board {
            cells:   self.cells,
            zobrist: self.zobrist,
        }
    }

    /// Removes and returns the piece at a position.
    pub fn lift(&mut self, position: Position) -> Option<Piece>
    {
        let piece = self.cells[position.index()].piece.take();
        if let Some(piece) = &piece
        {
            self.zobrist.hash(piece, position);
        }
        piece
    }

    /// Iterates over the pieces of a color and their positions, in ascending position order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_
    {
        self.cells
            .iter()
            .filter_map(move |cell| cell.piece.filter(|p| p.color == color).map(|p| (cell.position(), p)))
    }

    /// Gets the piece at a position, if any.
    pub fn piece(&self, position: Position) -> Option<Piece>
    {
        self.cells[position.index()].piece
    }

    /// Puts a piece on a position, replacing whatever stood there.
    pub fn place(&mut self, piece: Piece, position: Position)
    {
        self.lift(position);
        self.zobrist.hash(&piece, position);
        self.cells[position.index()].piece = Some(piece);
    }

    /// Plays a path on this board.
    ///
    /// The path must have been produced for (or translated onto) this board. The travelling piece is moved from the
    /// origin to the destination, every captured piece is removed, and a man finishing on its crowning row becomes a
    /// king.
    pub fn play(&mut self, path: &Path) -> Result<Undo>
    {
        let origin = path.origin().position();
        let destination = path.destination().position();

        let Some(piece) = self.piece(origin)
        else
        {
            let err_msg = format!("There is no piece at {} to play {}.", origin, path);
            return Err(Error::new(Kind::InvalidMove, err_msg));
        };

        if destination != origin && !self.cell(destination).is_empty()
        {
            let err_msg = format!("Destination {} of {} is occupied.", destination, path);
            return Err(Error::new(Kind::InvalidMove, err_msg));
        }

        if let Some(missing) = path.captures().iter().find(|cell| self.cell(cell.position()).is_empty())
        {
            let err_msg = format!("There is no piece to capture at {} for {}.", missing.position(), path);
            return Err(Error::new(Kind::InvalidMove, err_msg));
        }

        self.lift(origin);

        let mut captured = ArrayVec::new();
        for cell in path.captures()
        {
            let position = cell.position();
            if let Some(victim) = self.lift(position)
            {
                captured.push(Cell::occupied(position, victim));
            }
        }

        let arrived = if piece.rank == Rank::Man && destination.row() == piece.color.crowning_row()
        {
            piece.crowned()
        }
        else
        {
            piece
        };
        self.place(arrived, destination);

        Ok(Undo {
            origin,
            destination,
            piece,
            captured,
        })
    }

    /// Takes back a move previously played on this board with `play`.
    pub fn undo(&mut self, undo: &Undo)
    {
        self.lift(undo.destination);
        self.place(undo.piece, undo.origin);

        for cell in undo.captured.iter().rev()
        {
            if let Some(victim) = cell.piece
            {
                self.place(victim, cell.position());
            }
        }
    }

    /// Gets the zobrist hash of the current piece layout.
    pub fn zobrist(&self) -> ZobristHash
    {
        self.zobrist.get()
    }
}
