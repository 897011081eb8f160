use crate::{game::consts::*, prelude::*};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A 1-based board position, as used by move notation.
///
/// The storage index of the cell at a position is one less than the position; use `index` and `from_index`
/// rather than doing that arithmetic by hand.
pub struct Position(u8);

impl Position
{
    /// Constructs a position, checking that it is on the board.
    pub fn new(value: u8) -> Result<Position>
    {
        if !(1..=SIZE as u8).contains(&value)
        {
            let err_msg = format!("Position {} is not on the board (expected 1 to {}).", value, SIZE);
            return Err(Error::new(Kind::InvalidPosition, err_msg));
        }
        Ok(Position(value))
    }

    /// Gets the position stored at a 0-based storage index.
    pub fn from_index(index: usize) -> Position
    {
        debug_assert!(index < SIZE);
        Position(index as u8 + 1)
    }

    /// Gets the 0-based storage index for this position.
    pub fn index(&self) -> usize
    {
        self.0 as usize - 1
    }

    /// Gets the board position as a number.
    pub fn value(&self) -> u8
    {
        self.0
    }

    /// Iterates over every position in ascending order.
    pub fn all() -> impl Iterator<Item = Position>
    {
        (0..SIZE).map(Position::from_index)
    }

    /// The row of this position, where row 0 is the top of the board.
    pub fn row(&self) -> usize
    {
        self.index() / ROW_LENGTH
    }

    /// The column of this position among the four playable cells of its row.
    pub fn column(&self) -> usize
    {
        self.index() % ROW_LENGTH
    }

    /// The geometric coordinates of this position on the full 8x8 board.
    ///
    /// Even rows have their playable cells on odd files, odd rows on even files.
    pub fn coords(&self) -> (i8, i8)
    {
        let row = self.row() as i8;
        let x = 2 * self.column() as i8 + if row % 2 == 0 { 1 } else { 0 };
        (x, row)
    }

    /// Gets the position at the given geometric coordinates, if it is a playable cell.
    pub fn from_coords(x: i8, y: i8) -> Option<Position>
    {
        let width = (2 * ROW_LENGTH) as i8;
        if !(0..width).contains(&x) || !(0..ROWS as i8).contains(&y) || (x + y) % 2 == 0
        {
            return None;
        }
        let index = y as usize * ROW_LENGTH + x as usize / 2;
        Some(Position::from_index(index))
    }

    /// Steps diagonally from this position by the given offsets.
    pub fn step(&self, dx: i8, dy: i8) -> Option<Position>
    {
        let (x, y) = self.coords();
        Position::from_coords(x + dx, y + dy)
    }
}

impl std::fmt::Display for Position
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Position
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let Ok(value) = s.parse::<u8>()
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        Position::new(value).map_err(|err| err.chain_parse::<Self>(s.into()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// A playable cell: a fixed position and the piece currently on it, if any.
pub struct Cell
{
    position: Position,
    pub piece: Option<Piece>,
}

impl Cell
{
    /// Creates an empty cell.
    pub fn new(position: Position) -> Self
    {
        Cell { position, piece: None }
    }

    /// Creates a cell holding a piece.
    pub fn occupied(position: Position, piece: Piece) -> Self
    {
        Cell {
            position,
            piece: Some(piece),
        }
    }

    /// Whether nothing stands on this cell.
    pub fn is_empty(&self) -> bool
    {
        self.piece.is_none()
    }

    /// The board position of this cell.
    pub fn position(&self) -> Position
    {
        self.position
    }
}
