use crate::prelude::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Whether a piece is an ordinary man or a crowned king.
pub enum Rank
{
    Man  = 0,
    King = 1,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A piece in a game of checkers.
///
/// Pieces are plain values; the cell holding a piece owns it.
pub struct Piece
{
    pub color: Color,
    pub rank:  Rank,
}

impl Piece
{
    /// Gets the index of this piece in color-rank order, used to address zobrist bitstrings.
    pub fn index(&self) -> usize
    {
        2 * self.color as usize + self.rank as usize
    }

    /// Whether this piece is a king.
    pub fn is_king(&self) -> bool
    {
        self.rank == Rank::King
    }

    /// Creates a man of the given color.
    pub fn man(color: Color) -> Self
    {
        Piece { color, rank: Rank::Man }
    }

    /// Creates a king of the given color.
    pub fn king(color: Color) -> Self
    {
        Piece { color, rank: Rank::King }
    }

    /// Returns this piece as it is after being crowned.
    pub fn crowned(&self) -> Self
    {
        Piece::king(self.color)
    }

    /// The vertical directions this piece is allowed to travel in.
    pub fn directions(&self) -> &'static [i8]
    {
        match (self.rank, self.color)
        {
            | (Rank::King, _) => &[-1, 1],
            | (Rank::Man, Color::White) => &[-1],
            | (Rank::Man, Color::Black) => &[1],
        }
    }

    /// Parses a piece from its position-code symbol.
    ///
    /// Lowercase letters are White and uppercase letters are Black; 'm' is a man and 'k' a king.
    pub fn from_symbol(c: char) -> Option<Piece>
    {
        let color = if c.is_uppercase() { Color::Black } else { Color::White };
        match c.to_ascii_lowercase()
        {
            | 'm' => Some(Piece::man(color)),
            | 'k' => Some(Piece::king(color)),
            | _ => None,
        }
    }

    /// Returns the position-code symbol for this piece.
    pub fn symbol(&self) -> char
    {
        let c = match self.rank
        {
            | Rank::Man => 'm',
            | Rank::King => 'k',
        };

        match self.color
        {
            | Color::White => c,
            | Color::Black => c.to_ascii_uppercase(),
        }
    }
}

impl std::fmt::Display for Piece
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Keeps track of the pieces created while loading a position.
pub struct Registry
{
    white: Vec<Piece>,
    black: Vec<Piece>,
}

impl Registry
{
    /// Registers a newly created piece.
    pub fn add(&mut self, piece: Piece)
    {
        match piece.color
        {
            | Color::White => self.white.push(piece),
            | Color::Black => self.black.push(piece),
        }
    }

    /// Counts the pieces registered for a color.
    pub fn count(&self, color: Color) -> usize
    {
        self.pieces(color).len()
    }

    /// Counts the kings registered for a color.
    pub fn kings(&self, color: Color) -> usize
    {
        self.pieces(color).iter().filter(|p| p.is_king()).count()
    }

    /// Gets the pieces registered for a color, in the order they were created.
    pub fn pieces(&self, color: Color) -> &[Piece]
    {
        match color
        {
            | Color::White => &self.white,
            | Color::Black => &self.black,
        }
    }
}
