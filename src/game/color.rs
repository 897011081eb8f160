use crate::prelude::*;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// The two sides of a game of checkers.
pub enum Color
{
    White = 0,
    Black = 1,
}

impl Color
{
    /// Gets the opposing color.
    pub fn flip(&self) -> Self
    {
        match self
        {
            | Self::White => Self::Black,
            | Self::Black => Self::White,
        }
    }

    /// The row on which this color's men are crowned.
    ///
    /// White starts at the bottom of the board and moves towards row 0.
    pub fn crowning_row(&self) -> usize
    {
        match self
        {
            | Self::White => 0,
            | Self::Black => crate::game::consts::ROWS - 1,
        }
    }
}

impl std::fmt::Display for Color
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self
        {
            | Self::White => "White",
            | Self::Black => "Black",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Color
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        match s
        {
            | "White" | "white" | "w" => Ok(Self::White),
            | "Black" | "black" | "b" => Ok(Self::Black),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
