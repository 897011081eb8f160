use crate::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Represents the current state of the game.
pub enum GameState
{
    InProgress,
    Draw,
    WhiteWins,
    BlackWins,
}

impl GameState
{
    /// The state reached when the given color is left without a legal move.
    pub fn stalemated(color: Color) -> Self
    {
        match color
        {
            | Color::White => Self::BlackWins,
            | Color::Black => Self::WhiteWins,
        }
    }
}

impl std::fmt::Display for GameState
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let repr = match self
        {
            | Self::InProgress => "InProgress",
            | Self::Draw => "Draw",
            | Self::WhiteWins => "WhiteWins",
            | Self::BlackWins => "BlackWins",
        };
        write!(f, "{repr}")
    }
}

impl FromStr for GameState
{
    type Err = Error;
    fn from_str(s: &str) -> std::prelude::v1::Result<Self, Self::Err>
    {
        match s
        {
            | "InProgress" => Ok(Self::InProgress),
            | "Draw" => Ok(Self::Draw),
            | "WhiteWins" => Ok(Self::WhiteWins),
            | "BlackWins" => Ok(Self::BlackWins),
            | _ => Err(Error::for_parse::<Self>(s.into())),
        }
    }
}
