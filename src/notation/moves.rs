use lazy_static::lazy_static;
use regex::Regex;

use crate::prelude::*;

lazy_static! {
    static ref MOVE: Regex = Regex::new(r"^(?<from>[0-9]+)(?<action>[^0-9])(?<to>[0-9]+)$").unwrap();
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Represents a syntactically-valid move string, such as "22-17" or "(10x19)".
///
/// Whether the move can actually be played depends on a board.
pub struct MoveString
{
    text:   String,
    from:   Position,
    action: char,
    to:     Position,
}

impl MoveString
{
    /// The action marker between the two positions.
    pub fn action(&self) -> char
    {
        self.action
    }

    /// The position the move starts from.
    pub fn from(&self) -> Position
    {
        self.from
    }

    /// The position the move ends on.
    pub fn to(&self) -> Position
    {
        self.to
    }
}

impl FromStr for MoveString
{
    type Err = Error;
    fn from_str(s: &str) -> std::prelude::v1::Result<Self, Self::Err>
    {
        let inner = match s.strip_prefix('(')
        {
            | Some(rest) => match rest.strip_suffix(')')
            {
                | Some(inner) => inner,
                | None =>
                {
                    let err = Error::new(Kind::ParseError, "Unbalanced parentheses.".into());
                    return Err(err.chain_parse::<Self>(s.into()));
                }
            },
            | None => s,
        };

        let Some(caps) = MOVE.captures(inner)
        else
        {
            return Err(Error::for_parse::<Self>(s.into()));
        };

        let from = caps["from"].parse::<Position>().map_err(|err| err.chain_parse::<Self>(s.into()))?;
        let to = caps["to"].parse::<Position>().map_err(|err| err.chain_parse::<Self>(s.into()))?;
        let action = caps["action"].chars().next().unwrap_or('-');

        Ok(MoveString {
            text: s.to_owned(),
            from,
            action,
            to,
        })
    }
}

impl AsRef<str> for MoveString
{
    fn as_ref(&self) -> &str
    {
        self.text.as_str()
    }
}

impl std::fmt::Display for MoveString
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.text)
    }
}

/// Writes a move in move notation.
///
/// The origin and destination positions are joined by 'x' when the path captures and '-' otherwise. Black moves
/// are wrapped in parentheses; White moves are not.
pub fn encrypt(color: Color, path: &Path) -> String
{
    let action = if path.is_capture() { 'x' } else { '-' };
    let body = format!("{}{}{}", path.origin().position(), action, path.destination().position());

    match color
    {
        | Color::Black => format!("({})", body),
        | Color::White => body,
    }
}

/// Reads a move in move notation and plays it on the board.
///
/// A missing or empty move means no move has been played yet, which always succeeds and leaves the board alone.
/// Malformed text is an error; a well-formed move that cannot be played returns `false`.
pub fn decrypt(board: &mut Board, text: Option<&str>) -> Result<bool>
{
    let Some(text) = text.filter(|t| !t.is_empty())
    else
    {
        return Ok(true);
    };

    let mv = text.parse::<MoveString>()?;
    log::trace!("decrypted {} as {} {} {}", mv, mv.from(), mv.action(), mv.to());
    Ok(board.play_notated(mv.from(), mv.to(), mv.action()))
}
