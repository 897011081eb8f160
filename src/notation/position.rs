use itertools::Itertools;

use crate::{
    game::consts::{ROWS, ROW_LENGTH},
    prelude::*,
};

/// Encodes the piece layout of a board as a position code.
///
/// Rows are written from the bottom of the board to the top, separated by '/'. Runs of empty cells are written as a
/// digit, White pieces as 'm' (man) or 'k' (king), and Black pieces as 'M' or 'K'.
pub fn encode(board: &Board) -> String
{
    (0..ROWS)
        .rev()
        .map(|row| {
            let cells = &board.cells()[row * ROW_LENGTH..(row + 1) * ROW_LENGTH];
            let mut code = String::new();
            let mut empty = 0;

            for cell in cells
            {
                match cell.piece
                {
                    | Some(piece) =>
                    {
                        if empty != 0
                        {
                            code.push_str(&empty.to_string());
                            empty = 0;
                        }
                        code.push(piece.symbol());
                    }
                    | None => empty += 1,
                }
            }

            if empty != 0
            {
                code.push_str(&empty.to_string());
            }
            code
        })
        .join("/")
}

/// Decodes a position code onto a board, registering every piece it creates.
///
/// The first row of the code is the bottom of the board, so rows are laid out in reverse onto the top-down storage.
/// Every row must account for exactly four cells.
pub fn decode(code: &str, registry: &mut Registry, board: &mut Board) -> Result<()>
{
    let rows = code.split('/').collect::<Vec<&str>>();
    if rows.len() != ROWS
    {
        let detail = format!("expected {} rows, found {}", ROWS, rows.len());
        return Err(malformed(Kind::InvalidBoardSize, code, detail));
    }

    let mut index = 0;
    for row in rows.iter().rev()
    {
        let mut filled = 0;

        for c in row.chars()
        {
            if filled >= ROW_LENGTH
            {
                return Err(wrong_row_count(code, row));
            }

            if let Some(amount) = c.to_digit(10)
            {
                let amount = amount as usize;
                if !(1..=ROW_LENGTH).contains(&amount)
                {
                    let detail = format!("cannot skip {} cells in a row of {}", amount, ROW_LENGTH);
                    return Err(malformed(Kind::InvalidEmptyCount, code, detail));
                }

                index += amount;
                filled += amount;
                continue;
            }

            let Some(piece) = Piece::from_symbol(c)
            else
            {
                let detail = format!("unrecognized symbol '{}'", c);
                return Err(malformed(Kind::InvalidCharacter, code, detail));
            };

            registry.add(piece);
            board.place(piece, Position::from_index(index));

            index += 1;
            filled += 1;
        }

        if filled != ROW_LENGTH
        {
            return Err(wrong_row_count(code, row));
        }
    }

    Ok(())
}

/// Builds a decoding error that keeps its kind, so callers can tell the failures apart.
fn malformed(kind: Kind, code: &str, detail: String) -> Error
{
    Error::new(kind, format!("'{}' is not a valid position code ({}).", code, detail))
}

/// The error for a row that does not describe exactly one row of cells.
fn wrong_row_count(code: &str, row: &str) -> Error
{
    let detail = format!("row '{}' does not describe exactly {} cells", row, ROW_LENGTH);
    malformed(Kind::WrongRowPieceCount, code, detail)
}

impl FromStr for Board
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let mut board = Board::new();
        decode(s, &mut Registry::default(), &mut board)?;
        Ok(board)
    }
}
