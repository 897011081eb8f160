use arrayvec::ArrayVec;

use crate::{
    game::consts::{MAX_CAPTURES, MAX_PATH},
    prelude::*,
};

/// Horizontal directions, west first.
const FILES: [i8; 2] = [-1, 1];

#[derive(Clone, Copy, Debug, Default)]
/// Move generation under English draughts rules.
///
/// Captures are mandatory and a jumping piece must keep jumping while it can, except that a man reaching its crowning
/// row ends its turn there. Kings move and capture one square at a time in all four diagonal directions.
///
/// Paths are produced by ascending origin position, then by direction (up-left, up-right, down-left, down-right),
/// with jump sequences explored depth first. The search breaks ties in favour of earlier paths, so this order is
/// part of what a search returns.
pub struct Draughts;

impl MoveGenerator for Draughts
{
    fn generate(&self, board: &Board, color: Color) -> Vec<Path>
    {
        let captures: Vec<Path> = board.pieces(color).flat_map(|(at, piece)| Self::jumps_from(board, piece, at)).collect();

        if !captures.is_empty()
        {
            return captures;
        }

        board.pieces(color).flat_map(|(at, piece)| Self::steps_from(board, piece, at)).collect()
    }
}

impl Draughts
{
    /// Generates every complete jump sequence for the piece standing at `origin`.
    pub fn jumps_from(board: &Board, piece: Piece, origin: Position) -> Vec<Path>
    {
        let mut found = Vec::new();
        let mut cells = ArrayVec::<Cell, MAX_PATH>::new();
        let mut captures = ArrayVec::<Cell, MAX_CAPTURES>::new();

        cells.push(*board.cell(origin));
        Self::extend_jumps(board, piece, origin, &mut cells, &mut captures, &mut found);
        found
    }

    /// Generates every single-step move for the piece standing at `origin`.
    pub fn steps_from(board: &Board, piece: Piece, origin: Position) -> Vec<Path>
    {
        let mut found = Vec::new();

        for &dy in piece.directions()
        {
            for dx in FILES
            {
                let Some(target) = origin.step(dx, dy)
                else
                {
                    continue;
                };

                if board.cell(target).is_empty()
                {
                    let cells = [*board.cell(origin), *board.cell(target)].into_iter().collect();
                    found.push(Path::from_parts(cells, ArrayVec::new()));
                }
            }
        }

        found
    }

    /// Depth-first search over the jumps available from the last cell of `cells`.
    fn extend_jumps(
        board: &Board,
        piece: Piece,
        origin: Position,
        cells: &mut ArrayVec<Cell, MAX_PATH>,
        captures: &mut ArrayVec<Cell, MAX_CAPTURES>,
        found: &mut Vec<Path>,
    )
    {
        let at = cells[cells.len() - 1].position();
        let crowned_now = piece.rank == Rank::Man && !captures.is_empty() && at.row() == piece.color.crowning_row();
        let exhausted = cells.is_full() || captures.is_full();
        let mut extended = false;

        if !crowned_now && !exhausted
        {
            for &dy in piece.directions()
            {
                for dx in FILES
                {
                    let (Some(over), Some(landing)) = (at.step(dx, dy), at.step(2 * dx, 2 * dy))
                    else
                    {
                        continue;
                    };

                    let victim = board.cell(over);
                    let is_enemy = victim.piece.is_some_and(|p| p.color != piece.color);
                    let already_taken = captures.iter().any(|c| c.position() == over);
                    let free = landing == origin || board.cell(landing).is_empty();

                    if !is_enemy || already_taken || !free
                    {
                        continue;
                    }

                    cells.push(*board.cell(landing));
                    captures.push(*victim);
                    Self::extend_jumps(board, piece, origin, cells, captures, found);
                    captures.pop();
                    cells.pop();
                    extended = true;
                }
            }
        }

        if !extended && !captures.is_empty()
        {
            found.push(Path::from_parts(cells.clone(), captures.clone()));
        }
    }
}

impl Board
{
    /// Plays a move given by its endpoints and action marker, as read from move notation.
    ///
    /// The first legal path of the piece at `from` that ends on `to` is played, provided it captures when the marker is
    /// 'x' and does not when it is '-'. Any other marker accepts either. Returns whether a move was played.
    ///
    /// Two jump sequences can share both endpoints; the notation cannot tell them apart, and the others are only logged.
    pub fn play_notated(&mut self, from: Position, to: Position, action: char) -> bool
    {
        let Some(piece) = self.piece(from)
        else
        {
            log::warn!("no piece at {} to move to {}", from, to);
            return false;
        };

        let wanted = |path: &Path| match action
        {
            | 'x' => path.is_capture(),
            | '-' => !path.is_capture(),
            | _ => true,
        };

        let mut matching = Draughts
            .generate(self, piece.color)
            .into_iter()
            .filter(|path| path.origin().position() == from && path.destination().position() == to && wanted(path));

        let Some(path) = matching.next()
        else
        {
            log::warn!("{} has no legal move {}{}{}", piece.color, from, action, to);
            return false;
        };

        let others = matching.map(|p| p.to_string()).collect::<Vec<String>>();
        if !others.is_empty()
        {
            log::debug!("{}{}{} is ambiguous: playing {} over {}", from, action, to, path, others.join(", "));
        }

        match self.play(&path)
        {
            | Ok(_) => true,
            | Err(err) =>
            {
                log::warn!("failed to play {}:\n{}", path, err);
                false
            }
        }
    }
}
