use gambit::prelude::*;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// Gets a board position, which must be on the board.
pub fn at(value: u8) -> Position
{
    Position::new(value).unwrap()
}

/// Builds a board from (position, piece) pairs.
pub fn board_with(pieces: &[(u8, Piece)]) -> Board
{
    let mut board = Board::new();
    for (position, piece) in pieces
    {
        board.place(*piece, at(*position));
    }
    board
}

/// Finds the generated path between two positions for the given color.
pub fn find_path(board: &Board, color: Color, from: u8, to: u8) -> Path
{
    Draughts
        .generate(board, color)
        .into_iter()
        .find(|p| p.origin().position() == at(from) && p.destination().position() == at(to))
        .unwrap_or_else(|| panic!("{} has no path {} to {} on {:?}", color, from, to, board))
}

/// Plays a random game from the standard position, returning the board reached and the color to move.
pub fn random_position(seed: u64) -> (Board, Color)
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board: Board = STANDARD.parse().unwrap();
    let mut color = Color::Black;

    let plies = rng.gen_range(0..40);
    for _ in 0..plies
    {
        let paths = Draughts.generate(&board, color);
        let Some(path) = paths.choose(&mut rng)
        else
        {
            break;
        };
        board.play(path).unwrap();
        color = color.flip();
    }

    (board, color)
}

/// Plain minimax with no pruning at all, returning the value and the number of paths examined.
pub fn unpruned<H: Heuristic>(board: &Board, owner: Color, depth: Depth, minimizing: bool, heuristic: &H) -> (f64, u64)
{
    if depth == 0
    {
        return (heuristic.evaluate(board, owner), 0);
    }

    let mover = if minimizing { owner.flip() } else { owner };
    let mut best = if minimizing { f64::INFINITY } else { f64::NEG_INFINITY };
    let mut explored = 0;

    for path in Draughts.generate(board, mover)
    {
        let mut copy = board.duplicate();
        copy.play(&path).unwrap();

        let (value, below) = unpruned(&copy, owner, depth - 1, !minimizing, heuristic);
        explored += 1 + below;
        best = if minimizing { best.min(value) } else { best.max(value) };
    }

    (best, explored)
}

/// Replays a transcript of move notation on a board, checking every move is accepted.
pub fn replay(board: &mut Board, transcript: &[String])
{
    for text in transcript
    {
        assert!(decrypt(board, Some(text)).unwrap(), "{} was rejected on {:?}", text, board);
    }
}
