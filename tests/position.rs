mod common;
use common::*;

#[cfg(test)]
mod position
{
    use gambit::prelude::*;

    use super::*;

    const SAMPLE: &str = "mmmm/3m/mm2/4/1M2/M1Mm/3M/MMMM";
    const EMPTY: &str = "4/4/4/4/4/4/4/4";

    fn kind_of(code: &str) -> Kind
    {
        let mut board = Board::new();
        let err = decode(code, &mut Registry::default(), &mut board).unwrap_err();
        err.kind
    }

    #[test]
    fn decode_sample()
    {
        let _setup = setup::setup();
        let mut registry = Registry::default();
        let mut board = Board::new();
        decode(SAMPLE, &mut registry, &mut board).unwrap();

        let black = [1, 2, 3, 4, 8, 9, 11, 14];
        let white = [12, 21, 22, 28, 29, 30, 31, 32];

        for position in Position::all()
        {
            let expected = if black.contains(&position.value())
            {
                Some(Piece::man(Color::Black))
            }
            else if white.contains(&position.value())
            {
                Some(Piece::man(Color::White))
            }
            else
            {
                None
            };
            assert_eq!(board.piece(position), expected, "at {}", position);
        }

        assert_eq!(registry.count(Color::White), 8);
        assert_eq!(registry.count(Color::Black), 8);
        assert_eq!(registry.kings(Color::White), 0);
    }

    #[test]
    fn decode_kings()
    {
        let _setup = setup::setup();
        let mut registry = Registry::default();
        let mut board = Board::new();
        decode("k3/4/4/4/4/4/4/3K", &mut registry, &mut board).unwrap();

        // The first row of the code is the bottom of the board.
        assert_eq!(board.piece(templates::at(29)), Some(Piece::king(Color::White)));
        assert_eq!(board.piece(templates::at(4)), Some(Piece::king(Color::Black)));
        assert_eq!(registry.kings(Color::White), 1);
        assert_eq!(registry.kings(Color::Black), 1);
        assert_eq!(board.count(Color::White, None), 1);
    }

    #[test]
    fn encode_sample()
    {
        let _setup = setup::setup();
        let board: Board = SAMPLE.parse().unwrap();
        assert_eq!(encode(&board), SAMPLE);
    }

    #[test]
    fn encode_empty()
    {
        let _setup = setup::setup();
        assert_eq!(encode(&Board::new()), EMPTY);
        assert_eq!(EMPTY.parse::<Board>().unwrap(), Board::new());
    }

    #[test]
    fn encode_standard()
    {
        let _setup = setup::setup();
        let board: Board = STANDARD.parse().unwrap();
        assert_eq!(encode(&board), STANDARD);
        assert_eq!(board.count(Color::White, Some(Rank::Man)), 12);
        assert_eq!(board.count(Color::Black, Some(Rank::Man)), 12);
    }

    #[test]
    fn round_trip_played_positions()
    {
        let _setup = setup::setup();
        for seed in 0..25
        {
            let (board, _) = templates::random_position(seed);
            let code = encode(&board);
            let decoded: Board = code.parse().unwrap();

            assert_eq!(decoded, board, "{}", code);
            assert_eq!(decoded.zobrist(), board.zobrist(), "{}", code);
        }
    }

    #[test]
    fn too_few_rows()
    {
        let _setup = setup::setup();
        assert_eq!(kind_of("mmmm/mmmm"), Kind::InvalidBoardSize);
        assert_eq!(kind_of(""), Kind::InvalidBoardSize);
    }

    #[test]
    fn too_many_rows()
    {
        let _setup = setup::setup();
        assert_eq!(kind_of("4/4/4/4/4/4/4/4/4"), Kind::InvalidBoardSize);
    }

    #[test]
    fn empty_count_too_large()
    {
        let _setup = setup::setup();
        assert_eq!(kind_of("5/4/4/4/4/4/4/4"), Kind::InvalidEmptyCount);
    }

    #[test]
    fn empty_count_zero()
    {
        let _setup = setup::setup();
        assert_eq!(kind_of("4/4/4/0mmmm/4/4/4/4"), Kind::InvalidEmptyCount);
    }

    #[test]
    fn row_overflows()
    {
        let _setup = setup::setup();
        assert_eq!(kind_of("mmmmm/4/4/4/4/4/4/4"), Kind::WrongRowPieceCount);
        assert_eq!(kind_of("4/4/4/4/4/4/4/2m2"), Kind::WrongRowPieceCount);
    }

    #[test]
    fn row_underflows()
    {
        let _setup = setup::setup();
        assert_eq!(kind_of("mmm/4/4/4/4/4/4/4"), Kind::WrongRowPieceCount);
        assert_eq!(kind_of("4/4/4//4/4/4/4"), Kind::WrongRowPieceCount);
    }

    #[test]
    fn unknown_symbol()
    {
        let _setup = setup::setup();
        assert_eq!(kind_of("mmmx/4/4/4/4/4/4/4"), Kind::InvalidCharacter);
        assert_eq!(kind_of("4/4/4/4/4/4/4/Q3"), Kind::InvalidCharacter);
    }
}
