mod common;
use common::*;

#[cfg(test)]
mod rules
{
    use gambit::prelude::*;

    use super::*;
    use templates::at;

    fn destinations(board: &Board, color: Color) -> Vec<(u8, u8)>
    {
        Draughts
            .generate(board, color)
            .iter()
            .map(|p| (p.origin().position().value(), p.destination().position().value()))
            .collect()
    }

    #[test]
    fn opening_moves()
    {
        let _setup = setup::setup();
        let board: Board = STANDARD.parse().unwrap();

        let black = destinations(&board, Color::Black);
        assert_eq!(black, vec![(9, 13), (9, 14), (10, 14), (10, 15), (11, 15), (11, 16), (12, 16)]);

        let white = destinations(&board, Color::White);
        assert_eq!(white.len(), 7);
        assert_eq!(white[0], (21, 17));
    }

    #[test]
    fn capture_is_forced()
    {
        let _setup = setup::setup();
        let board = templates::board_with(&[
            (1, Piece::man(Color::Black)),
            (10, Piece::man(Color::Black)),
            (15, Piece::man(Color::White)),
        ]);

        let paths = Draughts.generate(&board, Color::Black);
        assert_eq!(paths.len(), 1);
        assert!(paths[0].is_capture());
        assert_eq!(paths[0].to_string(), "10x19");
    }

    #[test]
    fn jumps_continue()
    {
        let _setup = setup::setup();
        let board = templates::board_with(&[
            (10, Piece::man(Color::Black)),
            (15, Piece::man(Color::White)),
            (23, Piece::man(Color::White)),
        ]);

        let paths = Draughts.generate(&board, Color::Black);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].to_string(), "10x19x26");
        assert_eq!(paths[0].cells().len(), 3);
    }

    #[test]
    fn men_only_move_forward()
    {
        let _setup = setup::setup();
        let board = templates::board_with(&[(14, Piece::man(Color::White)), (19, Piece::man(Color::Black))]);

        assert_eq!(destinations(&board, Color::White), vec![(14, 9), (14, 10)]);
        assert_eq!(destinations(&board, Color::Black), vec![(19, 23), (19, 24)]);
    }

    #[test]
    fn king_moves_both_ways()
    {
        let _setup = setup::setup();
        let board = templates::board_with(&[(14, Piece::king(Color::White))]);

        assert_eq!(destinations(&board, Color::White), vec![(14, 9), (14, 10), (14, 17), (14, 18)]);
    }

    #[test]
    fn king_captures_backwards()
    {
        let _setup = setup::setup();
        let board = templates::board_with(&[(10, Piece::king(Color::Black)), (7, Piece::man(Color::White))]);

        let paths = Draughts.generate(&board, Color::Black);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].to_string(), "10x3");
    }

    #[test]
    fn stuck_at_the_far_edge()
    {
        let _setup = setup::setup();
        let board = templates::board_with(&[(29, Piece::man(Color::Black))]);

        assert!(Draughts.generate(&board, Color::Black).is_empty());
        assert!(Draughts.generate(&board, Color::White).is_empty());
    }

    #[test]
    fn promotion()
    {
        let _setup = setup::setup();
        let mut board = templates::board_with(&[(27, Piece::man(Color::Black))]);
        let path = templates::find_path(&board, Color::Black, 27, 31);

        board.play(&path).unwrap();
        assert_eq!(board.piece(at(31)), Some(Piece::king(Color::Black)));
        assert_eq!(board.count(Color::Black, Some(Rank::King)), 1);
    }

    #[test]
    fn crowning_ends_the_jump()
    {
        let _setup = setup::setup();
        // White crowns on 3; as a king it could go on to take 8, but the turn is over.
        let board = templates::board_with(&[
            (10, Piece::man(Color::White)),
            (7, Piece::man(Color::Black)),
            (8, Piece::man(Color::Black)),
        ]);

        let paths = Draughts.generate(&board, Color::White);
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].to_string(), "10x3");
    }

    #[test]
    fn play_notated_picks_legal_paths()
    {
        let _setup = setup::setup();
        let mut board: Board = STANDARD.parse().unwrap();

        assert!(!board.play_notated(at(9), at(18), '-'));
        assert!(!board.play_notated(at(9), at(13), 'x'));
        assert!(board.play_notated(at(9), at(13), '-'));
        assert!(board.play_notated(at(22), at(18), '-'));
        assert_eq!(board.piece(at(18)), Some(Piece::man(Color::White)));
    }
}
