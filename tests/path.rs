mod common;
use common::*;

#[cfg(test)]
mod path
{
    use std::collections::HashSet;

    use gambit::prelude::*;

    use super::*;
    use templates::at;

    fn capture_board(victim: Piece) -> Board
    {
        templates::board_with(&[(10, Piece::man(Color::Black)), (15, victim)])
    }

    #[test]
    fn translate_rebinds_cells()
    {
        let _setup = setup::setup();
        let source = capture_board(Piece::man(Color::White));
        let path = templates::find_path(&source, Color::Black, 10, 19);

        let mut target = source.duplicate();
        target.place(Piece::king(Color::Black), at(10));
        target.place(Piece::king(Color::White), at(15));

        let translated = path.translate(&target).unwrap();
        assert_eq!(translated.origin().piece, Some(Piece::king(Color::Black)));
        assert_eq!(translated.captures()[0].piece, Some(Piece::king(Color::White)));
        assert_eq!(translated.destination().position(), at(19));

        // The original still describes the source board.
        assert_eq!(path.origin().piece, Some(Piece::man(Color::Black)));
    }

    #[test]
    fn translate_missing_capture()
    {
        let _setup = setup::setup();
        let source = capture_board(Piece::man(Color::White));
        let path = templates::find_path(&source, Color::Black, 10, 19);

        let target = templates::board_with(&[(10, Piece::man(Color::Black))]);
        let err = path.translate(&target).unwrap_err();
        assert_eq!(err.kind, Kind::InternalError);
    }

    #[test]
    fn equal_across_boards()
    {
        let _setup = setup::setup();
        let standard: Board = STANDARD.parse().unwrap();
        let lonely = templates::board_with(&[(9, Piece::man(Color::Black))]);

        let a = templates::find_path(&standard, Color::Black, 9, 13);
        let b = templates::find_path(&lonely, Color::Black, 9, 13);
        assert_eq!(a, b);

        let set: HashSet<Path> = [a.clone(), b, a].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn captured_rank_matters()
    {
        let _setup = setup::setup();
        let men = capture_board(Piece::man(Color::White));
        let kings = capture_board(Piece::king(Color::White));

        let a = templates::find_path(&men, Color::Black, 10, 19);
        let b = templates::find_path(&kings, Color::Black, 10, 19);
        assert_ne!(a, b);
    }

    #[test]
    fn display()
    {
        let _setup = setup::setup();
        let board = templates::board_with(&[
            (10, Piece::man(Color::Black)),
            (15, Piece::man(Color::White)),
            (23, Piece::man(Color::White)),
        ]);
        let path = templates::find_path(&board, Color::Black, 10, 26);
        assert_eq!(path.to_string(), "10x19x26");
        assert_eq!(path.captures().len(), 2);

        let standard: Board = STANDARD.parse().unwrap();
        assert_eq!(templates::find_path(&standard, Color::White, 22, 17).to_string(), "22-17");
    }

    #[test]
    fn duplicate_is_independent()
    {
        let _setup = setup::setup();
        let board: Board = STANDARD.parse().unwrap();
        let path = templates::find_path(&board, Color::Black, 9, 13);

        let mut copy = board.duplicate();
        copy.play(&path).unwrap();

        assert_eq!(board.piece(at(9)), Some(Piece::man(Color::Black)));
        assert_eq!(board.piece(at(13)), None);
        assert_ne!(copy, board);
        assert_ne!(copy.zobrist(), board.zobrist());
    }

    #[test]
    fn play_then_undo()
    {
        let _setup = setup::setup();
        let mut board = templates::board_with(&[
            (10, Piece::man(Color::Black)),
            (15, Piece::man(Color::White)),
            (23, Piece::king(Color::White)),
        ]);
        let before = board.duplicate();
        let path = templates::find_path(&board, Color::Black, 10, 26);

        let undo = board.play(&path).unwrap();
        assert_eq!(board.count(Color::White, None), 0);
        assert_eq!(board.piece(at(26)), Some(Piece::man(Color::Black)));

        board.undo(&undo);
        assert_eq!(board, before);
        assert_eq!(board.zobrist(), before.zobrist());
    }

    #[test]
    fn play_rejects_foreign_path()
    {
        let _setup = setup::setup();
        let source = capture_board(Piece::man(Color::White));
        let path = templates::find_path(&source, Color::Black, 10, 19);

        let mut empty = Board::new();
        assert_eq!(empty.play(&path).unwrap_err().kind, Kind::InvalidMove);
    }

    #[test]
    fn shape_is_checked()
    {
        let _setup = setup::setup();
        let origin = Cell::occupied(at(9), Piece::man(Color::Black));

        assert_eq!(Path::new(&[origin], &[]).unwrap_err().kind, Kind::InvalidMove);
        assert_eq!(
            Path::new(&[origin, Cell::new(at(13))], &[Cell::new(at(14))]).unwrap_err().kind,
            Kind::InvalidMove
        );
        assert!(Path::new(&[origin, Cell::new(at(13))], &[]).is_ok());
    }
}
