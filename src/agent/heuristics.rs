use crate::prelude::*;

/// What a man is worth.
const MAN: f64 = 1.0;

/// What a king is worth. Kings move backwards too, but they are not worth two men.
const KING: f64 = 1.5;

/// How much one extra legal move is worth, relative to a man.
const PER_MOVE: f64 = 0.1;

#[derive(Clone, Copy, Debug, Default)]
/// Scores a board by the material difference between the two sides.
pub struct Material;

impl Material
{
    /// The material of one side.
    pub fn of(board: &Board, color: Color) -> f64
    {
        board
            .pieces(color)
            .map(|(_, piece)| if piece.is_king() { KING } else { MAN })
            .sum()
    }
}

impl Heuristic for Material
{
    fn evaluate(&self, board: &Board, color: Color) -> f64
    {
        Material::of(board, color) - Material::of(board, color.flip())
    }
}

#[derive(Clone, Copy, Debug, Default)]
/// Scores a board by material, then by how many more moves one side has than the other.
///
/// A side without any legal move is considered lost outright.
pub struct Mobility<G = Draughts>(pub G);

impl<G: MoveGenerator> Heuristic for Mobility<G>
{
    fn evaluate(&self, board: &Board, color: Color) -> f64
    {
        let ours = self.0.generate(board, color).len() as f64;
        let theirs = self.0.generate(board, color.flip()).len() as f64;

        if ours == 0.0
        {
            return LOSS;
        }
        if theirs == 0.0
        {
            return WIN;
        }

        Material.evaluate(board, color) + PER_MOVE * (ours - theirs)
    }
}
