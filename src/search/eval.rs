use crate::board::{PieceKind, Rules, Side};

/// Centipawn-scale score, positive when White is better.
pub type Score = i32;

// White has delivered mate.
pub const WIN_SCORE: Score = 1_000_000;
// White has been mated.
pub const LOSS_SCORE: Score = -WIN_SCORE;
pub const DRAW_SCORE: Score = 0;
/// Seed for running max/min; worse than every real score, mates included.
pub const INFINITY: Score = WIN_SCORE + 1;

pub const PIECE_WEIGHTS: [(PieceKind, Score); 6] = [
    (PieceKind::Pawn, 100),
    (PieceKind::Knight, 320),
    (PieceKind::Bishop, 330),
    (PieceKind::Rook, 500),
    (PieceKind::Queen, 900),
    (PieceKind::King, 20_000),
];

/// Static evaluation of a leaf, always from White's perspective.
pub trait Evaluator<P: Rules + ?Sized> {
    fn evaluate(&self, pos: &P) -> Score;
}

/// Mate sentinels, draws as zero, otherwise plain material.
#[derive(Clone, Copy, Debug, Default)]
pub struct Material;

impl<P: Rules + ?Sized> Evaluator<P> for Material {
    fn evaluate(&self, pos: &P) -> Score {
        if pos.is_checkmate() {
            return if pos.turn() == Side::White { LOSS_SCORE } else { WIN_SCORE };
        }
        if pos.is_game_over() { return DRAW_SCORE; }
        material_balance(pos)
    }
}

// The king weight is kept; both kings are always present so it cancels out.
pub fn material_balance<P: Rules + ?Sized>(pos: &P) -> Score {
    PIECE_WEIGHTS.iter().fold(0, |acc, &(kind, weight)| {
        let white = pos.piece_count(Side::White, kind) as Score;
        let black = pos.piece_count(Side::Black, kind) as Score;
        acc + (white - black) * weight
    })
}
