//! Rules-engine boundary used by the search.
//!
//! The search never builds positions itself. It draws moves from
//! [`Rules::legal_moves`], applies them, and undoes them in strict LIFO order.
pub mod cozy;
#[cfg(feature = "board-pleco")]
pub mod pleco;

use crate::error::Result;
use std::fmt;

/// White is the canonical side: every score is from White's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self { Side::White => Side::Black, Side::Black => Side::White }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Side::White => "White", Side::Black => "Black" })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];
}

/// A position that can enumerate, apply and undo moves.
pub trait Rules {
    type Move: Copy + Eq + fmt::Debug;

    /// Legal moves in a stable order. Root tie-breaks depend on it.
    fn legal_moves(&self) -> Vec<Self::Move>;
    fn apply(&mut self, mv: Self::Move) -> Result<()>;
    /// Reverts the most recently applied move.
    fn undo(&mut self) -> Result<()>;
    fn is_game_over(&self) -> bool;
    fn is_checkmate(&self) -> bool;
    fn turn(&self) -> Side;
    fn piece_count(&self, side: Side, kind: PieceKind) -> u32;
}

/// Neither side can ever deliver mate.
///
/// `bishops_share_colour` reports whether every bishop on the board stands on
/// squares of one colour; it is only consulted once bishops are all that is left.
pub fn insufficient_material<P, F>(pos: &P, bishops_share_colour: F) -> bool
where
    P: Rules + ?Sized,
    F: Fn() -> bool,
{
    [Side::White, Side::Black].into_iter().all(|side| side_cannot_mate(pos, side, &bishops_share_colour))
}

fn side_cannot_mate<P, F>(pos: &P, side: Side, bishops_share_colour: &F) -> bool
where
    P: Rules + ?Sized,
    F: Fn() -> bool,
{
    let count = |s: Side, k: PieceKind| pos.piece_count(s, k);
    if count(side, PieceKind::Pawn) + count(side, PieceKind::Rook) + count(side, PieceKind::Queen) > 0 {
        return false;
    }
    let knights = count(side, PieceKind::Knight);
    let bishops = count(side, PieceKind::Bishop);
    if knights > 0 {
        // A lone knight mates only against something that can block its own king.
        let opp = side.opposite();
        let blockers = count(opp, PieceKind::Pawn)
            + count(opp, PieceKind::Knight)
            + count(opp, PieceKind::Bishop)
            + count(opp, PieceKind::Rook);
        return knights + bishops <= 1 && blockers == 0;
    }
    if bishops > 0 {
        let pawns = count(Side::White, PieceKind::Pawn) + count(Side::Black, PieceKind::Pawn);
        let any_knights = count(Side::White, PieceKind::Knight) + count(Side::Black, PieceKind::Knight);
        return pawns == 0 && any_knights == 0 && bishops_share_colour();
    }
    true
}
