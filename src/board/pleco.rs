#![cfg(feature = "board-pleco")]
use pleco::{BitMove, Board as PlecoBoard, Piece, PieceType, Player, SQ};

use crate::board::{insufficient_material, PieceKind, Rules, Side};
use crate::error::{Error, Result};

/// pleco board driven through its native apply/undo.
#[derive(Clone)]
pub struct RevBoard {
    board: PlecoBoard,
    // zobrist key of the position each move was played from
    stack: Vec<(BitMove, u64)>,
}

impl RevBoard {
    pub fn from_fen(fen: &str) -> Result<Self> {
        PlecoBoard::from_fen(fen)
            .map(|b| Self { board: b, stack: Vec::with_capacity(128) })
            .map_err(|e| Error::Fen(format!("{e:?}")))
    }
    pub fn startpos() -> Self { Self { board: PlecoBoard::start_pos(), stack: Vec::with_capacity(128) } }

    pub fn parse_uci(&self, text: &str) -> Result<BitMove> {
        let text = text.trim();
        self.legal_moves()
            .into_iter()
            .find(|m| format!("{}", m) == text)
            .ok_or_else(|| Error::IllegalMove(text.to_string()))
    }

    /// Every bishop on the board stands on squares of one colour.
    fn bishops_share_colour(&self) -> bool {
        let mut colours = (0..64u8)
            .filter(|&i| {
                let piece = self.board.piece_at_sq(SQ(i));
                piece != Piece::None && piece.type_of() == PieceType::B
            })
            .map(|i| (i % 8 + i / 8) % 2);
        match colours.next() {
            Some(first) => colours.all(|c| c == first),
            None => true,
        }
    }

    pub fn is_insufficient_material(&self) -> bool {
        insufficient_material(self, || self.bishops_share_colour())
    }

    fn is_fivefold_repetition(&self) -> bool {
        let key = self.board.zobrist();
        self.stack.iter().filter(|(_, k)| *k == key).count() + 1 >= 5
    }
}

fn to_player(side: Side) -> Player {
    match side { Side::White => Player::White, Side::Black => Player::Black }
}

fn to_piece_type(kind: PieceKind) -> PieceType {
    match kind {
        PieceKind::Pawn => PieceType::P,
        PieceKind::Knight => PieceType::N,
        PieceKind::Bishop => PieceType::B,
        PieceKind::Rook => PieceType::R,
        PieceKind::Queen => PieceType::Q,
        PieceKind::King => PieceType::K,
    }
}

impl Rules for RevBoard {
    type Move = BitMove;

    fn legal_moves(&self) -> Vec<BitMove> { self.board.generate_moves().iter().copied().collect() }

    fn apply(&mut self, mv: BitMove) -> Result<()> {
        if !self.board.generate_moves().iter().any(|&m| m == mv) {
            return Err(Error::IllegalMove(format!("{}", mv)));
        }
        let key = self.board.zobrist();
        self.board.apply_move(mv);
        self.stack.push((mv, key));
        Ok(())
    }

    fn undo(&mut self) -> Result<()> {
        self.stack.pop().ok_or(Error::EmptyUndo)?;
        self.board.undo_move();
        Ok(())
    }

    fn is_game_over(&self) -> bool {
        self.board.checkmate()
            || self.board.stalemate()
            || self.is_insufficient_material()
            || self.board.rule_50() >= 150
            || self.is_fivefold_repetition()
    }

    fn is_checkmate(&self) -> bool { self.board.checkmate() }

    fn turn(&self) -> Side {
        match self.board.turn() { Player::White => Side::White, Player::Black => Side::Black }
    }

    fn piece_count(&self, side: Side, kind: PieceKind) -> u32 {
        self.board.count_piece(to_player(side), to_piece_type(kind)) as u32
    }
}
