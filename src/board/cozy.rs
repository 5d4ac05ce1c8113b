use cozy_chess::{BitBoard, Board as CozyBoard, Color, File, Move, Piece, Rank, Square};
use std::fmt;

use crate::board::{insufficient_material, PieceKind, Rules, Side};
use crate::error::{Error, Result};

/// cozy-chess position with an undo stack of previous boards.
#[derive(Clone, Debug)]
pub struct Position {
    board: CozyBoard,
    history: Vec<CozyBoard>,
}

impl Position {
    pub fn startpos() -> Self {
        Self { board: CozyBoard::default(), history: Vec::with_capacity(128) }
    }

    pub fn from_fen(fen: &str) -> Result<Self> {
        CozyBoard::from_fen(fen, false)
            .map(|b| Self { board: b, history: Vec::with_capacity(128) })
            .map_err(|e| Error::Fen(format!("{e:?}")))
    }

    /// Start position followed by a list of UCI moves.
    pub fn from_moves(moves: &[String]) -> Result<Self> {
        let mut pos = Self::startpos();
        for m in moves { pos.play_uci(m)?; }
        Ok(pos)
    }

    pub fn fen(&self) -> String { format!("{}", self.board) }

    /// UCI text for a move; castling is written as the king's two-square step.
    pub fn uci(&self, mv: Move) -> String {
        let stm = self.board.side_to_move();
        let castles = self.board.piece_on(mv.from) == Some(Piece::King)
            && self.board.color_on(mv.to) == Some(stm);
        if castles {
            let file = if (mv.to.file() as u8) > (mv.from.file() as u8) { File::G } else { File::C };
            let to = Square::new(file, mv.from.rank());
            return format!("{}{}", mv.from, to);
        }
        format!("{}", mv)
    }

    /// Resolves UCI text against the legal moves of this position.
    pub fn parse_uci(&self, text: &str) -> Result<Move> {
        let text = text.trim();
        if text.len() < 4 || text.len() > 5 {
            return Err(Error::Notation(text.to_string()));
        }
        self.legal_moves()
            .into_iter()
            .find(|&m| self.uci(m) == text || format!("{}", m) == text)
            .ok_or_else(|| Error::IllegalMove(text.to_string()))
    }

    pub fn play_uci(&mut self, text: &str) -> Result<Move> {
        let mv = self.parse_uci(text)?;
        self.apply(mv)?;
        Ok(mv)
    }

    /// Stops at the first non-empty batch from the generator.
    pub fn has_legal_moves(&self) -> bool { self.board.generate_moves(|ml| !ml.is_empty()) }

    pub fn is_checkmate_or_stalemate(&self) -> bool { !self.has_legal_moves() }

    fn bishops_share_colour(&self) -> bool {
        let bishops = self.board.pieces(Piece::Bishop);
        (bishops & BitBoard::DARK_SQUARES).is_empty() || (bishops & BitBoard::LIGHT_SQUARES).is_empty()
    }

    pub fn is_insufficient_material(&self) -> bool {
        insufficient_material(self, || self.bishops_share_colour())
    }

    pub fn is_stalemate(&self) -> bool {
        self.board.checkers().is_empty() && self.is_checkmate_or_stalemate()
    }

    pub fn is_seventyfive_moves(&self) -> bool { self.board.halfmove_clock() >= 150 }

    pub fn is_fivefold_repetition(&self) -> bool {
        let key = self.board.hash();
        self.history.iter().filter(|b| b.hash() == key).count() + 1 >= 5
    }

    /// Result string once the game is over: "1-0", "0-1" or "1/2-1/2".
    pub fn result(&self) -> Option<&'static str> {
        if self.is_checkmate() {
            return Some(match self.turn() { Side::White => "0-1", Side::Black => "1-0" });
        }
        if self.is_game_over() { Some("1/2-1/2") } else { None }
    }

    /// Why the game ended, if it did.
    pub fn termination(&self) -> Option<&'static str> {
        if self.is_checkmate() { Some("checkmate") }
        else if self.is_stalemate() { Some("stalemate") }
        else if self.is_insufficient_material() { Some("insufficient material") }
        else if self.is_seventyfive_moves() { Some("seventy-five move rule") }
        else if self.is_fivefold_repetition() { Some("fivefold repetition") }
        else { None }
    }
}

fn to_color(side: Side) -> Color {
    match side { Side::White => Color::White, Side::Black => Color::Black }
}

fn to_piece(kind: PieceKind) -> Piece {
    match kind {
        PieceKind::Pawn => Piece::Pawn,
        PieceKind::Knight => Piece::Knight,
        PieceKind::Bishop => Piece::Bishop,
        PieceKind::Rook => Piece::Rook,
        PieceKind::Queen => Piece::Queen,
        PieceKind::King => Piece::King,
    }
}

impl Rules for Position {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|ml| { moves.extend(ml); false });
        moves
    }

    fn apply(&mut self, mv: Move) -> Result<()> {
        if !self.board.is_legal(mv) {
            return Err(Error::IllegalMove(format!("{}", mv)));
        }
        self.history.push(self.board.clone());
        self.board.play(mv);
        Ok(())
    }

    fn undo(&mut self) -> Result<()> {
        self.board = self.history.pop().ok_or(Error::EmptyUndo)?;
        Ok(())
    }

    fn is_game_over(&self) -> bool {
        self.is_checkmate_or_stalemate()
            || self.is_insufficient_material()
            || self.is_seventyfive_moves()
            || self.is_fivefold_repetition()
    }

    fn is_checkmate(&self) -> bool {
        !self.board.checkers().is_empty() && self.is_checkmate_or_stalemate()
    }

    fn turn(&self) -> Side {
        match self.board.side_to_move() { Color::White => Side::White, Color::Black => Side::Black }
    }

    fn piece_count(&self, side: Side, kind: PieceKind) -> u32 {
        let bb = self.board.colors(to_color(side)) & self.board.pieces(to_piece(kind));
        bb.into_iter().count() as u32
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.iter().rev() {
            write!(f, "{} ", *rank as u8 + 1)?;
            for file in File::ALL {
                let sq = Square::new(file, *rank);
                let c = match self.board.piece_on(sq) {
                    Some(piece) => {
                        let c = match piece {
                            Piece::Pawn => 'p',
                            Piece::Knight => 'n',
                            Piece::Bishop => 'b',
                            Piece::Rook => 'r',
                            Piece::Queen => 'q',
                            Piece::King => 'k',
                        };
                        if self.board.color_on(sq) == Some(Color::White) { c.to_ascii_uppercase() } else { c }
                    }
                    None => '.',
                };
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
