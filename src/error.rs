use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("FEN error: {0}")]
    Fen(String),
    #[error("illegal move: {0}")]
    IllegalMove(String),
    #[error("invalid move notation: {0}")]
    Notation(String),
    #[error("undo requested with no applied move")]
    EmptyUndo,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
