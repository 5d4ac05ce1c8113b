// Fixed-depth alpha-beta chess player
pub mod error;
pub mod board;
pub mod search;
pub mod perft;
pub mod uci;
pub mod selfplay;

pub use error::{Error, Result};
pub use board::{PieceKind, Rules, Side};
pub use board::cozy::Position;
pub use search::alphabeta::{SearchParams, SearchResult, Searcher};
pub use search::eval::{Evaluator, Material, Score};
