//! Unpruned minimax over the same leaves as the alpha-beta search.
//!
//! Visits every node of the tree, so it is only practical at small depths.
//! It serves as the baseline that alpha-beta must agree with.
use crate::board::Rules;
use crate::error::Result;
use crate::search::eval::{Evaluator, Score, INFINITY};

/// Returns the minimax score and the number of nodes visited.
pub fn minimax<P, E>(evaluator: &E, pos: &mut P, depth: u32, maximizing: bool) -> Result<(Score, u64)>
where
    P: Rules,
    E: Evaluator<P>,
{
    if depth == 0 || pos.is_game_over() { return Ok((evaluator.evaluate(pos), 1)); }
    let moves = pos.legal_moves();
    if moves.is_empty() { return Ok((evaluator.evaluate(pos), 1)); }

    let mut best = if maximizing { -INFINITY } else { INFINITY };
    let mut nodes = 1u64;
    for mv in moves {
        pos.apply(mv)?;
        let child = minimax(evaluator, pos, depth - 1, !maximizing);
        pos.undo()?;
        let (score, n) = child?;
        nodes += n;
        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    Ok((best, nodes))
}
