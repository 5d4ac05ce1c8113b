use crate::board::Rules;
use crate::error::Result;

// Make/unmake perft over any rules adapter (no cloning)
pub fn perft<P: Rules>(pos: &mut P, depth: u32) -> Result<u64> {
    if depth == 0 { return Ok(1); }
    let moves = pos.legal_moves();
    if depth == 1 { return Ok(moves.len() as u64); }
    let mut nodes = 0u64;
    for mv in moves {
        pos.apply(mv)?;
        let sub = perft(pos, depth - 1);
        pos.undo()?;
        nodes += sub?;
    }
    Ok(nodes)
}

/// Per-root-move counts, in move generation order.
pub fn divide<P: Rules>(pos: &mut P, depth: u32) -> Result<Vec<(P::Move, u64)>> {
    let mut out = Vec::new();
    for mv in pos.legal_moves() {
        pos.apply(mv)?;
        let sub = perft(pos, depth.saturating_sub(1));
        pos.undo()?;
        out.push((mv, sub?));
    }
    Ok(out)
}
