use crate::board::{Rules, Side};
use crate::error::Result;
use crate::search::eval::{Evaluator, Material, Score, INFINITY};

#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    pub depth: u32,
}

impl Default for SearchParams {
    fn default() -> Self { Self { depth: 3 } }
}

#[derive(Debug, Clone)]
pub struct SearchResult<M> {
    pub best_move: Option<M>,
    pub score: Score,
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Fixed-depth minimax with alpha-beta pruning.
///
/// Only per-call statistics live here; they are reset at every root search.
pub struct Searcher<E = Material> {
    evaluator: E,
    nodes: u64,
    cutoffs: u64,
}

impl Default for Searcher<Material> {
    fn default() -> Self { Self::new(Material) }
}

impl<E> Searcher<E> {
    pub fn new(evaluator: E) -> Self { Self { evaluator, nodes: 0, cutoffs: 0 } }
    pub fn nodes(&self) -> u64 { self.nodes }
    pub fn cutoffs(&self) -> u64 { self.cutoffs }

    /// Scores `pos` looking `depth` plies ahead inside the window `(alpha, beta)`.
    ///
    /// The evaluation stays White-relative; `maximizing` only decides whether
    /// child scores are combined with max or min.
    pub fn search<P>(&mut self, pos: &mut P, depth: u32, mut alpha: Score, mut beta: Score, maximizing: bool) -> Result<Score>
    where
        P: Rules,
        E: Evaluator<P>,
    {
        self.nodes += 1;
        if depth == 0 || pos.is_game_over() { return Ok(self.evaluator.evaluate(pos)); }
        let moves = pos.legal_moves();
        // Only a broken rules engine reports no moves for a live game.
        if moves.is_empty() { return Ok(self.evaluator.evaluate(pos)); }

        if maximizing {
            let mut best = -INFINITY;
            for mv in moves {
                let score = self.child(pos, mv, depth - 1, alpha, beta, false)?;
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    self.cutoffs += 1;
                    log::trace!("beta cutoff at depth {depth}: alpha {alpha} beta {beta}");
                    break;
                }
            }
            Ok(best)
        } else {
            let mut best = INFINITY;
            for mv in moves {
                let score = self.child(pos, mv, depth - 1, alpha, beta, true)?;
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    self.cutoffs += 1;
                    log::trace!("alpha cutoff at depth {depth}: alpha {alpha} beta {beta}");
                    break;
                }
            }
            Ok(best)
        }
    }

    // Undo runs even when the subtree failed so the stack still unwinds in order.
    fn child<P>(&mut self, pos: &mut P, mv: P::Move, depth: u32, alpha: Score, beta: Score, maximizing: bool) -> Result<Score>
    where
        P: Rules,
        E: Evaluator<P>,
    {
        pos.apply(mv)?;
        let score = self.search(pos, depth, alpha, beta, maximizing);
        pos.undo()?;
        score
    }

    /// Picks White's best move; the first move reaching the best score wins ties.
    pub fn select_best_move<P>(&mut self, pos: &mut P, depth: u32) -> Result<Option<P::Move>>
    where
        P: Rules,
        E: Evaluator<P>,
    {
        Ok(self.search_root(pos, depth)?.best_move)
    }

    /// Root search maximizing for White regardless of who is to move.
    pub fn search_root<P>(&mut self, pos: &mut P, depth: u32) -> Result<SearchResult<P::Move>>
    where
        P: Rules,
        E: Evaluator<P>,
    {
        self.root(pos, depth, true)
    }

    /// Root search for whichever side is to move: White maximizes, Black minimizes.
    pub fn select_for_side_to_move<P>(&mut self, pos: &mut P, depth: u32) -> Result<SearchResult<P::Move>>
    where
        P: Rules,
        E: Evaluator<P>,
    {
        let maximizing = pos.turn() == Side::White;
        self.root(pos, depth, maximizing)
    }

    pub fn search_with_params<P>(&mut self, pos: &mut P, params: SearchParams) -> Result<SearchResult<P::Move>>
    where
        P: Rules,
        E: Evaluator<P>,
    {
        self.select_for_side_to_move(pos, params.depth)
    }

    fn root<P>(&mut self, pos: &mut P, depth: u32, maximizing: bool) -> Result<SearchResult<P::Move>>
    where
        P: Rules,
        E: Evaluator<P>,
    {
        self.nodes = 0;
        self.cutoffs = 0;
        let moves = pos.legal_moves();
        if moves.is_empty() {
            let score = self.evaluator.evaluate(pos);
            log::info!("no legal moves at root, score {score}");
            return Ok(SearchResult { best_move: None, score, nodes: self.nodes, cutoffs: self.cutoffs });
        }

        let mut alpha = -INFINITY;
        let mut beta = INFINITY;
        let mut best_score = if maximizing { -INFINITY } else { INFINITY };
        let mut best_move = None;
        for mv in moves {
            let score = self.child(pos, mv, depth.saturating_sub(1), alpha, beta, !maximizing)?;
            log::debug!("root move {mv:?} scored {score}");
            if maximizing {
                if score > best_score { best_score = score; best_move = Some(mv); }
                alpha = alpha.max(score);
            } else {
                if score < best_score { best_score = score; best_move = Some(mv); }
                beta = beta.min(score);
            }
        }
        log::info!(
            "depth {depth} best {best_move:?} score {best_score} nodes {} cutoffs {}",
            self.nodes, self.cutoffs
        );
        Ok(SearchResult { best_move, score: best_score, nodes: self.nodes, cutoffs: self.cutoffs })
    }
}
