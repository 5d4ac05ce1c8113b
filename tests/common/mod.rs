#![allow(dead_code)]
use cheese::search::eval::{Evaluator, Score};
use cheese::{Error, PieceKind, Rules, Side};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Explicit game tree whose move order is fully controlled by the test.
#[derive(Clone, Debug)]
pub struct Node {
    pub children: Vec<usize>,
    pub value: Score,
    pub terminal: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Apply(usize),
    Undo(usize),
}

#[derive(Clone, Debug)]
pub struct TreeGame {
    pub nodes: Vec<Node>,
    pub path: Vec<usize>,
    pub log: Vec<Event>,
    // undo fails once the log reaches this many events
    pub fail_undo_after: Option<usize>,
    pub root_side: Side,
}

impl TreeGame {
    pub fn new() -> Self {
        Self { nodes: vec![Node { children: Vec::new(), value: 0, terminal: false }], path: Vec::new(), log: Vec::new(), fail_undo_after: None, root_side: Side::White }
    }

    pub fn add(&mut self, parent: usize, value: Score) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node { children: Vec::new(), value, terminal: false });
        self.nodes[parent].children.push(id);
        id
    }

    /// Root with one child per entry; each child is a leaf holding that value.
    pub fn flat(values: &[Score]) -> Self {
        let mut g = Self::new();
        for &v in values { g.add(0, v); }
        g
    }

    /// Uniform random tree of the given depth and branching.
    pub fn random(seed: u64, depth: u32, branching: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut g = Self::new();
        let mut frontier = vec![0usize];
        for _ in 0..depth {
            let mut next = Vec::new();
            for parent in frontier {
                let width = rng.gen_range(1..=branching);
                for _ in 0..width {
                    next.push(g.add(parent, rng.gen_range(-1000..=1000)));
                }
            }
            frontier = next;
        }
        g
    }

    pub fn current(&self) -> usize { *self.path.last().unwrap_or(&0) }
}

impl Rules for TreeGame {
    type Move = usize;

    fn legal_moves(&self) -> Vec<usize> { self.nodes[self.current()].children.clone() }

    fn apply(&mut self, mv: usize) -> cheese::Result<()> {
        if !self.nodes[self.current()].children.contains(&mv) {
            return Err(Error::IllegalMove(mv.to_string()));
        }
        self.path.push(mv);
        self.log.push(Event::Apply(mv));
        Ok(())
    }

    fn undo(&mut self) -> cheese::Result<()> {
        if let Some(limit) = self.fail_undo_after {
            if self.log.len() >= limit { return Err(Error::EmptyUndo); }
        }
        let mv = self.path.pop().ok_or(Error::EmptyUndo)?;
        self.log.push(Event::Undo(mv));
        Ok(())
    }

    fn is_game_over(&self) -> bool { self.nodes[self.current()].terminal }

    fn is_checkmate(&self) -> bool { false }

    fn turn(&self) -> Side { if self.path.len() % 2 == 0 { self.root_side } else { self.root_side.opposite() } }

    fn piece_count(&self, _side: Side, _kind: PieceKind) -> u32 { 0 }
}

/// Reads the value stored on the current node.
pub struct NodeValue;

impl Evaluator<TreeGame> for NodeValue {
    fn evaluate(&self, pos: &TreeGame) -> Score { pos.nodes[pos.current()].value }
}

/// Mirror a FEN: flip ranks, swap colors and side to move.
pub fn mirror_fen(fen: &str) -> String {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let swap = |s: &str| -> String {
        s.chars().map(|c| if c.is_ascii_uppercase() { c.to_ascii_lowercase() } else { c.to_ascii_uppercase() }).collect()
    };
    let placement: Vec<String> = fields[0].split('/').rev().map(swap).collect();
    let stm = if fields[1] == "w" { "b" } else { "w" };
    let castling = if fields[2] == "-" {
        "-".to_string()
    } else {
        let mut c: Vec<char> = swap(fields[2]).chars().collect();
        c.sort_by_key(|ch| (ch.is_ascii_lowercase(), "KQkq".find(ch.to_ascii_uppercase())));
        c.into_iter().collect()
    };
    let ep = if fields[3] == "-" {
        "-".to_string()
    } else {
        let mut c = fields[3].chars();
        let file = c.next().unwrap_or('a');
        let rank = c.next().and_then(|r| r.to_digit(10)).unwrap_or(1);
        format!("{}{}", file, 9 - rank)
    };
    format!("{} {} {} {} {} {}", placement.join("/"), stm, castling, ep, fields[4], fields[5])
}
