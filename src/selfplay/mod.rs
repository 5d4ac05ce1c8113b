use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::board::cozy::Position;
use crate::board::{Rules, Side};
use crate::error::Result;
use crate::search::alphabeta::Searcher;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opponent {
    Random,
    Engine,
}

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub depth: u32,
    pub seed: u64,
    pub opponent: Opponent,
}

impl Default for SelfPlayParams {
    fn default() -> Self { Self { games: 10, max_plies: 200, depth: 2, seed: 42, opponent: Opponent::Random } }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<String>,
    // "1-0", "0-1", "1/2-1/2" or "*" when cut off
    pub result: String,
    pub termination: String,
}

/// Plays one game with the engine as White.
pub fn play_game(params: &SelfPlayParams, game_index: usize) -> Result<GameRecord> {
    let mut rng = SmallRng::seed_from_u64(params.seed.wrapping_add(game_index as u64));
    let mut searcher = Searcher::default();
    let mut pos = Position::startpos();
    let mut moves = Vec::new();

    while !pos.is_game_over() && moves.len() < params.max_plies {
        let mv = match (pos.turn(), params.opponent) {
            (Side::White, _) => searcher.select_best_move(&mut pos, params.depth)?,
            (Side::Black, Opponent::Engine) => searcher.select_for_side_to_move(&mut pos, params.depth)?.best_move,
            (Side::Black, Opponent::Random) => {
                let legal = pos.legal_moves();
                if legal.is_empty() { None } else { Some(legal[rng.gen_range(0..legal.len())]) }
            }
        };
        let Some(mv) = mv else { break };
        moves.push(pos.uci(mv));
        pos.apply(mv)?;
    }

    let (result, termination) = match (pos.result(), pos.termination()) {
        (Some(r), Some(t)) => (r.to_string(), t.to_string()),
        _ => ("*".to_string(), "max plies".to_string()),
    };
    log::debug!("game {game_index}: {result} by {termination} after {} plies", moves.len());
    Ok(GameRecord { moves, result, termination })
}

pub fn generate_games(params: &SelfPlayParams) -> Result<Vec<GameRecord>> {
    (0..params.games).map(|gi| play_game(params, gi)).collect()
}

pub fn write_jsonl<P: AsRef<Path>>(games: &[GameRecord], path: P) -> Result<()> {
    if let Some(dir) = path.as_ref().parent() {
        if !dir.as_os_str().is_empty() { std::fs::create_dir_all(dir)?; }
    }
    let mut w = BufWriter::new(File::create(path)?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<GameRecord>> {
    let rdr = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in rdr.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        out.push(serde_json::from_str(&line)?);
    }
    Ok(out)
}
