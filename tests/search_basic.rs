use cheese::search::eval::{Evaluator, Material, INFINITY, WIN_SCORE};
use cheese::{Position, Rules, SearchParams, Searcher};
use std::fs::File;
use std::io::{BufRead, BufReader};

#[derive(Debug, serde::Deserialize)]
struct PosRec { fen: String, best: String }

fn load_mates() -> Vec<PosRec> {
    let f = File::open("tests/data/mates_in_one.jsonl").expect("open bundled mates_in_one.jsonl");
    BufReader::new(f)
        .lines()
        .map_while(Result::ok)
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(&l).expect("valid record"))
        .collect()
}

#[test]
fn search_returns_legal_move_startpos() {
    let mut pos = Position::startpos();
    let mut searcher = Searcher::default();
    let mv = searcher.select_best_move(&mut pos, 1).unwrap().expect("no move found at depth 1");
    assert!(pos.legal_moves().contains(&mv));
}

#[test]
fn search_prefers_winning_queen_capture() {
    // Qe2xd2 wins a queen
    let mut pos = Position::from_fen("k7/8/8/8/8/8/3qQ3/7K w - - 0 1").unwrap();
    let mut searcher = Searcher::default();
    let res = searcher.search_root(&mut pos, 1).unwrap();
    let bm = pos.uci(res.best_move.expect("expected a best move"));
    assert_eq!(bm, "e2d2", "expected Qe2xd2 as best move, got {bm}");
    assert_eq!(res.score, 900);
}

#[test]
fn black_to_move_minimizes() {
    let mut pos = Position::from_fen("k7/8/8/8/8/8/3qQ3/7K b - - 0 1").unwrap();
    let mut searcher = Searcher::default();
    let res = searcher.select_for_side_to_move(&mut pos, 1).unwrap();
    assert_eq!(pos.uci(res.best_move.unwrap()), "d2e2");
    assert_eq!(res.score, -900);
}

#[test]
fn finds_mate_in_one_at_depth_two() {
    for rec in load_mates() {
        let mut pos = Position::from_fen(&rec.fen).expect("valid fen");
        let mut searcher = Searcher::default();
        let res = searcher.search_root(&mut pos, 2).unwrap();
        let best = res.best_move.map(|m| pos.uci(m));
        assert_eq!(best.as_deref(), Some(rec.best.as_str()), "FEN {}", rec.fen);
        assert_eq!(res.score, WIN_SCORE, "FEN {}", rec.fen);
    }
}

#[test]
fn repeated_calls_pick_the_same_move() {
    let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 2 3";
    let mut pos = Position::from_fen(fen).unwrap();
    let mut searcher = Searcher::default();
    let a = searcher.select_best_move(&mut pos, 3).unwrap();
    let b = searcher.select_best_move(&mut pos, 3).unwrap();
    assert!(a.is_some());
    assert_eq!(a, b);
}

#[test]
fn search_leaves_position_untouched() {
    let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 2 3";
    let mut pos = Position::from_fen(fen).unwrap();
    let before = pos.fen();
    let mut searcher = Searcher::default();
    searcher.select_best_move(&mut pos, 3).unwrap();
    assert_eq!(pos.fen(), before);
    // The stack is empty again: one more undo has nothing to revert.
    assert!(pos.undo().is_err());
}

#[test]
fn depth_zero_search_is_static_eval() {
    let mut pos = Position::from_fen("4k3/8/8/8/5Q2/8/8/2b4K b - - 0 1").unwrap();
    let expected = Material.evaluate(&pos);
    let mut searcher = Searcher::default();
    for (alpha, beta) in [(-INFINITY, INFINITY), (0, 1), (1000, -1000), (-50, 50)] {
        for maximizing in [true, false] {
            assert_eq!(searcher.search(&mut pos, 0, alpha, beta, maximizing).unwrap(), expected);
        }
    }
}

#[test]
fn root_depth_zero_still_tries_every_move() {
    let mut pos = Position::from_fen("k7/8/8/8/8/8/3qQ3/7K w - - 0 1").unwrap();
    let mut searcher = Searcher::default();
    let res = searcher.search_root(&mut pos, 0).unwrap();
    assert_eq!(pos.uci(res.best_move.unwrap()), "e2d2");
}

#[test]
fn no_move_when_the_game_is_decided() {
    let mut mated = Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
    let mut stalemated = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    let mut searcher = Searcher::default();
    assert_eq!(searcher.select_best_move(&mut mated, 3).unwrap(), None);
    assert_eq!(searcher.select_best_move(&mut stalemated, 3).unwrap(), None);
}

#[test]
fn search_with_params_uses_configured_depth() {
    let mut pos = Position::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").unwrap();
    let mut searcher = Searcher::default();
    let res = searcher.search_with_params(&mut pos, SearchParams { depth: 2 }).unwrap();
    assert_eq!(pos.uci(res.best_move.unwrap()), "a1a8");
    assert!(res.nodes > 0);
}

#[test]
fn default_depth_is_three() {
    assert_eq!(SearchParams::default().depth, 3);
}
