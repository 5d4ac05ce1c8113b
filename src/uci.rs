use std::io::{self, BufRead, Write};

use crate::board::cozy::Position;
use crate::board::{Rules, Side};
use crate::search::alphabeta::{SearchParams, Searcher};

pub struct UciEngine {
    pos: Position,
    searcher: Searcher,
    params: SearchParams,
}

impl Default for UciEngine {
    fn default() -> Self { Self::new(SearchParams::default()) }
}

impl UciEngine {
    pub fn new(params: SearchParams) -> Self {
        Self { pos: Position::startpos(), searcher: Searcher::default(), params }
    }

    pub fn position(&self) -> &Position { &self.pos }

    fn cmd_uci<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name Cheese")?;
        writeln!(out, "id author Cheese Team")?;
        writeln!(out, "uciok")
    }

    fn cmd_position(&mut self, args: &str) {
        // 'position startpos [moves ...]' or 'position fen <fen> [moves ...]'
        let mut tokens = args.split_whitespace().peekable();
        let base = match tokens.next() {
            Some("startpos") => Position::startpos(),
            Some("fen") => {
                let mut fen_fields: Vec<&str> = Vec::with_capacity(6);
                while fen_fields.len() < 6 {
                    match tokens.next_if(|t| *t != "moves") {
                        Some(t) => fen_fields.push(t),
                        None => break,
                    }
                }
                // move counters are optional, as in EPD
                if fen_fields.len() == 4 { fen_fields.extend(["0", "1"]); }
                match Position::from_fen(&fen_fields.join(" ")) {
                    Ok(p) => p,
                    Err(e) => { log::warn!("rejected position: {e}"); return; }
                }
            }
            _ => { log::warn!("unrecognised position command: {args}"); return; }
        };
        let mut pos = base;
        if let Some("moves") = tokens.next() {
            for m in tokens {
                if let Err(e) = pos.play_uci(m) {
                    log::warn!("rejected move list: {e}");
                    return;
                }
            }
        }
        self.pos = pos;
    }

    fn cmd_go<W: Write>(&mut self, args: &str, out: &mut W) -> io::Result<()> {
        let mut depth = self.params.depth;
        let mut tokens = args.split_whitespace();
        while let Some(tok) = tokens.next() {
            if tok == "depth" {
                if let Some(d) = tokens.next().and_then(|s| s.parse::<u32>().ok()) { depth = d; }
            }
        }
        match self.searcher.select_for_side_to_move(&mut self.pos, depth) {
            Ok(res) => {
                let cp = if self.pos.turn() == Side::White { res.score } else { -res.score };
                writeln!(out, "info depth {} score cp {} nodes {}", depth, cp, res.nodes)?;
                match res.best_move {
                    Some(mv) => writeln!(out, "bestmove {}", self.pos.uci(mv)),
                    None => writeln!(out, "bestmove 0000"),
                }
            }
            Err(e) => {
                log::warn!("search aborted: {e}");
                writeln!(out, "bestmove 0000")
            }
        }
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() { continue; }
            match line {
                "uci" => self.cmd_uci(out)?,
                "isready" => writeln!(out, "readyok")?,
                "ucinewgame" => self.pos = Position::startpos(),
                "quit" => break,
                "stop" => {}
                _ => {
                    if let Some(rest) = line.strip_prefix("position ") {
                        self.cmd_position(rest);
                    } else if line == "go" || line.starts_with("go ") {
                        self.cmd_go(&line[2..], out)?;
                    } else {
                        log::debug!("ignoring command: {line}");
                    }
                }
            }
            out.flush()?;
        }
        Ok(())
    }

    pub fn run_stdio(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run(stdin.lock(), &mut out)
    }
}
