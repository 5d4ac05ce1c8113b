use anyhow::Result;
use cheese::board::cozy::Position;
use cheese::uci::UciEngine;
use cheese::{Rules, SearchParams, Searcher, Side};
use clap::Parser;
use std::io::{self, Write};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play chess against a fixed-depth alpha-beta engine", long_about = None)]
struct Args {
    /// Search depth in plies
    #[arg(long, default_value_t = SearchParams::default().depth)]
    depth: u32,

    /// Engine color: 'w' for white, 'b' for black
    #[arg(long, default_value = "w")]
    engine_color: String,

    /// Starting FEN position
    #[arg(long)]
    fen: Option<String>,

    /// Speak UCI on stdin/stdout instead of the interactive board
    #[arg(long)]
    uci: bool,
}

fn parse_color(color_str: &str) -> Result<Side> {
    match color_str.to_lowercase().as_str() {
        "w" | "white" => Ok(Side::White),
        "b" | "black" => Ok(Side::Black),
        _ => anyhow::bail!("Invalid color: use 'w' or 'b'"),
    }
}

/// None means the player asked to quit.
fn get_human_move(pos: &Position) -> Result<Option<String>> {
    loop {
        print!("Enter your move (e.g., e7e5): ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 { return Ok(None); }
        let input = input.trim();
        if input == "quit" { return Ok(None); }

        match pos.parse_uci(input) {
            Ok(mv) => return Ok(Some(pos.uci(mv))),
            Err(cheese::Error::IllegalMove(_)) => println!("Illegal move!"),
            Err(_) => println!("Invalid move format! Use format like 'e7e5'"),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let params = SearchParams { depth: args.depth };

    if args.uci {
        UciEngine::new(params).run_stdio()?;
        return Ok(());
    }

    let engine_side = parse_color(&args.engine_color)?;
    let mut pos = match args.fen {
        Some(fen) => Position::from_fen(&fen)?,
        None => Position::startpos(),
    };
    let mut searcher = Searcher::default();

    loop {
        println!("\n{}'s turn", pos.turn());
        println!("{}", pos);

        if let Some(result) = pos.result() {
            println!("\nGame over: {} ({})", result, pos.termination().unwrap_or("unknown"));
            break;
        }

        if pos.turn() == engine_side {
            println!("Thinking...");
            let start_time = Instant::now();
            let res = searcher.search_with_params(&mut pos, params)?;
            let Some(mv) = res.best_move else {
                println!("No legal moves available!");
                break;
            };
            println!(
                "Computer plays: {} (score {}, {} nodes, {:.2}s)",
                pos.uci(mv), res.score, res.nodes, start_time.elapsed().as_secs_f32()
            );
            pos.apply(mv)?;
        } else {
            let Some(text) = get_human_move(&pos)? else {
                println!("Thanks for playing!");
                break;
            };
            pos.play_uci(&text)?;
        }
    }

    Ok(())
}
