use clap::Parser;
use cheese::selfplay::{play_game, write_jsonl, Opponent, SelfPlayParams};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cheese-selfplay", about = "Play engine games and record them as JSON lines")]
struct Args {
    #[arg(long, default_value_t = 10)]
    games: usize,
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
    #[arg(long, default_value_t = 2)]
    depth: u32,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Let the engine play both sides instead of a random mover as Black
    #[arg(long, default_value_t = false)]
    engine_vs_engine: bool,
    #[arg(long, default_value = "out/games.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams {
        games: a.games,
        max_plies: a.max_plies,
        depth: a.depth,
        seed: a.seed,
        opponent: if a.engine_vs_engine { Opponent::Engine } else { Opponent::Random },
    };
    eprintln!("Playing {} games (depth={}, opponent={:?})", params.games, params.depth, params.opponent);

    let bar = ProgressBar::new(params.games as u64);
    bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games {msg}")?);
    let mut games = Vec::with_capacity(params.games);
    for gi in 0..params.games {
        let g = play_game(&params, gi)?;
        bar.set_message(format!("last: {} ({})", g.result, g.termination));
        games.push(g);
        bar.inc(1);
    }
    bar.finish();

    let tally = |r: &str| games.iter().filter(|g| g.result == r).count();
    eprintln!(
        "White {} / Black {} / Draw {} / Unfinished {}",
        tally("1-0"), tally("0-1"), tally("1/2-1/2"), tally("*")
    );
    write_jsonl(&games, &a.out)?;
    eprintln!("Wrote {}", a.out.display());
    Ok(())
}
