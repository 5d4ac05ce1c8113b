use anyhow::Result;
use cheese::perft::{divide, perft};
use cheese::Rules;
use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use std::time::Instant;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Backend {
    Cozy,
    #[cfg(feature = "board-pleco")]
    Pleco,
}

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Perft driver for the rules adapters")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// FEN string or "startpos"
    #[arg(value_name = "FEN", default_value = "startpos")]
    fen: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
    /// Print the node count below each root move
    #[arg(long, default_value_t = false)]
    divide: bool,
    /// Move generator to exercise
    #[arg(long, value_enum, default_value_t = Backend::Cozy)]
    backend: Backend,
}

fn run<P>(mut base: P, args: &Args) -> Result<()>
where
    P: Rules + Clone + Send + Sync,
    P::Move: Send + Sync,
{
    if args.divide {
        for (mv, nodes) in divide(&mut base, args.depth)? {
            println!("{mv:?}: {nodes}");
        }
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let depth = args.depth;
    let (nodes, dt) = pool.install(|| -> Result<(u64, f64)> {
        let t0 = Instant::now();
        let nodes = if args.threads <= 1 || depth <= 1 {
            perft(&mut base.clone(), depth)?
        } else {
            let root_moves = base.legal_moves();
            root_moves
                .par_iter()
                .map(|&mv| {
                    let mut b = base.clone();
                    b.apply(mv)?;
                    perft(&mut b, depth - 1)
                })
                .collect::<cheese::Result<Vec<u64>>>()?
                .into_iter()
                .sum()
        };
        Ok((nodes, t0.elapsed().as_secs_f64()))
    })?;

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("perft depth {} on {} ({:?})", args.depth, args.fen, args.backend);

    match args.backend {
        Backend::Cozy => {
            let base = if args.fen == "startpos" {
                cheese::Position::startpos()
            } else {
                cheese::Position::from_fen(&args.fen)?
            };
            run(base, &args)
        }
        #[cfg(feature = "board-pleco")]
        Backend::Pleco => {
            use cheese::board::pleco::RevBoard;
            let base = if args.fen == "startpos" { RevBoard::startpos() } else { RevBoard::from_fen(&args.fen)? };
            run(base, &args)
        }
    }
}
