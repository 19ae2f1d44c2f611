use clap::Parser;
use gridbot::perft::{perft, reachable_positions};
use gridbot::Board;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Game-tree node counts for the 3x3 board")]
struct Args {
    /// Plies to expand
    #[arg(value_name = "DEPTH", default_value_t = 9)]
    depth: u32,
    /// Board as 9 cells of X, O and '.'; side to move follows mark counts
    #[arg(long, default_value = ".........")]
    board: String,
    /// Also count distinct positions reachable from the empty board
    #[arg(long, default_value_t = false)]
    positions: bool,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut board: Board = args.board.parse()?;
    let side = board.side_to_move();

    let t0 = Instant::now();
    let nodes = perft(&mut board, side, args.depth);
    let dt = t0.elapsed().as_secs_f64();
    if args.nps {
        println!("nodes: {} elapsed: {:.3}s nps: {:.0}", nodes, dt, nodes as f64 / dt.max(1e-9));
    } else {
        println!("nodes: {}", nodes);
    }
    if args.positions {
        println!("reachable positions: {}", reachable_positions().len());
    }
    Ok(())
}
