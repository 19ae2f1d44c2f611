use clap::Parser;
use gridbot::select::Difficulty;
use gridbot::selfplay::{generate_games_with_progress, summarize, GameRecord, SelfPlayParams};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gridbot-selfplay", about = "Play bot-vs-bot games and summarize the results")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    /// Level of the X side
    #[arg(long, default_value = "hard")]
    x: Difficulty,
    /// Level of the O side
    #[arg(long, default_value = "hard")]
    o: Difficulty,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Worker threads (0 = rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,
    /// Optional: write summary and games as JSON to this path
    #[arg(long)]
    json_out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams { games: a.games, x: a.x, o: a.o, seed: a.seed };

    let pb = ProgressBar::new(a.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games ({elapsed})")?);
    let mut builder = rayon::ThreadPoolBuilder::new();
    if a.threads > 0 { builder = builder.num_threads(a.threads); }
    let pool = builder.build()?;

    eprintln!("Playing {} games (X={}, O={}, seed={})", a.games, a.x, a.o, a.seed);
    let games: Vec<GameRecord> =
        pool.install(|| generate_games_with_progress(&params, || pb.inc(1)))?;
    pb.finish_and_clear();

    let summary = summarize(&games);
    println!("games: {}  X wins: {}  O wins: {}  draws: {}", summary.games, summary.x_wins, summary.o_wins, summary.draws);

    if let Some(path) = a.json_out {
        let payload = serde_json::json!({ "params": params, "summary": summary, "games": games });
        std::fs::write(&path, serde_json::to_string_pretty(&payload)?)?;
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}
