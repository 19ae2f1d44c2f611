use anyhow::Result;
use chrono::{Local, Utc};
use clap::Parser;
use gridbot::game::{Feedback, Game, GameConfig, Mode, MoveReport};
use gridbot::scores::{ScoreBook, HISTORY_VIEW};
use gridbot::select::Difficulty;
use gridbot::store::JsonFileStore;
use gridbot::Outcome;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play 3x3 noughts and crosses against the bot or a friend", long_about = None)]
struct Args {
    /// Opponent: 'bot' (you play X, the bot plays O) or 'friends'
    #[arg(long, default_value = "bot")]
    mode: Mode,

    /// Bot strength: 'easy' or 'hard'
    #[arg(long, default_value = "hard")]
    difficulty: Difficulty,

    /// Seed for the easy bot; random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Where scores and match history are kept
    #[arg(long, default_value = "gridbot_scores.json")]
    store: PathBuf,

    /// Pause before the bot's move is shown, in milliseconds
    #[arg(long, default_value_t = 200)]
    bot_delay_ms: u64,

    /// Start with the terminal bell off (`b` toggles it at runtime)
    #[arg(long)]
    mute: bool,
}

fn print_board(game: &Game) {
    let board = game.board();
    println!();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let idx = row * 3 + col;
                match board.get(idx) {
                    Some(m) => m.to_string(),
                    None => (idx + 1).to_string(),
                }
            })
            .collect();
        println!(" {} ", cells.join(" | "));
        if row < 2 { println!("---+---+---"); }
    }
    println!();
}

fn print_scores(book: &ScoreBook<JsonFileStore>, game: &Game) {
    let t = book.tally();
    println!("{} - {}   X: {}  O: {}  Draws: {}", game.mode(), game.difficulty(), t.x, t.o, t.draws);
    let recent = book.history().recent(HISTORY_VIEW);
    if recent.is_empty() {
        println!("No matches played yet.");
    }
    for e in recent {
        println!("  {:<16} {}", e.text, e.time.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S"));
    }
}

fn print_help() {
    println!("1-9: place mark   r: new game   m: toggle mode   d: toggle difficulty");
    println!("s: scores/history   c: clear history   z: reset scores   b: sound on/off   q: quit");
}

fn announce(report: &MoveReport, book: &mut ScoreBook<JsonFileStore>, sound: bool) -> Result<()> {
    if sound && report.feedback.contains(&Feedback::Place) {
        print!("\x07");
    }
    match report.outcome {
        Outcome::Win { mark, line } => {
            let cells: Vec<String> = line.iter().map(|i| (i + 1).to_string()).collect();
            println!("Player {} Wins! ({})", mark, cells.join("-"));
        }
        Outcome::Draw => println!("It's a Draw!"),
        Outcome::Ongoing => return Ok(()),
    }
    book.record_result(&report.outcome, Utc::now())?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_entropy(),
    };
    let mut book = ScoreBook::load(JsonFileStore::open(&args.store)?)?;
    let mut game = Game::new(GameConfig { mode: args.mode, difficulty: args.difficulty });
    game.set_sound(!args.mute);

    print_help();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print_board(&game);
        println!("{}", game.status());

        if game.bot_to_move() {
            // Input is not read until the bot's move has been applied.
            thread::sleep(Duration::from_millis(args.bot_delay_ms));
            let report = game.play_bot(&mut rng)?;
            println!("Bot plays {}", report.index + 1);
            announce(&report, &mut book, game.sound_on())?;
            continue;
        }

        print!("> ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(l) => l?,
            None => break,
        };
        let input = line.trim();
        match input {
            "" => continue,
            "q" | "quit" => break,
            "h" | "help" | "?" => print_help(),
            "r" => game.reset(),
            "m" => {
                game.set_mode(game.mode().toggled());
                println!("Mode: {}", game.mode());
            }
            "d" => {
                game.set_difficulty(game.difficulty().toggled());
                println!("Difficulty: {}", game.difficulty());
            }
            "s" => print_scores(&book, &game),
            "c" => {
                book.clear_history()?;
                println!("History cleared.");
            }
            "z" => {
                book.reset_scores()?;
                println!("Scores reset.");
            }
            "b" => {
                game.set_sound(!game.sound_on());
                println!("Sound: {}", if game.sound_on() { "on" } else { "off" });
            }
            _ => match input.parse::<usize>() {
                Ok(n) if (1..=9).contains(&n) => match game.play_human(n - 1) {
                    Ok(report) => announce(&report, &mut book, game.sound_on())?,
                    Err(e) => println!("{}", e),
                },
                _ => println!("Unknown input '{}'; type 'h' for help", input),
            },
        }
    }

    println!("Thanks for playing!");
    Ok(())
}
