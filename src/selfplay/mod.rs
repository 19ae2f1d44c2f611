use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Mark};
use crate::error::Result;
use crate::rules::{evaluate, Outcome};
use crate::select::{select_move_for, Difficulty};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SelfPlayParams {
    pub games: usize,
    pub x: Difficulty,
    pub o: Difficulty,
    pub seed: u64,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 100, x: Difficulty::Hard, o: Difficulty::Hard, seed: 42 }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<usize>,
    pub winner: Option<Mark>, // None for a draw
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfPlaySummary {
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

/// Per-game seed, independent of which worker plays the game.
pub fn game_seed(base: u64, game_index: usize) -> u64 {
    base ^ (game_index as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Play one game from the empty board, X first, each side at its own level.
pub fn play_game<R: Rng + ?Sized>(x: Difficulty, o: Difficulty, rng: &mut R) -> Result<GameRecord> {
    let mut board = Board::empty();
    let mut side = Mark::X;
    let mut moves = Vec::with_capacity(9);
    loop {
        match evaluate(&board) {
            Outcome::Ongoing => {}
            Outcome::Win { mark, .. } => return Ok(GameRecord { moves, winner: Some(mark) }),
            Outcome::Draw => return Ok(GameRecord { moves, winner: None }),
        }
        let level = if side == Mark::X { x } else { o };
        let idx = select_move_for(&board, side, level, rng)?;
        board.place(idx, side)?;
        moves.push(idx);
        side = side.other();
    }
}

/// Play `params.games` games in parallel; output order and content depend
/// only on the parameters.
pub fn generate_games(params: &SelfPlayParams) -> Result<Vec<GameRecord>> {
    generate_games_with_progress(params, || {})
}

/// Same as [`generate_games`], calling `on_game` once per finished game
/// from whichever worker played it.
pub fn generate_games_with_progress<F>(params: &SelfPlayParams, on_game: F) -> Result<Vec<GameRecord>>
where
    F: Fn() + Sync + Send,
{
    (0..params.games)
        .into_par_iter()
        .map(|gi| {
            let mut rng = SmallRng::seed_from_u64(game_seed(params.seed, gi));
            let g = play_game(params.x, params.o, &mut rng);
            on_game();
            g
        })
        .collect()
}

pub fn summarize(games: &[GameRecord]) -> SelfPlaySummary {
    let mut s = SelfPlaySummary { games: games.len(), ..Default::default() };
    for g in games {
        match g.winner {
            Some(Mark::X) => s.x_wins += 1,
            Some(Mark::O) => s.o_wins += 1,
            None => s.draws += 1,
        }
    }
    s
}
