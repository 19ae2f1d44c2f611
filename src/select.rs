use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Mark};
use crate::error::{EngineError, Result};
use crate::rules::{evaluate, legal_moves};
use crate::search::{SearchParams, Searcher};

/// Strength of the automated player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random legal move, no look-ahead.
    Easy,
    /// Optimal play via exhaustive search.
    #[default]
    Hard,
}

impl Difficulty {
    pub fn toggled(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "e" => Ok(Difficulty::Easy),
            "hard" | "h" => Ok(Difficulty::Hard),
            _ => Err(EngineError::UnknownOption { kind: "difficulty", value: s.to_string() }),
        }
    }
}

/// Pick the automated player's (O's) move.
///
/// Must only be called on an ongoing board. A full board yields
/// [`EngineError::NoLegalMoves`], a won board [`EngineError::GameOver`].
pub fn select_move<R: Rng + ?Sized>(board: &Board, difficulty: Difficulty, rng: &mut R) -> Result<usize> {
    select_move_for(board, Mark::MAXIMIZER, difficulty, rng)
}

/// Like [`select_move`] for an arbitrary side. X searches as the minimizer.
pub fn select_move_for<R: Rng + ?Sized>(board: &Board, side: Mark, difficulty: Difficulty, rng: &mut R) -> Result<usize> {
    let moves = legal_moves(board);
    match moves.as_slice() {
        [] => Err(EngineError::NoLegalMoves),
        _ if evaluate(board).is_terminal() => Err(EngineError::GameOver),
        [only] => Ok(*only),
        _ => match difficulty {
            Difficulty::Easy => moves.choose(rng).copied().ok_or(EngineError::NoLegalMoves),
            Difficulty::Hard => {
                let mut searcher = Searcher::new(SearchParams::default());
                let res = searcher.best_move(board, side);
                debug!("hard move for {}: {:?} (score {}, {} nodes)", side, res.best, res.score, searcher.nodes());
                res.best.ok_or(EngineError::NoLegalMoves)
            }
        },
    }
}
