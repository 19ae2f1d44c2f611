use crate::board::Mark;
use crate::rules::Outcome;

// Fixed terminal scores from the maximizing side's perspective. No depth
// discount: a win in one ply scores the same as a win in five.
pub const WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Unbounded window edge used for the root call.
pub const SCORE_INF: i32 = i32::MAX;

/// Score of a finished game, `None` while it is still going.
pub fn terminal_score(outcome: &Outcome) -> Option<i32> {
    match outcome {
        Outcome::Ongoing => None,
        Outcome::Draw => Some(DRAW_SCORE),
        Outcome::Win { mark, .. } if *mark == Mark::MAXIMIZER => Some(WIN_SCORE),
        Outcome::Win { .. } => Some(LOSS_SCORE),
    }
}
