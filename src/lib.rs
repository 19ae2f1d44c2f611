// 3x3 grid game engine: rules, exhaustive alpha-beta search and a
// difficulty-tiered move selector, plus the session/score glue around them.
pub mod board;
pub mod error;
pub mod game;
pub mod perft;
pub mod rules;
pub mod scores;
pub mod search;
pub mod select;
pub mod selfplay;
pub mod store;

pub use board::{Board, Mark};
pub use error::{EngineError, Result};
pub use game::{Feedback, Game, GameConfig, Mode, MoveReport};
pub use rules::{evaluate, legal_moves, Outcome, WIN_LINES};
pub use search::{search, SearchParams, SearchResult, Searcher};
pub use select::{select_move, select_move_for, Difficulty};
