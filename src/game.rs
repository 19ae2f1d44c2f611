use std::fmt;
use std::str::FromStr;

use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Mark};
use crate::error::{EngineError, Result};
use crate::rules::{evaluate, Outcome};
use crate::select::{select_move, Difficulty};

/// The side played by the bot in [`Mode::Bot`].
pub const BOT_MARK: Mark = Mark::MAXIMIZER;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Human plays X, the bot plays O.
    #[default]
    Bot,
    /// Two humans share the board.
    Friends,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Bot => Mode::Friends,
            Mode::Friends => Mode::Bot,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Bot => write!(f, "Bot"),
            Mode::Friends => write!(f, "Friends"),
        }
    }
}

impl FromStr for Mode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "bot" | "ai" => Ok(Mode::Bot),
            "friends" | "pvp" => Ok(Mode::Friends),
            _ => Err(EngineError::UnknownOption { kind: "mode", value: s.to_string() }),
        }
    }
}

/// Cue for the presentation layer's audio/visual feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Place,
    Win,
    Draw,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: Mode,
    pub difficulty: Difficulty,
}

/// What a single applied move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub index: usize,
    pub mark: Mark,
    pub outcome: Outcome,
    pub feedback: Vec<Feedback>,
}

/// Session state owned by the front-end: the board, whose turn it is and
/// whether moves are still accepted.
///
/// Moves are serialized through `&mut self`, so a human move can never land
/// on the board while the bot's move is being computed.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current: Mark,
    active: bool,
    config: GameConfig,
    // Session preference; survives `reset`.
    sound: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self { board: Board::empty(), current: Mark::X, active: true, config, sound: true }
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn current(&self) -> Mark { self.current }
    pub fn is_active(&self) -> bool { self.active }
    pub fn mode(&self) -> Mode { self.config.mode }
    pub fn difficulty(&self) -> Difficulty { self.config.difficulty }
    pub fn outcome(&self) -> Outcome { evaluate(&self.board) }

    pub fn set_mode(&mut self, mode: Mode) { self.config.mode = mode; }
    pub fn set_difficulty(&mut self, difficulty: Difficulty) { self.config.difficulty = difficulty; }

    /// Whether front-ends should play feedback sounds.
    pub fn sound_on(&self) -> bool { self.sound }
    pub fn set_sound(&mut self, on: bool) { self.sound = on; }

    /// True when the automated side has to act now.
    pub fn bot_to_move(&self) -> bool {
        self.active && self.config.mode == Mode::Bot && self.current == BOT_MARK
    }

    /// Apply `index` for the side to move.
    pub fn play(&mut self, index: usize) -> Result<MoveReport> {
        if !self.active {
            return Err(EngineError::GameOver);
        }
        let mark = self.current;
        self.board.place(index, mark)?;
        let outcome = evaluate(&self.board);
        let mut feedback = vec![Feedback::Place];
        match outcome {
            Outcome::Win { mark: winner, line } => {
                self.active = false;
                feedback.push(Feedback::Win);
                info!("player {} wins on line {:?}", winner, line);
            }
            Outcome::Draw => {
                self.active = false;
                feedback.push(Feedback::Draw);
                info!("game drawn");
            }
            Outcome::Ongoing => self.current = mark.other(),
        }
        Ok(MoveReport { index, mark, outcome, feedback })
    }

    /// Human input; refused while the bot owns the turn.
    pub fn play_human(&mut self, index: usize) -> Result<MoveReport> {
        if !self.active {
            return Err(EngineError::GameOver);
        }
        if self.bot_to_move() {
            return Err(EngineError::NotYourTurn);
        }
        self.play(index)
    }

    /// Compute and apply the bot's move in one step.
    pub fn play_bot<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<MoveReport> {
        if !self.active {
            return Err(EngineError::GameOver);
        }
        if !self.bot_to_move() {
            return Err(EngineError::NotYourTurn);
        }
        let index = select_move(&self.board, self.config.difficulty, rng)?;
        self.play(index)
    }

    pub fn reset(&mut self) {
        self.board = Board::empty();
        self.current = Mark::X;
        self.active = true;
    }

    /// One-line status for the turn indicator.
    pub fn status(&self) -> String {
        match self.outcome() {
            Outcome::Win { mark, .. } => format!("Player {} Wins!", mark),
            Outcome::Draw => "It's a Draw!".to_string(),
            Outcome::Ongoing if self.bot_to_move() => "AI's turn".to_string(),
            Outcome::Ongoing => format!("Player {}'s turn", self.current),
        }
    }
}
