use thiserror::Error;

/// Errors surfaced by the engine, the game session and the score store.
///
/// Board and selector variants are precondition violations: they only occur
/// when a caller hands the engine input that normal play never produces.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("board must have 9 cells, got {len}")]
    MalformedBoard { len: usize },
    #[error("invalid mark character {0:?}")]
    InvalidMark(char),
    #[error("invalid cell value {0} (expected 0, 1 or 2)")]
    InvalidCellValue(u8),
    #[error("cell index {0} is out of range")]
    OutOfRange(usize),
    #[error("cell {0} is already occupied")]
    CellOccupied(usize),
    #[error("no legal moves left on the board")]
    NoLegalMoves,
    #[error("the game is already over")]
    GameOver,
    #[error("it is not your turn")]
    NotYourTurn,
    #[error("unknown {kind}: {value:?}")]
    UnknownOption { kind: &'static str, value: String },
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
