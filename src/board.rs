use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Number of cells on the 3x3 grid.
pub const CELLS: usize = 9;

/// A player's symbol. `X` always opens the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The side the search maximizes for; the automated player.
    pub const MAXIMIZER: Mark = Mark::O;
    /// The side the search minimizes for.
    pub const MINIMIZER: Mark = Mark::X;

    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Mark::X => 1,
            Mark::O => 2,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Row-major 3x3 grid; index 0 is top-left, 8 is bottom-right.
///
/// The board is a plain `Copy` value. Cells are only ever filled, never
/// overwritten, through [`Board::place`]; the search engine additionally
/// clears cells it filled itself while exploring a branch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Mark>; CELLS],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a board from numeric cell codes: 0 empty, 1 X, 2 O.
    pub fn from_cells(codes: &[u8]) -> Result<Self> {
        if codes.len() != CELLS {
            return Err(EngineError::MalformedBoard { len: codes.len() });
        }
        let mut board = Self::empty();
        for (i, &code) in codes.iter().enumerate() {
            board.cells[i] = match code {
                0 => None,
                1 => Some(Mark::X),
                2 => Some(Mark::O),
                other => return Err(EngineError::InvalidCellValue(other)),
            };
        }
        Ok(board)
    }

    pub fn cells(&self) -> &[Option<Mark>; CELLS] {
        &self.cells
    }

    /// Mark at `idx`. Panics if `idx >= 9`.
    pub fn get(&self, idx: usize) -> Option<Mark> {
        self.cells[idx]
    }

    pub fn is_vacant(&self, idx: usize) -> bool {
        idx < CELLS && self.cells[idx].is_none()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == Some(mark)).count()
    }

    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Side to move by mark-count parity, X moving first.
    pub fn side_to_move(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) { Mark::O } else { Mark::X }
    }

    /// Indices of non-empty cells in ascending order.
    pub fn occupied(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELLS).filter(move |&i| self.cells[i].is_some())
    }

    /// Checked placement: the cell must exist and be empty.
    pub fn place(&mut self, idx: usize, mark: Mark) -> Result<()> {
        if idx >= CELLS {
            return Err(EngineError::OutOfRange(idx));
        }
        if self.cells[idx].is_some() {
            return Err(EngineError::CellOccupied(idx));
        }
        self.cells[idx] = Some(mark);
        Ok(())
    }

    /// Unchecked write used by make/undo during tree walks.
    pub(crate) fn set(&mut self, idx: usize, cell: Option<Mark>) {
        self.cells[idx] = cell;
    }
}

impl FromStr for Board {
    type Err = EngineError;

    /// Parses `X`, `O` and `.`/`_`/`-` for empty; whitespace and `/` are
    /// separators and are skipped.
    fn from_str(s: &str) -> Result<Self> {
        let mut cells = Vec::with_capacity(CELLS);
        for ch in s.chars() {
            if ch.is_whitespace() || ch == '/' {
                continue;
            }
            cells.push(match ch {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '_' | '-' => None,
                other => return Err(EngineError::InvalidMark(other)),
            });
        }
        if cells.len() != CELLS {
            return Err(EngineError::MalformedBoard { len: cells.len() });
        }
        let mut board = Board::empty();
        board.cells.copy_from_slice(&cells);
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let line: Vec<String> = (0..3)
                .map(|col| match self.cells[row * 3 + col] {
                    Some(m) => m.to_string(),
                    None => ".".to_string(),
                })
                .collect();
            write!(f, "{}", line.join(" "))?;
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_renders_round_trip() {
        let b: Board = "XX. .O. ..O".parse().unwrap();
        assert_eq!(b.get(0), Some(Mark::X));
        assert_eq!(b.get(4), Some(Mark::O));
        assert_eq!(b.get(2), None);
        let text = b.to_string();
        assert_eq!(text, "X X .\n. O .\n. . O");
        assert_eq!(text.parse::<Board>().unwrap(), b);
    }

    #[test]
    fn rejects_wrong_length_and_bad_marks() {
        assert!(matches!("XO".parse::<Board>(), Err(EngineError::MalformedBoard { len: 2 })));
        assert!(matches!("XO.......Q".parse::<Board>(), Err(EngineError::InvalidMark('Q'))));
        assert!(matches!(Board::from_cells(&[0; 10]), Err(EngineError::MalformedBoard { len: 10 })));
        assert!(matches!(Board::from_cells(&[0, 0, 0, 0, 3, 0, 0, 0, 0]), Err(EngineError::InvalidCellValue(3))));
    }

    #[test]
    fn place_never_overwrites() {
        let mut b = Board::empty();
        b.place(4, Mark::X).unwrap();
        assert!(matches!(b.place(4, Mark::O), Err(EngineError::CellOccupied(4))));
        assert!(matches!(b.place(9, Mark::O), Err(EngineError::OutOfRange(9))));
        assert_eq!(b.get(4), Some(Mark::X));
    }

    #[test]
    fn side_to_move_follows_parity() {
        let mut b = Board::empty();
        assert_eq!(b.side_to_move(), Mark::X);
        b.place(0, Mark::X).unwrap();
        assert_eq!(b.side_to_move(), Mark::O);
        b.place(1, Mark::O).unwrap();
        assert_eq!(b.side_to_move(), Mark::X);
    }
}
