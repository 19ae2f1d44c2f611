use crate::board::{Board, Mark, CELLS};

/// Winning index triples: rows, then columns, then diagonals.
///
/// `evaluate` scans them in this order, so on a synthetic board with more
/// than one completed line the first one listed here is reported.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Win { mark: Mark, line: [usize; 3] },
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    pub fn winner(&self) -> Option<Mark> {
        match *self {
            Outcome::Win { mark, .. } => Some(mark),
            _ => None,
        }
    }
}

/// Terminal-state detection. Pure; derived from the board alone.
pub fn evaluate(board: &Board) -> Outcome {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Some(mark) = board.get(a) {
            if board.get(b) == Some(mark) && board.get(c) == Some(mark) {
                return Outcome::Win { mark, line };
            }
        }
    }
    if board.is_full() { Outcome::Draw } else { Outcome::Ongoing }
}

/// Empty cell indices in ascending order. Empty result means a full board.
pub fn legal_moves(board: &Board) -> Vec<usize> {
    (0..CELLS).filter(|&i| board.get(i).is_none()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn empty_board_is_ongoing_with_all_moves() {
        let board = Board::empty();
        assert_eq!(evaluate(&board), Outcome::Ongoing);
        assert_eq!(legal_moves(&board), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn detects_each_line_kind() {
        assert_eq!(evaluate(&b("XXX OO. ...")), Outcome::Win { mark: Mark::X, line: [0, 1, 2] });
        assert_eq!(evaluate(&b("OX. OX. O..")), Outcome::Win { mark: Mark::O, line: [0, 3, 6] });
        assert_eq!(evaluate(&b("X.O .XO ..X")), Outcome::Win { mark: Mark::X, line: [0, 4, 8] });
        assert_eq!(evaluate(&b("X.O XO. O..")), Outcome::Win { mark: Mark::O, line: [2, 4, 6] });
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let board = b("XOX XOO OXX");
        assert_eq!(evaluate(&board), Outcome::Draw);
        assert!(legal_moves(&board).is_empty());
    }

    #[test]
    fn win_on_last_cell_beats_draw() {
        assert_eq!(evaluate(&b("XOX OXO OXX")), Outcome::Win { mark: Mark::X, line: [0, 4, 8] });
    }

    #[test]
    fn multiple_lines_report_first_in_scan_order() {
        // Not reachable in play; column 0 and the top row are both complete.
        let board = b("XXX X.. X..");
        assert_eq!(evaluate(&board), Outcome::Win { mark: Mark::X, line: [0, 1, 2] });
        let board = b("O.. OOO O..");
        assert_eq!(evaluate(&board), Outcome::Win { mark: Mark::O, line: [3, 4, 5] });
    }
}
