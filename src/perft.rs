// Game-tree counting with in-place make/undo (no board copies per branch).
use std::collections::HashSet;

use crate::board::{Board, Mark};
use crate::rules::{evaluate, legal_moves};

/// Leaf count of the tree below `board` to `depth` plies. Finished games
/// are leaves even when depth remains.
pub fn perft(board: &mut Board, side: Mark, depth: u32) -> u64 {
    if depth == 0 || evaluate(board).is_terminal() { return 1; }
    let mut nodes = 0u64;
    for idx in legal_moves(board) {
        board.set(idx, Some(side));
        nodes += perft(board, side.other(), depth - 1);
        board.set(idx, None);
    }
    nodes
}

/// Every distinct position reachable in legal play from the empty board,
/// the empty board included.
pub fn reachable_positions() -> Vec<Board> {
    fn walk(board: &mut Board, side: Mark, seen: &mut HashSet<Board>, out: &mut Vec<Board>) {
        if !seen.insert(*board) { return; }
        out.push(*board);
        if evaluate(board).is_terminal() { return; }
        for idx in legal_moves(board) {
            board.set(idx, Some(side));
            walk(board, side.other(), seen, out);
            board.set(idx, None);
        }
    }
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    walk(&mut Board::empty(), Mark::X, &mut seen, &mut out);
    out
}
