use std::ops::{Deref, DerefMut};

use log::debug;
use rayon::prelude::*;

use crate::board::{Board, Mark};
use crate::rules::{evaluate, legal_moves};
use crate::search::eval::{terminal_score, SCORE_INF};

#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    /// Alpha-beta cutoffs. Disabling gives plain minimax over the full tree.
    pub pruning: bool,
    /// Root-split worker count; each root move is searched on its own copy.
    pub threads: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { pruning: true, threads: 1 }
    }
}

/// Chosen cell and its score for the maximizing side (O).
///
/// `best` is `None` only for terminal boards.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best: Option<usize>,
    pub score: i32,
}

/// A mark placed for the lifetime of the guard. Dropping it clears the cell,
/// so the board is restored on every exit path, cutoffs included.
struct Placed<'a> {
    board: &'a mut Board,
    idx: usize,
}

impl<'a> Placed<'a> {
    fn new(board: &'a mut Board, idx: usize, mark: Mark) -> Self {
        board.set(idx, Some(mark));
        Self { board, idx }
    }
}

impl Deref for Placed<'_> {
    type Target = Board;
    fn deref(&self) -> &Board { self.board }
}

impl DerefMut for Placed<'_> {
    fn deref_mut(&mut self) -> &mut Board { self.board }
}

impl Drop for Placed<'_> {
    fn drop(&mut self) { self.board.set(self.idx, None); }
}

/// Minimax searcher with fixed roles: O maximizes, X minimizes.
#[derive(Debug, Default)]
pub struct Searcher {
    params: SearchParams,
    nodes: u64,
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self {
        Self { params, nodes: 0 }
    }

    pub fn params(&self) -> SearchParams { self.params }

    /// Nodes visited since construction or the last [`Searcher::best_move`].
    pub fn nodes(&self) -> u64 { self.nodes }

    /// Full-window search from the given position for `side`.
    ///
    /// The caller's board is untouched; the walk runs on a local copy.
    pub fn best_move(&mut self, board: &Board, side: Mark) -> SearchResult {
        self.nodes = 0;
        let res = if self.params.threads > 1 {
            self.search_root_parallel(board, side)
        } else {
            let mut scratch = *board;
            self.search(&mut scratch, side, -SCORE_INF, SCORE_INF)
        };
        debug!("search side={} best={:?} score={} nodes={}", side, res.best, res.score, self.nodes);
        res
    }

    /// Alpha-beta over `board` with `side` to move.
    ///
    /// Moves are tried in ascending index order and only a strictly better
    /// score replaces the current best, so ties keep the first move found.
    /// The board is mutated in place while exploring and is identical to
    /// its input state when this returns.
    pub fn search(&mut self, board: &mut Board, side: Mark, mut alpha: i32, mut beta: i32) -> SearchResult {
        self.nodes += 1;
        if let Some(score) = terminal_score(&evaluate(board)) {
            return SearchResult { best: None, score };
        }

        let maximizing = side == Mark::MAXIMIZER;
        let mut best = None;
        let mut best_score = if maximizing { -SCORE_INF } else { SCORE_INF };

        for idx in legal_moves(board) {
            let score = {
                let mut placed = Placed::new(board, idx, side);
                self.search(&mut placed, side.other(), alpha, beta).score
            };
            if maximizing {
                if score > best_score { best_score = score; best = Some(idx); }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score { best_score = score; best = Some(idx); }
                beta = beta.min(best_score);
            }
            if self.params.pruning && beta <= alpha { break; }
        }

        SearchResult { best, score: best_score }
    }

    // Each root move gets an exact full-window score on an independent
    // board, then the ascending-order first best is kept as in `search`.
    fn search_root_parallel(&mut self, board: &Board, side: Mark) -> SearchResult {
        if let Some(score) = terminal_score(&evaluate(board)) {
            self.nodes += 1;
            return SearchResult { best: None, score };
        }
        let params = SearchParams { threads: 1, ..self.params };
        let results: Vec<(usize, i32, u64)> = legal_moves(board)
            .par_iter()
            .map(|&idx| {
                let mut child = *board;
                child.set(idx, Some(side));
                let mut w = Searcher::new(params);
                let score = w.search(&mut child, side.other(), -SCORE_INF, SCORE_INF).score;
                (idx, score, w.nodes)
            })
            .collect();

        let maximizing = side == Mark::MAXIMIZER;
        let mut best: Option<(usize, i32)> = None;
        let mut total = 1u64;
        for (idx, score, n) in results {
            total += n;
            let better = match best {
                None => true,
                Some((_, bs)) => if maximizing { score > bs } else { score < bs },
            };
            if better { best = Some((idx, score)); }
        }
        self.nodes += total;
        match best {
            Some((idx, score)) => SearchResult { best: Some(idx), score },
            None => SearchResult::default(),
        }
    }
}

/// Alpha-beta search with default parameters; see [`Searcher::search`].
pub fn search(board: &mut Board, side: Mark, alpha: i32, beta: i32) -> SearchResult {
    Searcher::default().search(board, side, alpha, beta)
}
