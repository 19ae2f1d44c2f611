use gridbot::perft::reachable_positions;
use gridbot::search::eval::SCORE_INF;
use gridbot::{evaluate, legal_moves, Mark, SearchParams, Searcher};

// Pruning must not change the root move or score anywhere in the game.
#[test]
fn pruned_search_matches_plain_minimax_on_every_reachable_position() {
    let mut pruned = Searcher::default();
    let mut plain = Searcher::new(SearchParams { pruning: false, threads: 1 });
    let mut checked = 0;
    for b in reachable_positions() {
        if evaluate(&b).is_terminal() { continue; }
        let side = b.side_to_move();
        let a = pruned.best_move(&b, side);
        let c = plain.best_move(&b, side);
        assert_eq!(a, c, "mismatch on\n{b}");
        checked += 1;
    }
    assert_eq!(checked, 4520);
}

#[test]
fn chosen_move_keeps_the_game_theoretic_value() {
    let mut plain = Searcher::new(SearchParams { pruning: false, threads: 1 });
    for b in reachable_positions() {
        if evaluate(&b).is_terminal() { continue; }
        let side = b.side_to_move();
        let root = Searcher::default().best_move(&b, side);
        let idx = root.best.expect("ongoing board must yield a move");
        assert!(legal_moves(&b).contains(&idx));

        let mut child = b;
        child.place(idx, side).unwrap();
        let mut scratch = child;
        let child_value = plain.search(&mut scratch, side.other(), -SCORE_INF, SCORE_INF).score;
        assert_eq!(child_value, root.score, "chosen move {idx} is not optimal on\n{b}");

        // No other move does better for the side to move.
        for other in legal_moves(&b) {
            let mut alt = b;
            alt.place(other, side).unwrap();
            let v = plain.search(&mut alt, side.other(), -SCORE_INF, SCORE_INF).score;
            if side == Mark::O { assert!(v <= root.score) } else { assert!(v >= root.score) }
        }
    }
}
