use gridbot::{select_move, select_move_for, Board, Difficulty, Mark};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn hard_selector_blocks_and_forks() {
    let b: Board = "XX. .O. ..O".parse().unwrap();
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(select_move(&b, Difficulty::Hard, &mut rng).unwrap(), 2);
}

#[test]
fn hard_selector_ignores_the_rng() {
    let b: Board = "X.. ... ...".parse().unwrap();
    let picks: Vec<usize> = (0..5)
        .map(|seed| select_move(&b, Difficulty::Hard, &mut SmallRng::seed_from_u64(seed)).unwrap())
        .collect();
    assert_eq!(picks, vec![4; 5]);
}

#[test]
fn easy_selector_covers_all_cells_roughly_uniformly() {
    let b = Board::empty();
    let mut rng = SmallRng::seed_from_u64(0x5EED);
    let mut counts = [0usize; 9];
    for _ in 0..1000 {
        counts[select_move(&b, Difficulty::Easy, &mut rng).unwrap()] += 1;
    }
    // Expected ~111 per cell; the band is about five standard deviations.
    for (i, &n) in counts.iter().enumerate() {
        assert!((60..=165).contains(&n), "cell {i} drawn {n} times: {counts:?}");
    }
}

#[test]
fn easy_selector_only_returns_empty_cells() {
    let b: Board = "XOX .O. X..".parse().unwrap();
    let mut rng = SmallRng::seed_from_u64(9);
    for _ in 0..200 {
        let idx = select_move_for(&b, Mark::O, Difficulty::Easy, &mut rng).unwrap();
        assert!([3, 5, 7, 8].contains(&idx));
    }
}
