use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridbot::search::{SearchParams, Searcher};
use gridbot::{Board, Mark};

fn bench_search(c: &mut Criterion) {
    let empty = Board::empty();
    c.bench_function("search_empty_pruned", |ben| {
        ben.iter(|| {
            let mut s = Searcher::default();
            let r = s.best_move(black_box(&empty), Mark::X);
            black_box(r.score)
        })
    });
    c.bench_function("search_empty_unpruned", |ben| {
        ben.iter(|| {
            let mut s = Searcher::new(SearchParams { pruning: false, threads: 1 });
            let r = s.best_move(black_box(&empty), Mark::X);
            black_box(r.score)
        })
    });
    let mid: Board = "X.. .O. ..X".parse().unwrap();
    c.bench_function("search_midgame_root_parallel", |ben| {
        ben.iter(|| {
            let mut s = Searcher::new(SearchParams { pruning: true, threads: 4 });
            let r = s.best_move(black_box(&mid), Mark::O);
            black_box(r.best)
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
