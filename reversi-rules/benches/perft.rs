use criterion::*;

use reversi_rules::test_utils;

fn criterion_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(20);

    for depth in 1..6 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| test_utils::run_perft(black_box(depth)))
        });
    }

    group.finish();
}

fn criterion_legal_moves(c: &mut Criterion) {
    let game = test_utils::play_script("F5 D6 C3").unwrap_or_default();
    let player = game.current_player();

    c.bench_function("legal_moves", |b| {
        b.iter(|| black_box(&game).legal_moves(black_box(player)))
    });
}

criterion_group!(benches, criterion_perft, criterion_legal_moves);
criterion_main!(benches);
