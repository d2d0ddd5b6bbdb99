//! Trial throughput benchmarks.
//!
//! The harness's cost model is trials-per-second; these keep an eye on
//! the single-trial playout and the batched evaluation path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use goldfisher::{evaluate_deck, run_trial, Deck, NullObserver, SearchConfig};

fn bench_single_trial(c: &mut Criterion) {
    let deck = Deck::standard();
    let mut seed = 0u64;

    c.bench_function("single_trial", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            run_trial(black_box(&deck), seed, &mut NullObserver)
        })
    });
}

fn bench_deck_batch(c: &mut Criterion) {
    let deck = Deck::standard();
    let config = SearchConfig::new().with_trials(256).with_seed(1);

    c.bench_function("deck_batch_256", |b| {
        b.iter(|| evaluate_deck(black_box(&deck), &config))
    });
}

criterion_group!(benches, bench_single_trial, bench_deck_batch);
criterion_main!(benches);
