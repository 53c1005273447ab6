use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use vector_deck::config::DemoConfig;
use vector_deck::search::{rank, top_k};
use vector_deck::store::PointStore;
use vector_deck::types::{Bounds, Metric, QueryPoint};

fn seeded_points(count: usize) -> PointStore {
    let mut config = DemoConfig::default();
    config.point_count = count;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let bounds = Bounds {
        width: 800.0,
        height: 500.0,
    };
    PointStore::generate(&config, bounds, &mut rng)
}

fn bench_search(c: &mut Criterion) {
    let query = QueryPoint { x: 400.0, y: 250.0 };

    // Full ranking across the three metrics at the demo's population size
    let store = seeded_points(200);
    let mut group = c.benchmark_group("rank_metrics");
    for metric in [Metric::Euclidean, Metric::Manhattan, Metric::CosineProxy] {
        group.bench_function(format!("rank_200_{}", metric), |b| {
            b.iter(|| rank(black_box(store.points()), black_box(query), black_box(metric)))
        });
    }
    group.finish();

    // Top-k selection as the population grows past demo scale
    let mut group = c.benchmark_group("top_k_scaling");
    for count in [200usize, 2_000, 20_000] {
        let store = seeded_points(count);
        group.bench_function(format!("top_k_{}", count), |b| {
            b.iter(|| {
                top_k(
                    black_box(store.points()),
                    black_box(query),
                    black_box(Metric::Euclidean),
                    black_box(5),
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
