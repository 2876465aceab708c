use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use lookup_table::{CollisionStrategy, HashTable};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn name(strategy: CollisionStrategy) -> &'static str {
    match strategy {
        CollisionStrategy::OpenAddressing => "open_addressing",
        CollisionStrategy::Chaining => "chaining",
    }
}

const STRATEGIES: [CollisionStrategy; 2] =
    [CollisionStrategy::OpenAddressing, CollisionStrategy::Chaining];

fn filled(strategy: CollisionStrategy, seed: u64, n: usize) -> (HashTable, Vec<String>) {
    let mut m = HashTable::with_capacity(strategy, 1_009);
    let keys: Vec<_> = lcg(seed).take(n).map(key).collect();
    for (i, k) in keys.iter().enumerate() {
        m.put(k.as_str(), i.to_string());
    }
    (m, keys)
}

fn bench_insert(c: &mut Criterion) {
    for s in STRATEGIES {
        c.bench_function(&format!("{}_insert_10k", name(s)), |b| {
            b.iter_batched(
                || HashTable::with_capacity(s, 1_009),
                |mut m| {
                    for (i, x) in lcg(1).take(10_000).enumerate() {
                        m.put(key(x), i.to_string());
                    }
                    black_box(m)
                },
                BatchSize::SmallInput,
            )
        });
    }
}

fn bench_get_hit(c: &mut Criterion) {
    for s in STRATEGIES {
        c.bench_function(&format!("{}_get_hit", name(s)), |b| {
            let (m, keys) = filled(s, 7, 20_000);
            let mut it = keys.iter().cycle();
            b.iter(|| {
                let k = it.next().unwrap();
                black_box(m.get(k).unwrap());
            })
        });
    }
}

fn bench_get_miss(c: &mut Criterion) {
    for s in STRATEGIES {
        c.bench_function(&format!("{}_get_miss", name(s)), |b| {
            let (m, _) = filled(s, 11, 10_000);
            let mut miss = lcg(0xdead_beef);
            b.iter(|| {
                // generate keys unlikely in map
                let k = key(miss.next().unwrap());
                black_box(m.get(&k));
            })
        });
    }
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_insert, bench_get_hit, bench_get_miss
}
criterion_main!(benches);
