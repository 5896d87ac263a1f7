use chain_map::ChainedHashMap;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn bench_insert_fresh_100k(c: &mut Criterion) {
    c.bench_function("chained::insert_fresh_100k", |b| {
        b.iter_batched(
            ChainedHashMap::<String, u64>::new,
            |mut m| {
                for (i, x) in lcg(1).take(100_000).enumerate() {
                    let _ = m.insert(key(x), i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_insert_reserved_100k(c: &mut Criterion) {
    c.bench_function("chained::insert_reserved_100k", |b| {
        b.iter_batched(
            || {
                let mut m = ChainedHashMap::<String, u64>::new();
                m.reserve(100_000);
                m
            },
            |mut m| {
                for (i, x) in lcg(2).take(100_000).enumerate() {
                    let _ = m.insert(key(x), i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_find_hit_10k(c: &mut Criterion) {
    c.bench_function("chained::find_hit_10k_on_100k", |b| {
        let mut m = ChainedHashMap::new();
        let keys: Vec<String> = lcg(5).take(100_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            m.insert(k.clone(), i as u64);
        }
        b.iter(|| {
            let mut hits = 0u64;
            for k in keys.iter().step_by(10) {
                if m.get(k.as_str()).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });
}

fn bench_find_miss_10k(c: &mut Criterion) {
    c.bench_function("chained::find_miss_10k_on_100k", |b| {
        let mut m = ChainedHashMap::new();
        for (i, x) in lcg(7).take(100_000).enumerate() {
            m.insert(key(x), i as u64);
        }
        let absent: Vec<String> = lcg(0xdead).take(10_000).map(|x| format!("m{x:016x}")).collect();
        b.iter(|| {
            let mut misses = 0u64;
            for k in &absent {
                if m.get(k.as_str()).is_none() {
                    misses += 1;
                }
            }
            black_box(misses)
        })
    });
}

fn bench_iterate_100k(c: &mut Criterion) {
    c.bench_function("chained::iterate_100k", |b| {
        let mut m = ChainedHashMap::new();
        for (i, x) in lcg(11).take(100_000).enumerate() {
            m.insert(key(x), i as u64);
        }
        b.iter(|| {
            let mut acc = 0u64;
            for (_, v) in m.iter() {
                acc = acc.wrapping_add(*v);
            }
            black_box(acc)
        })
    });
}

fn bench_erase_churn_10k(c: &mut Criterion) {
    c.bench_function("chained::erase_reinsert_10k_on_100k", |b| {
        b.iter_batched(
            || {
                let mut m = ChainedHashMap::new();
                let keys: Vec<String> = lcg(13).take(100_000).map(key).collect();
                for (i, k) in keys.iter().enumerate() {
                    m.insert(k.clone(), i as u64);
                }
                (m, keys)
            },
            |(mut m, keys)| {
                for k in keys.iter().step_by(10) {
                    let _ = m.remove(k.as_str());
                }
                for (i, k) in keys.iter().step_by(10).enumerate() {
                    let _ = m.insert(k.clone(), i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_rehash_100k(c: &mut Criterion) {
    c.bench_function("chained::rehash_100k", |b| {
        b.iter_batched(
            || {
                let mut m = ChainedHashMap::new();
                for (i, x) in lcg(17).take(100_000).enumerate() {
                    m.insert(key(x), i as u64);
                }
                m
            },
            |mut m| {
                m.rehash(m.bucket_count() * 2);
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_insert_fresh_100k,
    bench_insert_reserved_100k,
    bench_find_hit_10k,
    bench_find_miss_10k,
    bench_iterate_100k,
    bench_erase_churn_10k,
    bench_rehash_100k
);
criterion_main!(benches);
