use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{distributions::Alphanumeric, Rng};

use stringmatching::distance;

fn generate(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Jaro");

    let lens = (2..128).step_by(2);

    for i in lens.clone() {
        let s1 = generate(i);
        let s2 = generate(i);

        group.bench_with_input(BenchmarkId::new("stringmatching", i), &(&s1, &s2), |b, val| {
            b.iter(|| {
                black_box(distance::jaro::similarity(val.0.bytes(), val.1.bytes()));
            })
        });
        group.bench_with_input(BenchmarkId::new("strsim", i), &(&s1, &s2), |b, val| {
            b.iter(|| {
                black_box(strsim::jaro(val.0, val.1));
            })
        });
    }

    group.finish();

    let mut group = c.benchmark_group("JaroWinkler");

    for i in lens {
        let s1 = generate(i);
        let s2 = generate(i);

        group.bench_with_input(BenchmarkId::new("stringmatching", i), &(&s1, &s2), |b, val| {
            b.iter(|| {
                black_box(distance::jaro_winkler::similarity(
                    val.0.bytes(),
                    val.1.bytes(),
                ));
            })
        });
        group.bench_with_input(BenchmarkId::new("strsim", i), &(&s1, &s2), |b, val| {
            b.iter(|| {
                black_box(strsim::jaro_winkler(val.0, val.1));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
