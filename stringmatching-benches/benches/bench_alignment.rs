use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{distributions::Alphanumeric, Rng};

use stringmatching::distance::{Affine, NeedlemanWunsch, SmithWaterman};
use stringmatching::SequenceMeasure;

fn generate(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn bench_measure<M: SequenceMeasure>(c: &mut Criterion, name: &str, measure: &M) {
    let mut group = c.benchmark_group(name);

    for i in (2..128).step_by(4) {
        let s1 = generate(i);
        let s2 = generate(i);

        group.bench_with_input(BenchmarkId::new("stringmatching", i), &(&s1, &s2), |b, val| {
            b.iter(|| {
                black_box(measure.raw_score(val.0, val.1));
            })
        });
    }

    group.finish();
}

fn benchmark(c: &mut Criterion) {
    bench_measure(c, "NeedlemanWunsch", &NeedlemanWunsch::new());
    bench_measure(c, "SmithWaterman", &SmithWaterman::new());
    bench_measure(c, "Affine", &Affine::new());
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
