mod utils;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use planar_kernel::{Envelope, PrecisionModel};
use utils::{get_random_envelopes, get_random_sequence};

pub fn envelope_benchmark(c: &mut Criterion) {
    let bounds = Envelope::new(-1000., 1000., -1000., 1000.);
    let mut group = c.benchmark_group("envelope");

    let envelopes = get_random_envelopes(bounds, 1000, 342);
    group.bench_function("intersects", |b| {
        b.iter(|| {
            let mut hits = 0;
            for env in &envelopes {
                for other in &envelopes {
                    if black_box(env.intersects(other)) {
                        hits += 1;
                    }
                }
            }
            hits
        })
    });

    for &size in [100, 10_000].iter() {
        let seq = get_random_sequence(bounds, size, 7);
        group.bench_function(BenchmarkId::new("from_sequence", size), |b| {
            b.iter(|| black_box(Envelope::from_sequence(&seq)))
        });
        let pm = PrecisionModel::fixed(100.).unwrap();
        group.bench_function(BenchmarkId::new("make_precise", size), |b| {
            b.iter(|| {
                let mut copy = seq.clone();
                pm.make_precise_sequence(&mut copy);
                black_box(copy)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, envelope_benchmark);

criterion_main!(benches);
