use criterion::{criterion_group, criterion_main, Criterion};
use poly_eval::evaluate::{Evaluate, Serial, Threaded};
use rand::prelude::SeedableRng;
use rand::Rng;
use rand_pcg::Pcg64Mcg;

fn criterion_benchmark(c: &mut Criterion) {
    let rng = &mut Pcg64Mcg::seed_from_u64(42);

    let degree = 16;
    let points = 100_000;

    let coeffs = (0..=degree).map(|_| rng.gen_range(-10.0..10.0)).collect::<Vec<f64>>();
    let xs = (0..points).map(|_| rng.gen_range(-2.0..2.0)).collect::<Vec<f64>>();

    c.bench_function("serial 100k", {
        let coeffs = coeffs.clone();
        let xs = xs.clone();
        move |b| b.iter(|| Serial.evaluate(&coeffs, &xs))
    });

    c.bench_function("threaded 100k", move |b| b.iter(|| Threaded::new().evaluate(&coeffs, &xs)));
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = criterion_benchmark,
}

criterion_main!(benches);
