use pcg_scalar::rng::{Pcg32, crypto_random_scalar};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_random_scalar(c: &mut Criterion) {
    let mut rng = Pcg32::from_state(0x853c_49e6_748f_ea9b);

    c.bench_function("pcg32 random_scalar", |b| {
        b.iter(|| black_box(rng.random_scalar()))
    });
}

pub fn bench_crypto_random_scalar(c: &mut Criterion) {
    c.bench_function("os crypto_random_scalar", |b| {
        b.iter(|| black_box(crypto_random_scalar().unwrap()))
    });
}

criterion_group!(benches, bench_random_scalar, bench_crypto_random_scalar);
criterion_main!(benches);
