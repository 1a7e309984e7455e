//! Benchmarks for core vector operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use vectum::Vec3;

/// Generates random non-null vectors for benchmarking.
fn generate_vectors(count: usize, seed: u64) -> Vec<Vec3> {
    let mut vectors = Vec::with_capacity(count);
    let mut state = seed;
    let next = |state: &mut u64| {
        *state ^= *state << 13;
        *state ^= *state >> 7;
        *state ^= *state << 17;
        (*state as f64 / u64::MAX as f64) * 100.0 + 1.0
    };

    for _ in 0..count {
        let x = next(&mut state);
        let y = next(&mut state);
        let z = next(&mut state);
        vectors.push(Vec3::new(x, y, z));
    }

    vectors
}

fn bench_magnitude(c: &mut Criterion) {
    let mut group = c.benchmark_group("magnitude");

    for count in [100, 1000, 10000] {
        let vectors = generate_vectors(count, 12345);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), &vectors, |b, vs| {
            b.iter(|| {
                vs.iter()
                    .map(|v| black_box(*v).magnitude())
                    .sum::<f64>()
            })
        });
    }

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for count in [100, 1000, 10000] {
        let vectors = generate_vectors(count, 23456);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), &vectors, |b, vs| {
            b.iter(|| {
                vs.iter()
                    .map(|v| black_box(*v).normalize())
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

fn bench_dot_cross(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot_cross");

    let count = 10000;
    let a = generate_vectors(count, 34567);
    let b = generate_vectors(count, 45678);
    group.throughput(Throughput::Elements(count as u64));

    group.bench_function("dot", |bench| {
        bench.iter(|| {
            a.iter()
                .zip(&b)
                .map(|(u, v)| black_box(*u).dot(*v))
                .sum::<f64>()
        })
    });

    group.bench_function("cross", |bench| {
        bench.iter(|| {
            a.iter()
                .zip(&b)
                .map(|(u, v)| black_box(*u).cross(*v))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

fn bench_rot_z(c: &mut Criterion) {
    let mut group = c.benchmark_group("rot_z");

    let vectors = generate_vectors(10000, 56789);
    group.throughput(Throughput::Elements(vectors.len() as u64));

    group.bench_function("rot_z_rad", |bench| {
        bench.iter(|| {
            vectors
                .iter()
                .map(|v| black_box(*v).rot_z_rad(0.25))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_magnitude,
    bench_normalize,
    bench_dot_cross,
    bench_rot_z
);
criterion_main!(benches);
