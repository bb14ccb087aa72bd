//! Criterion micro-benchmarks for the three gather tiers.

use criterion::{criterion_group, criterion_main, Criterion};
use strided_bench::{narrow_profile, reference_profile, stress_profile, GatherProfile};
use strided_core::RecordsMut;
use strided_gather::{gather_unchecked, gather_unique, gather_unique_alloc, validate_unique};

fn bench_tiers(c: &mut Criterion, label: &str, profile: &GatherProfile) {
    let source = profile.records();
    let indices = &profile.indices;

    c.bench_function(&format!("gather_unchecked_{label}"), |b| {
        let mut dest = profile.dest();
        b.iter(|| {
            let mut dst = RecordsMut::new(&mut dest, indices.len(), profile.dimension).unwrap();
            gather_unchecked(source, &mut dst, indices);
            std::hint::black_box(&dest);
        });
    });

    c.bench_function(&format!("gather_unique_{label}"), |b| {
        let mut dest = profile.dest();
        b.iter(|| {
            let mut dst = RecordsMut::new(&mut dest, indices.len(), profile.dimension).unwrap();
            gather_unique(source, &mut dst, indices).unwrap();
            std::hint::black_box(&dest);
        });
    });

    c.bench_function(&format!("gather_unique_alloc_{label}"), |b| {
        b.iter(|| {
            let buf = gather_unique_alloc(source, indices).unwrap();
            std::hint::black_box(buf);
        });
    });

    c.bench_function(&format!("validate_unique_{label}"), |b| {
        b.iter(|| {
            validate_unique(profile.from_count, indices).unwrap();
        });
    });
}

/// Benchmark: 10K×16 source, 1K records gathered.
fn bench_reference(c: &mut Criterion) {
    bench_tiers(c, "reference", &reference_profile(42));
}

/// Benchmark: 100K×64 source, 25K records gathered.
fn bench_stress(c: &mut Criterion) {
    bench_tiers(c, "stress", &stress_profile(42));
}

/// Benchmark: 100K scalar records, 50K gathered.
fn bench_narrow(c: &mut Criterion) {
    bench_tiers(c, "narrow", &narrow_profile(42));
}

criterion_group!(benches, bench_reference, bench_stress, bench_narrow);
criterion_main!(benches);
