//! Benchmarks for sine generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use live_sine::{PhaseMode, SineOscillator};

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Unbounded - one add and one sin() per sample
        let mut osc = SineOscillator::default();
        group.bench_with_input(BenchmarkId::new("unbounded", size), &size, |b, _| {
            b.iter(|| {
                osc.render(black_box(&mut buffer));
            })
        });

        // Wrapped - range check per sample, remainder once per cycle
        let mut osc = SineOscillator::default().with_phase_mode(PhaseMode::Wrapped);
        group.bench_with_input(BenchmarkId::new("wrapped", size), &size, |b, _| {
            b.iter(|| {
                osc.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
