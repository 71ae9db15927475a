//! Benchmarks for the interleaved host fill.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use live_sine::{control::live_sine, SampleProducer, SineConfig, SineNode};

use crate::BLOCK_SIZES;

pub fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph/fill");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size * 2];

        // Stereo through the concrete node
        let mut node = SineNode::default();
        group.bench_with_input(BenchmarkId::new("stereo", size), &size, |b, &frames| {
            b.iter(|| {
                node.fill_buffer(black_box(&mut buffer), frames, 2);
            })
        });

        // Stereo through a trait object, as a host holding Box<dyn> would
        let mut boxed: Box<dyn SampleProducer> = Box::new(SineNode::default());
        group.bench_with_input(BenchmarkId::new("stereo_dyn", size), &size, |b, &frames| {
            b.iter(|| {
                boxed.fill_buffer(black_box(&mut buffer), frames, 2);
            })
        });

        // Controlled node with an empty queue (drain cost only)
        let (_controller, mut live) =
            live_sine(&SineConfig::default(), 64).expect("default config is valid");
        group.bench_with_input(BenchmarkId::new("stereo_live", size), &size, |b, &frames| {
            b.iter(|| {
                live.fill_buffer(black_box(&mut buffer), frames, 2);
            })
        });
    }

    group.finish();
}
