//! Benchmarks for the generator primitives.

mod fill;
mod oscillator;

pub use fill::bench_fill;
pub use oscillator::bench_oscillator;
