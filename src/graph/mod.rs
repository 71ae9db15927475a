//! Host-facing producers built on the DSP primitives.
//!
//! A host's realtime callback only ever sees the `SampleProducer` trait; the
//! concrete nodes decide how generator output is laid out across channels.

/// The capability a host holds to request samples.
pub mod node;
/// Sine generator wired into the interleaved fill callback.
pub mod sine;
