//! Low-level DSP primitives used by the host-facing producers.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! embed directly inside a host's audio callback. They stay focused on the
//! signal math so the `graph` layer can handle buffer layout and channels.

/// Phase-accumulating sine oscillator.
pub mod oscillator;

pub use oscillator::{phase_increment, wrap_phase, PhaseMode, SineOscillator};
