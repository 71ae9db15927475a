#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::{DEFAULT_FREQUENCY, DEFAULT_SAMPLE_RATE};

/*
Phase Accumulation
==================

A digital oscillator keeps a running "phase": its position in the waveform
cycle. Every sample the phase moves forward by a fixed step, and the output is
the waveform evaluated at the new phase.

For a sine measured in radians, one full cycle is 2π, so a tone of `f` Hz at
sample rate `r` has to cover `f` cycles every `r` samples:

    increment = f * 2π / r

    220 Hz @ 44100 Hz:  increment = 0.031344... rad/sample
                        one cycle = 44100 / 220 ≈ 200.45 samples

The step is taken BEFORE the sample is evaluated, so the first sample out of a
fresh oscillator is sin(increment), not sin(0).

Unbounded vs Wrapped
--------------------

Unbounded (default): the phase is a plain running total. Output is bit-for-bit
reproducible against any other implementation that does the same sum, but a
64-bit float only has ~15-16 significant digits. After hours of runtime the
accumulator is large and each small increment loses low bits, so pitch drifts
very slightly.

    1 hour @ 44.1 kHz, 220 Hz:  phase ≈ 5.0e6 rad
    ulp at 5.0e6             ≈ 9.3e-10 rad  (still inaudible)

Wrapped: after each step the phase is reduced into [0, 2π). The accumulator
stays small forever, at the cost of no longer matching the unbounded sequence
exactly (the two agree to within float rounding of the reduction).

    phase = (phase + increment) mod 2π

Negative frequencies run the cycle backwards; the reduction uses a Euclidean
remainder so a wrapped phase never goes negative.
*/

/// How the phase accumulator handles growth over time.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhaseMode {
    /// Running total, never reduced.
    #[default]
    Unbounded,
    /// Reduced into `[0, 2π)` after every step.
    Wrapped,
}

impl PhaseMode {
    pub fn toggled(self) -> Self {
        match self {
            PhaseMode::Unbounded => PhaseMode::Wrapped,
            PhaseMode::Wrapped => PhaseMode::Unbounded,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PhaseMode::Unbounded => "unbounded",
            PhaseMode::Wrapped => "wrapped",
        }
    }
}

/// Radians the phase advances per sample.
#[inline]
pub fn phase_increment(frequency: f64, sample_rate: f64) -> f64 {
    frequency * TAU / sample_rate
}

/// Reduce a phase into `[0, 2π)`.
///
/// `rem_euclid` of a tiny negative value rounds up to exactly 2π, so that
/// case is folded back to 0.
#[inline]
pub fn wrap_phase(phase: f64) -> f64 {
    let wrapped = phase.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Sine oscillator with an explicit phase accumulator.
#[derive(Debug, Clone)]
pub struct SineOscillator {
    /// Current phase in radians
    phase: f64,
    /// Frequency in Hz
    frequency: f64,
    sample_rate: f64,
    /// Cached `frequency * 2π / sample_rate`
    increment: f64,
    phase_mode: PhaseMode,
}

impl SineOscillator {
    pub fn new(frequency: f64, sample_rate: f64) -> Self {
        Self {
            phase: 0.0,
            frequency,
            sample_rate,
            increment: phase_increment(frequency, sample_rate),
            phase_mode: PhaseMode::Unbounded,
        }
    }

    pub fn with_phase_mode(mut self, mode: PhaseMode) -> Self {
        self.set_phase_mode(mode);
        self
    }

    /// Advance the phase one step and return the sine of the new phase.
    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        self.phase += self.increment;
        if self.phase_mode == PhaseMode::Wrapped && !(0.0..TAU).contains(&self.phase) {
            self.phase = wrap_phase(self.phase);
        }
        self.phase.sin() as f32
    }

    /// Fill a mono block with consecutive samples.
    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.next_sample();
        }
    }

    /// Change pitch between calls. Phase is left untouched so the waveform
    /// stays continuous.
    pub fn set_frequency(&mut self, frequency: f64) {
        self.frequency = frequency;
        self.increment = phase_increment(frequency, self.sample_rate);
    }

    /// Switching to `Wrapped` reduces the current phase immediately.
    pub fn set_phase_mode(&mut self, mode: PhaseMode) {
        self.phase_mode = mode;
        if mode == PhaseMode::Wrapped {
            self.phase = wrap_phase(self.phase);
        }
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn phase_increment(&self) -> f64 {
        self.increment
    }

    pub fn phase_mode(&self) -> PhaseMode {
        self.phase_mode
    }
}

impl Default for SineOscillator {
    fn default() -> Self {
        Self::new(DEFAULT_FREQUENCY, DEFAULT_SAMPLE_RATE)
    }
}
