//! Shared state types for UI communication
//!
//! Sent from the audio callback every block, so everything here is Copy and
//! allocation-free.

use live_sine::PhaseMode;

/// Oscillator snapshot taken right after a block was rendered
#[derive(Clone, Copy, Debug)]
pub struct StatusUpdate {
    /// Frequency in Hz the audio side is actually using
    pub frequency: f64,
    /// Accumulated phase in radians
    pub phase: f64,
    pub phase_mode: PhaseMode,
}
