use crate::control::message::ControlMessage;
use crate::dsp::oscillator::{PhaseMode, SineOscillator};
use crate::graph::node::{frames_that_fit, SampleProducer};

/*
Mono to Interleaved
===================

Hosts usually hand over one flat buffer with channels interleaved frame by
frame:

    index:   0   1   2   3   4   5   6   7
    slot:    L0  R0  L1  R1  L2  R2  L3  R3

The sine node generates a single mono value per frame and copies it into
every channel slot of that frame, so stereo output is centred (left == right):

    frame i  ->  buffer[i * chans .. i * chans + chans] = sample_i

The oscillator is stepped exactly once per frame, never once per slot, so the
pitch does not depend on the channel count.
*/

pub struct SineNode {
    osc: SineOscillator,
}

impl SineNode {
    pub fn new(osc: SineOscillator) -> Self {
        Self { osc }
    }

    pub fn from_freq(frequency: f64, sample_rate: f64) -> Self {
        Self::new(SineOscillator::new(frequency, sample_rate))
    }

    pub fn oscillator(&self) -> &SineOscillator {
        &self.osc
    }

    pub fn oscillator_mut(&mut self) -> &mut SineOscillator {
        &mut self.osc
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.osc.set_frequency(frequency);
    }

    pub fn set_phase_mode(&mut self, mode: PhaseMode) {
        self.osc.set_phase_mode(mode);
    }

    /// Apply one control message between blocks.
    #[inline]
    pub fn apply(&mut self, msg: ControlMessage) {
        match msg {
            ControlMessage::SetFrequency(hz) => self.osc.set_frequency(hz),
            ControlMessage::SetPhaseMode(mode) => self.osc.set_phase_mode(mode),
        }
    }
}

impl Default for SineNode {
    fn default() -> Self {
        Self::new(SineOscillator::default())
    }
}

impl SampleProducer for SineNode {
    fn fill_buffer(&mut self, buffer: &mut [f32], length: usize, num_chans: usize) -> usize {
        let frames = frames_that_fit(buffer.len(), length, num_chans);
        if frames == 0 {
            return 0;
        }
        for frame in buffer[..frames * num_chans].chunks_exact_mut(num_chans) {
            frame.fill(self.osc.next_sample());
        }
        frames
    }
}
