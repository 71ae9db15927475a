//! LiveSineApp - audio host setup and runner

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::RingBuffer;

use live_sine::{control::live_sine, PhaseMode, SampleProducer, SineConfig};

use super::ui::{StatusUpdate, UiApp, VIS_BUFFER_SIZE};

/// Capacity in blocks for the audio→UI sample ring
const AUDIO_RING_BLOCKS: usize = 16;
/// Parameter changes that can queue up between two callbacks
const CONTROL_QUEUE_LEN: usize = 64;

/// Main application builder
pub struct LiveSineApp {
    frequency: f64,
    phase_mode: PhaseMode,
}

impl LiveSineApp {
    pub fn new() -> Self {
        Self {
            frequency: live_sine::DEFAULT_FREQUENCY,
            phase_mode: PhaseMode::Unbounded,
        }
    }

    /// Set the starting frequency in Hz
    pub fn frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Set how the phase accumulator treats long runs
    pub fn phase_mode(mut self, mode: PhaseMode) -> Self {
        self.phase_mode = mode;
        self
    }

    /// Run the application (takes over the terminal, plays audio)
    pub fn run(self) -> EyreResult<()> {
        // Set up audio
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = config.sample_rate().0 as f64;
        let channels = config.channels() as usize;

        println!("=== livesine ===");
        println!("Frequency: {} Hz", self.frequency);
        println!("Sample rate: {} Hz", sample_rate);
        println!("Channels: {}", channels);

        // Generator runs at the device rate so the pitch is what was asked for
        let sine_config = SineConfig::new()
            .with_sample_rate(sample_rate)
            .with_frequency(self.frequency)
            .with_phase_mode(self.phase_mode);
        let (controller, mut live) =
            live_sine(&sine_config, CONTROL_QUEUE_LEN).wrap_err("invalid generator settings")?;

        // --- Cross-thread rings ---
        let (mut audio_tx, audio_rx) = RingBuffer::<f32>::new(VIS_BUFFER_SIZE * AUDIO_RING_BLOCKS);
        let (mut status_tx, status_rx) = RingBuffer::<StatusUpdate>::new(32);

        let stream = device
            .build_output_stream(
                &config.into(),
                move |data: &mut [f32], _| {
                    let frames = data.len() / channels;
                    live.fill_buffer(data, frames, channels);

                    // First channel to the UI ring, non-blocking (drop on overflow)
                    for frame in data.chunks_exact(channels) {
                        if audio_tx.push(frame[0]).is_err() {
                            break;
                        }
                    }

                    let osc = live.node().oscillator();
                    let _ = status_tx.push(StatusUpdate {
                        frequency: osc.frequency(),
                        phase: osc.phase(),
                        phase_mode: osc.phase_mode(),
                    });
                },
                |err| eprintln!("Stream error: {err}"),
                None,
            )
            .wrap_err("failed to build output stream")?;

        stream.play().wrap_err("failed to start output stream")?;

        let initial = StatusUpdate {
            frequency: sine_config.frequency,
            phase: 0.0,
            phase_mode: sine_config.phase_mode,
        };
        let mut app = UiApp::new(controller, audio_rx, status_rx, initial, sample_rate);

        let mut terminal = ratatui::init();
        let res = app.run(&mut terminal);
        ratatui::restore();

        drop(stream);
        res
    }
}

impl Default for LiveSineApp {
    fn default() -> Self {
        Self::new()
    }
}
