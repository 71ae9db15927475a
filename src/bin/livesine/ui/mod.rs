//! TUI module for livesine
//!
//! Shows what the generator is producing and turns key presses into parameter
//! changes on the controller.

mod spectrum;
pub mod state;
mod status;
mod waveform;

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    DefaultTerminal, Frame,
};
use rtrb::Consumer;
use std::time::Duration;

use live_sine::control::SineController;

pub use state::StatusUpdate;

use spectrum::{render_spectrum, SpectrumAnalyzer};
use status::{render_status, AudioStats};
use waveform::{cycle_len, render_waveform};

/// Samples kept for the scope and the FFT window
pub const VIS_BUFFER_SIZE: usize = 2048;

/// Frequency ratio of one equal-tempered semitone
const SEMITONE: f64 = 1.059_463_094_359_295_3;

pub struct UiApp {
    controller: SineController,
    audio_rx: Consumer<f32>,
    status_rx: Consumer<StatusUpdate>,
    /// Latest snapshot from the audio side
    status: StatusUpdate,
    /// Frequency last requested from the UI
    target_frequency: f64,
    sample_rate: f64,
    audio_buffer: Vec<f32>,
    spectrum: SpectrumAnalyzer,
    last_error: Option<String>,
    should_quit: bool,
}

impl UiApp {
    pub fn new(
        controller: SineController,
        audio_rx: Consumer<f32>,
        status_rx: Consumer<StatusUpdate>,
        initial: StatusUpdate,
        sample_rate: f64,
    ) -> Self {
        Self {
            controller,
            audio_rx,
            status_rx,
            status: initial,
            target_frequency: initial.frequency,
            sample_rate,
            audio_buffer: vec![0.0; VIS_BUFFER_SIZE],
            spectrum: SpectrumAnalyzer::new(VIS_BUFFER_SIZE, sample_rate as f32),
            last_error: None,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.poll_audio();
            self.poll_status();

            terminal.draw(|frame| self.render(frame))?;

            // Handle keyboard input (non-blocking, ~60fps)
            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    /// Keep the newest VIS_BUFFER_SIZE samples and re-run the analyzer
    fn poll_audio(&mut self) {
        let available = self.audio_rx.slots();
        if available == 0 {
            return;
        }

        let mut fresh = Vec::with_capacity(available);
        while let Ok(sample) = self.audio_rx.pop() {
            fresh.push(sample);
        }

        self.audio_buffer.extend(fresh);
        if self.audio_buffer.len() > VIS_BUFFER_SIZE {
            let excess = self.audio_buffer.len() - VIS_BUFFER_SIZE;
            self.audio_buffer.drain(0..excess);
        }
        self.spectrum.update(&self.audio_buffer);
    }

    fn poll_status(&mut self) {
        while let Ok(status) = self.status_rx.pop() {
            self.status = status;
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        let result = match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                Ok(())
            }
            KeyCode::Up => self.retune(self.target_frequency * SEMITONE),
            KeyCode::Down => self.retune(self.target_frequency / SEMITONE),
            KeyCode::Right => self.retune(self.target_frequency + 1.0),
            KeyCode::Left => self.retune(self.target_frequency - 1.0),
            KeyCode::Char('w') | KeyCode::Char('W') => self
                .controller
                .set_phase_mode(self.status.phase_mode.toggled()),
            _ => Ok(()),
        };

        self.last_error = result.err().map(|err| err.to_string());
    }

    fn retune(&mut self, frequency: f64) -> Result<(), live_sine::ControlError> {
        let frequency = frequency.clamp(1.0, self.sample_rate / 2.0);
        self.controller.set_frequency(frequency)?;
        self.target_frequency = frequency;
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status bar
                Constraint::Min(8),    // Waveform
                Constraint::Min(8),    // Spectrum
                Constraint::Length(1), // Help bar
            ])
            .split(frame.area());

        let stats = AudioStats::from_buffer(&self.audio_buffer);
        render_status(
            frame,
            chunks[0],
            &self.status,
            self.sample_rate,
            &stats,
            self.last_error.as_deref(),
        );

        let cycle = cycle_len(self.sample_rate, self.status.frequency);
        render_waveform(frame, chunks[1], &self.audio_buffer, cycle);

        render_spectrum(frame, chunks[2], &self.spectrum);

        let help = Paragraph::new(" [↑/↓] Semitone  [←/→] 1 Hz  [W] Phase mode  [Q] Quit")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}
