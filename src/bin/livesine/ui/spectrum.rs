//! Spectrum analyzer widget
//!
//! Windowed FFT of the latest output, drawn on log-spaced bins, plus a readout
//! of the strongest frequency so the pitch can be checked by eye.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;

/// Number of points drawn on the chart
const DISPLAY_BINS: usize = 48;
const FLOOR_DB: f64 = -120.0;

pub struct SpectrumAnalyzer {
    /// Hann window coefficients
    window: Vec<f32>,
    fft: Arc<dyn Fft<f32>>,
    scratch: Vec<Complex<f32>>,
    sample_rate: f32,
    /// FFT bin index for each display point
    display_indices: Vec<usize>,
    /// (frequency_hz, magnitude_db) per display point
    display: Vec<(f64, f64)>,
    /// Interpolated frequency of the loudest bin, if any signal
    peak_hz: Option<f64>,
}

impl SpectrumAnalyzer {
    pub fn new(fft_len: usize, sample_rate: f32) -> Self {
        let fft = FftPlanner::new().plan_fft_forward(fft_len);

        // Hann window - reduces spectral leakage
        let denom = fft_len.saturating_sub(1).max(1) as f32;
        let window = (0..fft_len)
            .map(|i| 0.5 * (1.0 - (std::f32::consts::TAU * i as f32 / denom).cos()))
            .collect();

        // 20 Hz up to Nyquist (capped at 20 kHz), evenly spaced on a log axis
        let half = (fft_len / 2).max(1);
        let max_hz = (sample_rate as f64 / 2.0).min(20_000.0).max(21.0);
        let ratio = max_hz / 20.0;
        let mut display_indices = Vec::with_capacity(DISPLAY_BINS);
        let mut display = Vec::with_capacity(DISPLAY_BINS);
        for i in 0..DISPLAY_BINS {
            let t = i as f64 / (DISPLAY_BINS - 1) as f64;
            let hz = 20.0 * ratio.powf(t);
            let index = (hz * fft_len as f64 / sample_rate as f64).round() as usize;
            display_indices.push(index.min(half - 1));
            display.push((hz, FLOOR_DB));
        }

        Self {
            window,
            fft,
            scratch: vec![Complex::new(0.0, 0.0); fft_len],
            sample_rate,
            display_indices,
            display,
            peak_hz: None,
        }
    }

    /// Analyze one window of samples. Ignored unless it matches the FFT size.
    pub fn update(&mut self, samples: &[f32]) {
        if samples.len() != self.window.len() {
            return;
        }

        for ((bin, &sample), &w) in self.scratch.iter_mut().zip(samples).zip(&self.window) {
            *bin = Complex::new(sample * w, 0.0);
        }
        self.fft.process(&mut self.scratch);

        let half = (self.scratch.len() / 2).max(1);
        for ((_, db), &index) in self.display.iter_mut().zip(&self.display_indices) {
            *db = power_db(self.scratch[index]);
        }

        self.peak_hz = self.find_peak(half);
    }

    pub fn data(&self) -> &[(f64, f64)] {
        &self.display
    }

    pub fn peak_hz(&self) -> Option<f64> {
        self.peak_hz
    }

    /// Loudest bin above DC, refined with parabolic interpolation.
    fn find_peak(&self, half: usize) -> Option<f64> {
        let mags: Vec<f32> = self.scratch[..half].iter().map(|c| c.norm()).collect();
        let (index, &peak) = mags
            .iter()
            .enumerate()
            .skip(1)
            .max_by(|a, b| a.1.total_cmp(b.1))?;
        if peak < 1e-3 {
            return None;
        }

        let offset = if index + 1 < half {
            let (l, c, r) = (mags[index - 1], peak, mags[index + 1]);
            let denom = l - 2.0 * c + r;
            if denom.abs() > f32::EPSILON {
                0.5 * (l - r) / denom
            } else {
                0.0
            }
        } else {
            0.0
        };

        let bin_hz = self.sample_rate as f64 / self.scratch.len() as f64;
        Some((index as f64 + offset as f64) * bin_hz)
    }
}

fn power_db(bin: Complex<f32>) -> f64 {
    let power = bin.norm_sqr().max(1e-12) as f64;
    (10.0 * power.log10()).max(FLOOR_DB)
}

/// Render the spectrum analyzer widget
pub fn render_spectrum(frame: &mut Frame, area: Rect, analyzer: &SpectrumAnalyzer) {
    let title = match analyzer.peak_hz() {
        Some(hz) => format!(" Spectrum (peak {hz:.1} Hz) "),
        None => " Spectrum ".to_string(),
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    let data = analyzer.data();
    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(data);

    let max_hz = data.last().map(|(hz, _)| *hz).unwrap_or(1.0);
    let max_db = data.iter().map(|(_, db)| *db).fold(-100.0, f64::max);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, max_hz])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-100.0, max_db.max(0.0) + 10.0])
                .labels(vec!["-100", "-60", "-20", "0"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
