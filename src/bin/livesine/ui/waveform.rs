//! Triggered oscilloscope widget
//!
//! A free-running scope redraws from wherever the ring happened to end, so a
//! steady sine appears to crawl sideways. Here each frame starts on a rising
//! zero crossing and spans a whole number of cycles, so a constant pitch
//! stands still and a retune is visible as a change in cycle count.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Cycles drawn per frame
const CYCLES_SHOWN: usize = 4;
/// Narrowest window worth drawing
const MIN_WINDOW: usize = 32;

/// Samples per cycle at `frequency`, never below one.
pub fn cycle_len(sample_rate: f64, frequency: f64) -> usize {
    (sample_rate / frequency.abs().max(1.0)).round().max(1.0) as usize
}

/// Pick the slice to draw: `CYCLES_SHOWN` cycles that start on the last
/// rising zero crossing leaving enough room after it. Falls back to the tail
/// of the buffer when no crossing fits (silence, or pitch too low). The flag
/// tells whether a trigger was found.
pub fn triggered_window(samples: &[f32], cycle: usize) -> (&[f32], bool) {
    let window = (cycle * CYCLES_SHOWN).clamp(MIN_WINDOW.min(samples.len()), samples.len());
    let latest_start = samples.len() - window;

    let trigger = (1..=latest_start)
        .rev()
        .find(|&i| samples[i - 1] < 0.0 && samples[i] >= 0.0);

    let start = trigger.unwrap_or(latest_start);
    (&samples[start..start + window], trigger.is_some())
}

pub fn render_waveform(frame: &mut Frame, area: Rect, samples: &[f32], cycle: usize) {
    let (window, locked) = triggered_window(samples, cycle);

    let title = if locked {
        format!(" Scope ({CYCLES_SHOWN} cycles, triggered) ")
    } else {
        " Scope (free-running) ".to_string()
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    let len = window.len().max(1) as f64;
    let data: Vec<(f64, f64)> = window
        .iter()
        .enumerate()
        .map(|(i, &sample)| (i as f64 / len, sample as f64))
        .collect();

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(if locked { Color::Cyan } else { Color::Yellow }))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([-1.0, 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
