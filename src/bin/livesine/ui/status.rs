//! Status bar widget - frequency, phase mode, sample rate and output levels

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use live_sine::PhaseMode;

use super::StatusUpdate;

/// Audio statistics for display
pub struct AudioStats {
    pub peak: f32,
    pub rms: f32,
}

impl AudioStats {
    pub fn from_buffer(buffer: &[f32]) -> Self {
        if buffer.is_empty() {
            return Self { peak: 0.0, rms: 0.0 };
        }
        let peak = buffer.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
        let rms = (buffer.iter().map(|&x| x * x).sum::<f32>() / buffer.len() as f32).sqrt();
        Self { peak, rms }
    }
}

pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    status: &StatusUpdate,
    sample_rate: f64,
    stats: &AudioStats,
    last_error: Option<&str>,
) {
    let block = Block::default().title(" livesine ").borders(Borders::ALL);

    let mode_color = match status.phase_mode {
        PhaseMode::Unbounded => Color::Yellow,
        PhaseMode::Wrapped => Color::Green,
    };

    let mut spans = vec![
        Span::styled(
            format!(" {:.2} Hz  ", status.frequency),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("phase: {}  ", status.phase_mode.as_str()),
            Style::default().fg(mode_color),
        ),
        Span::styled(
            format!("{:.3e} rad  ", status.phase),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{:.1}kHz  ", sample_rate / 1000.0),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("Peak: {:.2}  RMS: {:.2}", stats.peak, stats.rms),
            Style::default().fg(Color::Magenta),
        ),
    ];
    if let Some(err) = last_error {
        spans.push(Span::styled(
            format!("  {err}"),
            Style::default().fg(Color::Red),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
