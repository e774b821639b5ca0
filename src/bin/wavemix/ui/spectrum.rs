//! Harmonic spectrum widget
//!
//! Shows the normalized per-harmonic magnitudes the spectral mixer works
//! with, for whichever table is being auditioned.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use super::state::SPECTRUM_FLOOR_DB;

/// Render the spectrum: x = harmonic number, y = magnitude in dB
pub fn render_spectrum(frame: &mut Frame, area: Rect, title: &str, spectrum: &[(f64, f64)]) {
    let block = Block::default()
        .title(format!(" Spectrum: {title} "))
        .borders(Borders::ALL);

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Bar)
        .style(Style::default().fg(Color::Green))
        .data(spectrum);

    let max_harmonic = spectrum
        .iter()
        .map(|(h, _)| *h)
        .fold(1.0, f64::max);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, max_harmonic + 1.0])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([SPECTRUM_FLOOR_DB, 0.0])
                .labels(vec!["-100", "-50", "0"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
