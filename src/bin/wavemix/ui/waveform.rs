//! Waveform chart widget

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Render one table as a line chart over a single cycle
pub fn render_waveform(frame: &mut Frame, area: Rect, title: &str, color: Color, table: &[f32]) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL);

    // An empty source still plots as a flat line
    let data: Vec<(f64, f64)> = if table.is_empty() {
        vec![(0.0, 0.0), (1.0, 0.0)]
    } else {
        let last = (table.len() - 1).max(1) as f64;
        table
            .iter()
            .enumerate()
            .map(|(i, &sample)| (i as f64 / last, sample as f64))
            .collect()
    };

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
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
