//! Live metric charts drawn from series snapshots.
//!
//! The chart widgets are pure consumers: each frame they replace their
//! displayed arrays with the channel's current snapshot and never
//! touch the store.

use netdash_core::{Channel, SeriesSnapshot};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Sparkline};
use ratatui::Frame;

/// Render one channel's snapshot as a line chart.
#[allow(clippy::cast_precision_loss)]
pub fn render_metric_chart(
    frame: &mut Frame,
    area: Rect,
    channel: Channel,
    snapshot: &SeriesSnapshot,
    window: usize,
) {
    let points: Vec<(f64, f64)> = snapshot
        .values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect();

    let y_max = if channel.is_percentage() {
        100.0
    } else {
        headroom(&snapshot.values)
    };

    let x_labels: Vec<Span> = match (snapshot.labels.first(), snapshot.labels.last()) {
        (Some(first), Some(last)) if snapshot.len() > 1 => {
            vec![Span::raw(first.clone()), Span::raw(last.clone())]
        }
        (Some(only), _) => vec![Span::raw(only.clone())],
        _ => Vec::new(),
    };

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", channel.title())),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, window.saturating_sub(1).max(1) as f64])
                .labels(x_labels)
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, y_max])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{y_max:.0}")),
                ])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}

/// Render a channel's snapshot as a compact sparkline.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn render_metric_sparkline(
    frame: &mut Frame,
    area: Rect,
    channel: Channel,
    snapshot: &SeriesSnapshot,
) {
    let scaled: Vec<u64> = snapshot
        .values
        .iter()
        .map(|&v| (v.max(0.0) * 100.0) as u64)
        .collect();

    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", channel.title())),
        )
        .data(&scaled)
        .style(Style::default().fg(Color::Yellow));

    frame.render_widget(sparkline, area);
}

/// Y-axis upper bound with 10% headroom above the observed maximum.
fn headroom(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(0.0f64, f64::max);
    if max <= 0.0 {
        1.0
    } else {
        max * 1.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn snapshot(values: &[f64]) -> SeriesSnapshot {
        SeriesSnapshot {
            labels: (0..values.len()).map(|i| format!("00:{i:02}")).collect(),
            values: values.to_vec(),
        }
    }

    fn draw_chart(channel: Channel, snap: &SeriesSnapshot) {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_metric_chart(frame, area, channel, snap, 20);
            })
            .unwrap();
    }

    #[test]
    fn chart_renders_empty_snapshot() {
        draw_chart(Channel::Cpu, &SeriesSnapshot::default());
    }

    #[test]
    fn chart_renders_single_point() {
        draw_chart(Channel::Cpu, &snapshot(&[42.0]));
    }

    #[test]
    fn chart_renders_full_window() {
        let values: Vec<f64> = (0..20).map(|i| f64::from(i) * 5.0).collect();
        draw_chart(Channel::Memory, &snapshot(&values));
    }

    #[test]
    fn chart_renders_non_percentage_channel() {
        draw_chart(Channel::NetworkIn, &snapshot(&[0.0, 1024.0, 512.0]));
    }

    #[test]
    fn chart_title_contains_channel_name() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let snap = snapshot(&[10.0, 20.0]);
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_metric_chart(frame, area, Channel::Cpu, &snap, 20);
            })
            .unwrap();

        let row0: String = (0..buf.area.width)
            .map(|x| buf.buffer[(x, 0)].symbol().to_string())
            .collect();
        assert!(row0.contains("CPU"));
    }

    #[test]
    fn sparkline_renders() {
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let snap = snapshot(&[1.0, 2.0, 3.0]);
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_metric_sparkline(frame, area, Channel::NetworkOut, &snap);
            })
            .unwrap();
    }

    #[test]
    fn sparkline_renders_empty() {
        let backend = TestBackend::new(40, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_metric_sparkline(frame, area, Channel::NetworkIn, &SeriesSnapshot::default());
            })
            .unwrap();
    }

    #[test]
    fn headroom_scales_above_max() {
        assert!(headroom(&[10.0, 50.0]) > 50.0);
    }

    #[test]
    fn headroom_of_empty_is_positive() {
        assert!(headroom(&[]) > 0.0);
    }
}
