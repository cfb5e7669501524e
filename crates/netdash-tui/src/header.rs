//! Dashboard header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the header: title, session uptime, poll interval, device summary.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    uptime: &str,
    interval_secs: u64,
    healthy: usize,
    total: usize,
) {
    let theme = ColorTheme::default();
    let devices = if total == 0 {
        "no devices".to_string()
    } else {
        format!("{healthy}/{total} healthy")
    };

    let text = vec![Line::from(vec![
        Span::styled("NetDash", theme.header_style()),
        Span::raw(format!(
            " | up {uptime} | poll {interval_secs}s | {devices}"
        )),
    ])];

    let block = Block::default().borders(Borders::BOTTOM);
    frame.render_widget(Paragraph::new(text).block(block), area);
}
