//! Alert panel.

use netdash_core::Alert;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the alert list, newest first.
pub fn render_alerts(frame: &mut Frame, area: Rect, alerts: &[Alert]) {
    let theme = ColorTheme::default();
    let visible = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = alerts
        .iter()
        .rev()
        .take(visible)
        .map(|alert| {
            ListItem::new(Line::raw(alert.to_string()))
                .style(theme.severity_style(alert.severity))
        })
        .collect();

    let title = if alerts.is_empty() {
        " Alerts ".to_string()
    } else {
        format!(" Alerts ({}) ", alerts.len())
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(list, area);
}
