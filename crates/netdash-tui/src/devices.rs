//! Device status table.

use netdash_core::DeviceReport;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the device status table.
pub fn render_devices(frame: &mut Frame, area: Rect, reports: &[DeviceReport]) {
    let theme = ColorTheme::default();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Devices ")
        .border_style(Style::default().fg(Color::DarkGray));

    if reports.is_empty() {
        let placeholder = Paragraph::new("no devices configured")
            .style(theme.muted_style())
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let header = Row::new(vec!["Name", "Endpoint", "Status", "RTT"])
        .style(Style::default().fg(Color::Gray));

    let rows: Vec<Row> = reports
        .iter()
        .map(|report| {
            let rtt = report
                .response_ms
                .map_or_else(|| "-".to_string(), |ms| format!("{ms} ms"));
            Row::new(vec![
                Cell::from(report.name.clone()),
                Cell::from(report.endpoint.clone()),
                Cell::from(report.status.to_string())
                    .style(theme.status_style(report.status)),
                Cell::from(rtt),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(15),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}
