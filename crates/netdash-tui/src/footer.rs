//! Dashboard footer panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the footer with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let text = vec![Line::from(vec![
        key("q"),
        Span::raw(": quit | "),
        key("p"),
        Span::raw(": pause | "),
        key("r"),
        Span::raw(": resume | "),
        key("d"),
        Span::raw(": devices | "),
        key("l"),
        Span::raw(": log | "),
        Span::raw("arrows/PgUp/PgDn: scroll"),
    ])];

    let block = Block::default().borders(Borders::TOP);
    frame.render_widget(Paragraph::new(text).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn footer_contains_all_shortcuts() {
        let backend = TestBackend::new(100, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_footer(frame, area);
            })
            .unwrap();

        let content: String = (0..buf.area.width)
            .map(|x| buf.buffer[(x, 1)].symbol().to_string())
            .collect();
        assert!(content.contains("quit"));
        assert!(content.contains("pause"));
        assert!(content.contains("resume"));
        assert!(content.contains("devices"));
        assert!(content.contains("log"));
        assert!(content.contains("scroll"));
    }

    #[test]
    fn footer_small_area_does_not_panic() {
        let backend = TestBackend::new(20, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_footer(frame, area);
            })
            .unwrap();
    }
}
