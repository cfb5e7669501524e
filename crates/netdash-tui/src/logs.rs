//! Scrollable log panel with navigation.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

/// Scroll state for the log panel.
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// First visible line index.
    pub offset: usize,
    /// Whether auto-scroll to bottom is enabled.
    pub auto_scroll: bool,
}

impl ScrollState {
    /// Create a new scroll state pinned to the bottom.
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
        }
    }

    /// Follow a new log line when auto-scroll is enabled.
    pub fn on_new_line(&mut self, total: usize) {
        if self.auto_scroll {
            self.offset = total.saturating_sub(1);
        }
    }

    /// Account for a line evicted from the front of the log buffer.
    pub fn on_evicted_line(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    /// Scroll up by one line.
    pub fn scroll_up(&mut self) {
        self.auto_scroll = false;
        self.offset = self.offset.saturating_sub(1);
    }

    /// Scroll down by one line; reaching the bottom re-enables auto-scroll.
    pub fn scroll_down(&mut self, total: usize) {
        self.offset = (self.offset + 1).min(total.saturating_sub(1));
        if self.offset >= total.saturating_sub(1) {
            self.auto_scroll = true;
        }
    }

    /// Page up.
    pub fn page_up(&mut self, page_size: usize) {
        self.auto_scroll = false;
        self.offset = self.offset.saturating_sub(page_size);
    }

    /// Page down.
    pub fn page_down(&mut self, page_size: usize, total: usize) {
        self.offset = (self.offset + page_size).min(total.saturating_sub(1));
        if self.offset >= total.saturating_sub(1) {
            self.auto_scroll = true;
        }
    }

    /// Jump to top.
    pub fn home(&mut self) {
        self.auto_scroll = false;
        self.offset = 0;
    }

    /// Jump to bottom.
    pub fn end(&mut self, total: usize) {
        self.auto_scroll = true;
        self.offset = total.saturating_sub(1);
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the scrollable log panel.
pub fn render_logs(frame: &mut Frame, area: Rect, logs: &[String], scroll_offset: usize) {
    let visible_height = area.height.saturating_sub(2) as usize;
    let total = logs.len();

    let items: Vec<ListItem> = logs
        .iter()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|log| {
            let style = if log.starts_with("[CRITICAL]") {
                Style::default().fg(Color::Red)
            } else if log.starts_with("[WARNING]") {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            ListItem::new(Line::raw(log.as_str())).style(style)
        })
        .collect();

    let title = if total > visible_height {
        let pct = (scroll_offset * 100) / total.saturating_sub(1).max(1);
        format!(" Log ({pct}%) ")
    } else {
        " Log ".to_string()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(list, area);
}
