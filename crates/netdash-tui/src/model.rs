//! Dashboard application model (Elm architecture).

use std::io;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use crossterm::event::{self, Event};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event::DisableMouseCapture, event::EnableMouseCapture, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use netdash_collector::tick_label;
use netdash_core::{Alert, Channel, DeviceReport, DeviceStatus, SeriesSet};

use crate::alerts::render_alerts;
use crate::charts::{render_metric_chart, render_metric_sparkline};
use crate::devices::render_devices;
use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::logs::{render_logs, ScrollState};
use crate::messages::DashMessage;

/// Maximum retained log lines.
const MAX_LOGS: usize = 500;

/// Maximum retained alerts.
const MAX_ALERTS: usize = 50;

/// Dashboard state (Elm Model).
///
/// Owns the series store explicitly; the collector writes to it only
/// through messages and the renderer reads it only through snapshots.
pub struct DashApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Whether chart updates are paused (collector keeps running).
    pub paused: bool,
    /// Rolling per-channel metric history.
    pub history: SeriesSet,
    /// Latest device probe results.
    pub devices: Vec<DeviceReport>,
    /// Raised alerts, oldest first.
    pub alerts: Vec<Alert>,
    /// Log lines.
    pub logs: Vec<String>,
    /// Log scroll state.
    pub scroll: ScrollState,
    /// Show the device table.
    pub show_devices: bool,
    /// Show the log panel.
    pub show_logs: bool,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
    /// Label of the most recent metrics tick.
    pub last_tick: String,
    /// Message receiver.
    rx: Receiver<DashMessage>,
    /// Session start.
    started: Instant,
    /// Collector poll interval, for the header.
    interval: Duration,
}

impl DashApp {
    /// Create a new dashboard model.
    #[must_use]
    pub fn new(rx: Receiver<DashMessage>, window: usize, interval: Duration) -> Self {
        Self {
            should_quit: false,
            paused: false,
            history: SeriesSet::new(window),
            devices: Vec::new(),
            alerts: Vec::new(),
            logs: Vec::new(),
            scroll: ScrollState::new(),
            show_devices: true,
            show_logs: true,
            terminal_width: 80,
            terminal_height: 24,
            last_tick: String::new(),
            rx,
            started: Instant::now(),
            interval,
        }
    }

    /// Drain pending messages into the model (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: DashMessage) {
        match msg {
            DashMessage::Metrics { batch, label } => {
                if !self.paused {
                    self.history.on_sample(&batch, &label);
                    self.last_tick = label;
                }
            }
            DashMessage::Devices(reports) => {
                self.devices = reports;
            }
            DashMessage::Alert(alert) => {
                tracing::debug!(%alert, "alert received");
                self.push_log(alert.to_string());
                self.alerts.push(alert);
                if self.alerts.len() > MAX_ALERTS {
                    self.alerts.remove(0);
                }
            }
            DashMessage::Log(line) => {
                self.push_log(line);
            }
            DashMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            DashMessage::KeyPress(action) => {
                self.handle_key_action(action);
            }
            DashMessage::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn push_log(&mut self, line: String) {
        self.logs.push(line);
        if self.logs.len() > MAX_LOGS {
            self.logs.remove(0);
            self.scroll.on_evicted_line();
        }
        self.scroll.on_new_line(self.logs.len());
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit | KeyAction::Cancel => {
                self.should_quit = true;
            }
            KeyAction::Pause => {
                self.paused = true;
            }
            KeyAction::Resume => {
                self.paused = false;
            }
            KeyAction::ToggleDevices => {
                self.show_devices = !self.show_devices;
            }
            KeyAction::ToggleLogs => {
                self.show_logs = !self.show_logs;
            }
            KeyAction::ScrollUp => self.scroll.scroll_up(),
            KeyAction::ScrollDown => self.scroll.scroll_down(self.logs.len()),
            KeyAction::PageUp => self.scroll.page_up(10),
            KeyAction::PageDown => self.scroll.page_down(10, self.logs.len()),
            KeyAction::Home => self.scroll.home(),
            KeyAction::End => self.scroll.end(self.logs.len()),
            KeyAction::None => {}
        }
    }

    /// Number of devices currently reported healthy.
    #[must_use]
    pub fn healthy_devices(&self) -> usize {
        self.devices
            .iter()
            .filter(|r| r.status == DeviceStatus::Healthy)
            .count()
    }

    /// Compute the outer layout: header, charts, info panel, footer.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),      // header
                Constraint::Percentage(55), // charts
                Constraint::Min(5),         // info panel
                Constraint::Length(2),      // footer
            ])
            .split(area);

        (outer[0], outer[1], outer[2], outer[3])
    }

    /// Compute the charts row: CPU, memory, network column.
    #[must_use]
    pub fn compute_charts_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(35),
                Constraint::Percentage(35),
                Constraint::Percentage(30),
            ])
            .split(area);

        let network = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[2]);

        (columns[0], columns[1], network[0], network[1])
    }

    /// Compute the info panel split for the currently visible panels.
    #[must_use]
    pub fn compute_info_layout(&self, area: Rect) -> (Option<Rect>, Rect, Option<Rect>) {
        match (self.show_devices, self.show_logs) {
            (true, true) => {
                let chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Percentage(40),
                        Constraint::Percentage(30),
                        Constraint::Percentage(30),
                    ])
                    .split(area);
                (Some(chunks[0]), chunks[1], Some(chunks[2]))
            }
            (true, false) => {
                let chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .split(area);
                (Some(chunks[0]), chunks[1], None)
            }
            (false, true) => {
                let chunks = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(area);
                (None, chunks[0], Some(chunks[1]))
            }
            (false, false) => (None, area, None),
        }
    }

    /// Render the full dashboard view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, charts_area, info_area, footer_area) =
            Self::compute_layout(frame.area());

        render_header(
            frame,
            header_area,
            &tick_label(self.started.elapsed()),
            self.interval.as_secs(),
            self.healthy_devices(),
            self.devices.len(),
        );

        let (cpu_area, memory_area, net_in_area, net_out_area) =
            Self::compute_charts_layout(charts_area);
        let window = self.history.capacity();
        render_metric_chart(
            frame,
            cpu_area,
            Channel::Cpu,
            &self.history.snapshot(Channel::Cpu),
            window,
        );
        render_metric_chart(
            frame,
            memory_area,
            Channel::Memory,
            &self.history.snapshot(Channel::Memory),
            window,
        );
        render_metric_sparkline(
            frame,
            net_in_area,
            Channel::NetworkIn,
            &self.history.snapshot(Channel::NetworkIn),
        );
        render_metric_sparkline(
            frame,
            net_out_area,
            Channel::NetworkOut,
            &self.history.snapshot(Channel::NetworkOut),
        );

        let (devices_area, alerts_area, logs_area) = self.compute_info_layout(info_area);
        if let Some(area) = devices_area {
            render_devices(frame, area, &self.devices);
        }
        render_alerts(frame, alerts_area, &self.alerts);
        if let Some(area) = logs_area {
            render_logs(frame, area, &self.logs, self.scroll.offset);
        }

        render_footer(frame, footer_area);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the event loop: render, poll input, drain messages.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                break;
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key_event) => {
                        self.handle_message(DashMessage::KeyPress(map_key(key_event)));
                    }
                    Event::Resize(w, h) => {
                        self.handle_message(DashMessage::Resize {
                            width: w,
                            height: h,
                        });
                    }
                    _ => {}
                }
            }

            self.update();
        }

        Self::teardown_terminal(&mut terminal)?;
        Ok(())
    }
}
