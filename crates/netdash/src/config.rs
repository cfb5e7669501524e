//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use netdash_core::constants::DEFAULT_POLL_INTERVAL;

/// NetDash — terminal network monitoring dashboard.
#[derive(Parser, Debug)]
#[command(name = "netdash", version, about)]
pub struct AppConfig {
    /// Poll interval (e.g., "5s", "500ms", "1m").
    #[arg(short, long, default_value = "5s", env = "NETDASH_INTERVAL")]
    pub interval: String,

    /// Number of samples retained per metric chart.
    #[arg(short, long, default_value = "20", env = "NETDASH_WINDOW")]
    pub window: usize,

    /// Path to a JSON file listing devices to probe.
    #[arg(short, long, env = "NETDASH_DEVICES")]
    pub devices: Option<PathBuf>,

    /// Take a single sample, print it, and exit.
    #[arg(long)]
    pub once: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (machine-readable output in --once mode).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse the interval string into a Duration.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        parse_duration(&self.interval).unwrap_or(DEFAULT_POLL_INTERVAL)
    }
}

/// Parse a duration string like "5s", "500ms", "1m".
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(Duration::from_secs(n * 60))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(Duration::from_secs(n * 3600))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(Duration::from_secs(n))
    }
}
