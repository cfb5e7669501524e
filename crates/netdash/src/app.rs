//! Application entry point and dispatch.

use anyhow::{Context, Result};

use netdash_collector::{load_devices, probe_device, Collector, SystemSampler};
use netdash_core::{CancellationToken, Channel, DashError, Device};
use netdash_tui::{DashApp, DashMessage};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        clap_complete::generate(shell, &mut cmd, "netdash", &mut std::io::stdout());
        return Ok(());
    }

    let devices = match &config.devices {
        Some(path) => load_devices(path)
            .with_context(|| format!("loading devices from {}", path.display()))?,
        None => Vec::new(),
    };

    if config.once {
        return run_once(config, &devices);
    }

    run_tui(config, devices)
}

/// Take one sample, print it, and exit.
fn run_once(config: &AppConfig, devices: &[Device]) -> Result<()> {
    let mut sampler = SystemSampler::new();
    let batch = sampler.sample();

    for channel in Channel::ALL {
        let Some(value) = batch.get(channel) else {
            continue;
        };
        if config.quiet {
            println!("{channel} {value:.2}");
        } else if channel.is_percentage() {
            println!("{:<12} {value:>7.1}%", channel.title());
        } else {
            println!("{:<12} {value:>8.2}", channel.title());
        }
    }

    for device in devices {
        let report = probe_device(device);
        if config.quiet {
            println!("device {} {}", report.name, report.status);
        } else {
            let rtt = report
                .response_ms
                .map_or_else(|| "-".to_string(), |ms| format!("{ms} ms"));
            println!(
                "{:<20} {:<22} {:<10} {rtt}",
                report.name, report.endpoint, report.status
            );
        }
    }

    Ok(())
}

/// Run the interactive dashboard.
fn run_tui(config: &AppConfig, devices: Vec<Device>) -> Result<()> {
    let interval = config.poll_interval();
    let cancel = CancellationToken::new();

    // Set up Ctrl+C handler
    let cancel_clone = cancel.clone();
    ctrlc_handler(cancel_clone);

    // Collector feeds events over its own channel
    let (collector_tx, collector_rx) = crossbeam_channel::unbounded();
    let collector = Collector::new(interval, devices);
    let collector_handle = collector
        .spawn(collector_tx, cancel.clone())
        .context("spawning collector thread")?;

    // Bridge collector events into dashboard messages
    let (tx, rx) = crossbeam_channel::unbounded::<DashMessage>();
    let _ = tx.send(DashMessage::Log(format!(
        "session started, polling every {}s",
        interval.as_secs()
    )));
    let bridge_cancel = cancel.clone();
    let bridge_handle = std::thread::spawn(move || {
        for event in collector_rx {
            if bridge_cancel.is_cancelled() {
                break;
            }
            if tx.send(event.into()).is_err() {
                break; // channel closed, TUI exited
            }
        }
        let _ = tx.send(DashMessage::Quit);
    });

    // Run the TUI event loop on the main thread
    let mut app = DashApp::new(rx, config.window, interval);
    let run_result = app.run();

    // A token already cancelled here means Ctrl+C ended the session,
    // not a quit key.
    let interrupted = cancel.is_cancelled();

    // Stop the background threads regardless of how the TUI exited
    cancel.cancel();
    let _ = collector_handle.join();
    let _ = bridge_handle.join();

    finish_session(run_result, interrupted)
}

/// Fold the event loop outcome and the interrupt flag into the final
/// session result.
fn finish_session(run_result: std::io::Result<()>, interrupted: bool) -> Result<()> {
    run_result.context("TUI error")?;
    if interrupted {
        return Err(DashError::Interrupted.into());
    }
    Ok(())
}

fn ctrlc_handler(cancel: CancellationToken) {
    if let Err(err) = ctrlc::set_handler(move || {
        cancel.cancel();
    }) {
        tracing::warn!(%err, "could not install Ctrl+C handler");
    }
}
