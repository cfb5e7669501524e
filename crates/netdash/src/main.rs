//! NetDash — terminal network monitoring dashboard.

use netdash_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    // Initialize tracing; --verbose and --quiet adjust the default level,
    // RUST_LOG still overrides.
    let default_level = if config.quiet {
        tracing::Level::ERROR
    } else if config.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .init();

    if let Err(err) = app::run(&config) {
        eprintln!("error: {err:#}");
        std::process::exit(errors::exit_code_for(&err));
    }
}
