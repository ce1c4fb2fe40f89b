//! ai-cz - AI-assisted conventional commits.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ai_cz::cli::output;
use ai_cz::cli::{execute, hint_for, Cli};
use ai_cz::core::constants::LOG_ENV;

fn main() {
    let cli = Cli::parse();
    output::init_colors();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ai_cz=debug")
        } else {
            EnvFilter::new("ai_cz=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(&cli) {
        output::error(&e.to_string());
        if let Some(hint) = hint_for(&e) {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
