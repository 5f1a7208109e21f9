//! hackdeps - checksum-pinned binary build dependencies
//!
//! This is the main entry point for the hackdeps command-line interface.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use hackdeps_core::{CancellationToken, RuntimeConfig};
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Must happen before any TLS operation
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let runtime = RuntimeConfig::from_env();
    let cancel = cancel_on_interrupt();
    let config = cli.config_path();

    match cli.command {
        Commands::Install(args) => commands::install::run(args, &config, &runtime, &cancel).await,
        Commands::Update(args) => commands::update::run(args, &config, &runtime, &cancel).await,
    }
}

/// Root cancellation token, fired on Ctrl-C
fn cancel_on_interrupt() -> CancellationToken {
    let cancel = CancellationToken::new();
    let token = cancel.clone();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling in-flight work");
            token.cancel();
        }
    });

    cancel
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
