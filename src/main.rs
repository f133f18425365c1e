//! nua-deploy CLI - build and deploy Nua applications
//!
//! Usage: nua-deploy <COMMAND>
//!
//! Commands:
//!   build   Build application images
//!   deploy  Write the deployment document and run the orchestrator
//!   all     Build, then deploy
//!   render  Print the deployment document without deploying
//!   apps    List known applications

mod commands;
mod ui;

use clap::Parser;
use nua_deploy::presentation::Cli;
use tracing_subscriber::EnvFilter;

use crate::ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);
    init_tracing(cli.verbose, ui.color);

    if let Err(err) = commands::dispatch(&cli, &ui) {
        ui::error::print_error(&err, cli.command.name(), &ui);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8, ansi: bool) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .init();
}
