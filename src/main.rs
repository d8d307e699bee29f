//! zeroops CLI - deploy docker-compose apps to a VPS over SSH
//!
//! Usage: zeroops <COMMAND>
//!
//! Commands:
//!   context  Manage SSH targets
//!   deploy   Deploy and manage apps on the current target
//!   proxy    Manage nginx site entries on the current target

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing::Level;

use cli::{Cli, Commands};
use commands::AppContext;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let json = cli.json;
    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

/// Logs go to stderr so they never mix with command output
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let ctx = AppContext::load(cli.json)?;

    match cli.command {
        Commands::Context { action } => commands::context::cmd_context(action, &ctx),
        Commands::Deploy { action } => commands::deploy::cmd_deploy(action, &ctx),
        Commands::Proxy { action } => commands::proxy::cmd_proxy(action, &ctx),
    }
}
