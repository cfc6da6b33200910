//! nu3pbnb - CLI tool for the nu3PBnB vacation-rental API.
//!
//! This is a thin wrapper over the `nu3pbnb` library, intended for manual
//! exploration and debugging against a running nu3PBnB server.

mod cli;
mod commands;
mod output;
mod session;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::Ctx;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.json_logs);

    let ctx = Ctx::from_cli(&cli)?;

    match cli.command {
        Commands::Auth(cmd) => commands::auth::handle(cmd, &ctx).await,
        Commands::Listings(cmd) => commands::listings::handle(cmd, &ctx).await,
        Commands::Bookings(cmd) => commands::bookings::handle(cmd, &ctx).await,
        Commands::Reviews(cmd) => commands::reviews::handle(cmd, &ctx).await,
        Commands::Messages(cmd) => commands::messages::handle(cmd, &ctx).await,
        Commands::Payments(cmd) => commands::payments::handle(cmd, &ctx).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}
