//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::auth::AuthCommand;
use crate::commands::bookings::BookingsCommand;
use crate::commands::listings::ListingsCommand;
use crate::commands::messages::MessagesCommand;
use crate::commands::payments::PaymentsCommand;
use crate::commands::reviews::ReviewsCommand;

/// nu3PBnB CLI tool for API exploration.
#[derive(Parser, Debug)]
#[command(name = "nu3pbnb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// API key sent with every request
    #[arg(
        long,
        env = "NU3PBNB_API_KEY",
        default_value = "demo_api_key_123",
        global = true
    )]
    pub api_key: String,

    /// API base URL
    #[arg(
        long,
        env = "NU3PBNB_BASE_URL",
        default_value = nu3pbnb::types::DEFAULT_BASE_URL,
        global = true
    )]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Account registration, login, and profile
    Auth(AuthCommand),

    /// Browse and manage property listings
    Listings(ListingsCommand),

    /// Create and manage bookings
    Bookings(BookingsCommand),

    /// Read and write listing reviews
    Reviews(ReviewsCommand),

    /// User-to-user messaging
    Messages(MessagesCommand),

    /// Payment methods, processing, and history
    Payments(PaymentsCommand),
}
