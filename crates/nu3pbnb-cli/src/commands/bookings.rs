//! Bookings subcommand implementations.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use colored::Colorize;

use nu3pbnb::types::{BookingStatus, NewBooking};
use nu3pbnb::Params;

use crate::commands::Ctx;
use crate::output;

#[derive(Args, Debug)]
pub struct BookingsCommand {
    #[command(subcommand)]
    pub command: BookingsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BookingsSubcommand {
    /// List the user's bookings
    List(ListArgs),

    /// Request a booking
    Create(CreateArgs),

    /// Change a booking's status (host side)
    UpdateStatus(UpdateStatusArgs),

    /// Cancel a booking
    Cancel(CancelArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Maximum bookings per page
    #[arg(long)]
    pub limit: Option<u32>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Listing id to book
    #[arg(long)]
    pub listing: String,

    /// Check-in date (YYYY-MM-DD)
    #[arg(long)]
    pub check_in: NaiveDate,

    /// Check-out date (YYYY-MM-DD)
    #[arg(long)]
    pub check_out: NaiveDate,

    /// Number of guests
    #[arg(long)]
    pub guests: u32,

    /// Total price for the stay
    #[arg(long)]
    pub total_price: f64,

    /// Message to the host
    #[arg(long)]
    pub message: Option<String>,
}

#[derive(Args, Debug)]
pub struct UpdateStatusArgs {
    /// Booking id
    pub id: String,

    /// New status (pending, approved, declined, cancelled, confirmed)
    #[arg(long)]
    pub status: BookingStatus,
}

#[derive(Args, Debug)]
pub struct CancelArgs {
    /// Booking id
    pub id: String,
}

pub async fn handle(cmd: BookingsCommand, ctx: &Ctx) -> Result<()> {
    match cmd.command {
        BookingsSubcommand::List(args) => list(args, ctx).await,
        BookingsSubcommand::Create(args) => create(args, ctx).await,
        BookingsSubcommand::UpdateStatus(args) => update_status(args, ctx).await,
        BookingsSubcommand::Cancel(args) => cancel(args, ctx).await,
    }
}

async fn list(args: ListArgs, ctx: &Ctx) -> Result<()> {
    let (client, _session) = ctx.authenticated_client()?;

    let mut params = Params::new();
    if let Some(page) = args.page {
        params = params.set("page", page);
    }
    if let Some(limit) = args.limit {
        params = params.set("limit", limit);
    }

    let bookings = client
        .get_bookings(&params)
        .await
        .context("Failed to fetch bookings")?;

    if bookings.is_empty() {
        eprintln!("{}", "No bookings found.".dimmed());
        return Ok(());
    }

    for booking in &bookings {
        if args.pretty {
            output::json_pretty(booking)?;
        } else {
            output::json(booking)?;
        }
    }

    Ok(())
}

async fn create(args: CreateArgs, ctx: &Ctx) -> Result<()> {
    let (client, _session) = ctx.authenticated_client()?;

    let new_booking = NewBooking {
        listing_id: args.listing,
        check_in: args.check_in,
        check_out: args.check_out,
        guests: args.guests,
        total_price: args.total_price,
        message: args.message,
    };

    let booking = client
        .create_booking(&new_booking)
        .await
        .context("Failed to create booking")?;

    output::success("Booking requested");
    output::field("Id", &booking.id);
    output::field("Status", &booking.status.to_string());

    Ok(())
}

async fn update_status(args: UpdateStatusArgs, ctx: &Ctx) -> Result<()> {
    let (client, _session) = ctx.authenticated_client()?;

    let booking = client
        .update_booking(&args.id, args.status)
        .await
        .context("Failed to update booking")?;

    output::success("Booking updated");
    output::field("Status", &booking.status.to_string());

    Ok(())
}

async fn cancel(args: CancelArgs, ctx: &Ctx) -> Result<()> {
    let (client, _session) = ctx.authenticated_client()?;

    client
        .cancel_booking(&args.id)
        .await
        .context("Failed to cancel booking")?;

    output::success("Booking cancelled");

    Ok(())
}
