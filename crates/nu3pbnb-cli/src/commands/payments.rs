//! Payments subcommand implementations.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use nu3pbnb::types::{PaymentMethod, PaymentRequest};

use crate::commands::Ctx;
use crate::output;

#[derive(Args, Debug)]
pub struct PaymentsCommand {
    #[command(subcommand)]
    pub command: PaymentsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PaymentsSubcommand {
    /// Show stored and supported payment methods
    Methods,

    /// Pay for a booking
    Process(ProcessArgs),

    /// Show the user's payment history
    History(HistoryArgs),
}

#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Booking id to pay for
    #[arg(long)]
    pub booking: String,

    /// Payment method (apple_pay, google_pay, paypal, credit_card)
    #[arg(long)]
    pub method: PaymentMethod,
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub async fn handle(cmd: PaymentsCommand, ctx: &Ctx) -> Result<()> {
    match cmd.command {
        PaymentsSubcommand::Methods => methods(ctx).await,
        PaymentsSubcommand::Process(args) => process(args, ctx).await,
        PaymentsSubcommand::History(args) => history(args, ctx).await,
    }
}

async fn methods(ctx: &Ctx) -> Result<()> {
    let (client, _session) = ctx.authenticated_client()?;

    let response = client
        .get_payment_methods()
        .await
        .context("Failed to fetch payment methods")?;

    output::field("Supported", &response.supported_methods.join(", "));

    for method in &response.payment_methods {
        output::json(method)?;
    }

    Ok(())
}

async fn process(args: ProcessArgs, ctx: &Ctx) -> Result<()> {
    let (client, _session) = ctx.authenticated_client()?;

    let request = PaymentRequest {
        booking_id: args.booking,
        payment_method: args.method,
    };

    let payment = client
        .process_payment(&request)
        .await
        .context("Failed to process payment")?;

    output::success("Payment processed");
    output::field("Id", &payment.id);
    output::field("Amount", &payment.amount.to_string());
    if let Some(transaction_id) = &payment.transaction_id {
        output::field("Transaction", transaction_id);
    }

    Ok(())
}

async fn history(args: HistoryArgs, ctx: &Ctx) -> Result<()> {
    let (client, _session) = ctx.authenticated_client()?;

    let payments = client
        .get_payment_history()
        .await
        .context("Failed to fetch payment history")?;

    if payments.is_empty() {
        eprintln!("{}", "No payments yet.".dimmed());
        return Ok(());
    }

    for payment in &payments {
        if args.pretty {
            output::json_pretty(payment)?;
        } else {
            output::json(payment)?;
        }
    }

    Ok(())
}
