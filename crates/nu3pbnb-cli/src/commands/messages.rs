//! Messages subcommand implementations.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use nu3pbnb::types::NewMessage;

use crate::commands::Ctx;
use crate::output;

#[derive(Args, Debug)]
pub struct MessagesCommand {
    #[command(subcommand)]
    pub command: MessagesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum MessagesSubcommand {
    /// List the user's messages
    List(ListArgs),

    /// Send a message to another user
    Send(SendArgs),

    /// Mark a message as read
    MarkRead(MarkReadArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Recipient user id
    #[arg(long)]
    pub to: String,

    /// Related listing id
    #[arg(long)]
    pub listing: Option<String>,

    /// Message text
    #[arg(long)]
    pub content: String,
}

#[derive(Args, Debug)]
pub struct MarkReadArgs {
    /// Message id
    pub id: String,
}

pub async fn handle(cmd: MessagesCommand, ctx: &Ctx) -> Result<()> {
    match cmd.command {
        MessagesSubcommand::List(args) => list(args, ctx).await,
        MessagesSubcommand::Send(args) => send(args, ctx).await,
        MessagesSubcommand::MarkRead(args) => mark_read(args, ctx).await,
    }
}

async fn list(args: ListArgs, ctx: &Ctx) -> Result<()> {
    let (client, _session) = ctx.authenticated_client()?;

    let messages = client
        .get_messages()
        .await
        .context("Failed to fetch messages")?;

    if messages.is_empty() {
        eprintln!("{}", "No messages.".dimmed());
        return Ok(());
    }

    for message in &messages {
        if args.pretty {
            output::json_pretty(message)?;
        } else {
            output::json(message)?;
        }
    }

    Ok(())
}

async fn send(args: SendArgs, ctx: &Ctx) -> Result<()> {
    let (client, _session) = ctx.authenticated_client()?;

    let new_message = NewMessage {
        recipient_id: args.to,
        listing_id: args.listing,
        content: args.content,
    };

    let message = client
        .send_message(&new_message)
        .await
        .context("Failed to send message")?;

    output::success("Message sent");
    output::field("Id", &message.id);

    Ok(())
}

async fn mark_read(args: MarkReadArgs, ctx: &Ctx) -> Result<()> {
    let (client, _session) = ctx.authenticated_client()?;

    client
        .mark_message_read(&args.id)
        .await
        .context("Failed to mark message read")?;

    output::success("Message marked as read");

    Ok(())
}
