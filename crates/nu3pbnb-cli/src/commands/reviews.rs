//! Reviews subcommand implementations.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use nu3pbnb::types::{NewReview, ReviewUpdate};

use crate::commands::Ctx;
use crate::output;

#[derive(Args, Debug)]
pub struct ReviewsCommand {
    #[command(subcommand)]
    pub command: ReviewsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ReviewsSubcommand {
    /// List reviews for a listing
    List(ListArgs),

    /// Write a review
    Create(CreateArgs),

    /// Edit a review
    Update(UpdateArgs),

    /// Delete a review
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Listing id
    pub listing: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Listing id being reviewed
    #[arg(long)]
    pub listing: String,

    /// Rating from 1 to 5
    #[arg(long)]
    pub rating: u8,

    /// Review text
    #[arg(long)]
    pub comment: String,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Review id
    pub id: String,

    /// New rating from 1 to 5
    #[arg(long)]
    pub rating: Option<u8>,

    /// New review text
    #[arg(long)]
    pub comment: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Review id
    pub id: String,
}

pub async fn handle(cmd: ReviewsCommand, ctx: &Ctx) -> Result<()> {
    match cmd.command {
        ReviewsSubcommand::List(args) => list(args, ctx).await,
        ReviewsSubcommand::Create(args) => create(args, ctx).await,
        ReviewsSubcommand::Update(args) => update(args, ctx).await,
        ReviewsSubcommand::Delete(args) => delete(args, ctx).await,
    }
}

async fn list(args: ListArgs, ctx: &Ctx) -> Result<()> {
    let (client, _session) = ctx.client();

    let reviews = client
        .get_listing_reviews(&args.listing)
        .await
        .context("Failed to fetch reviews")?;

    if reviews.is_empty() {
        eprintln!("{}", "No reviews yet.".dimmed());
        return Ok(());
    }

    for review in &reviews {
        if args.pretty {
            output::json_pretty(review)?;
        } else {
            output::json(review)?;
        }
    }

    Ok(())
}

async fn create(args: CreateArgs, ctx: &Ctx) -> Result<()> {
    let (client, _session) = ctx.authenticated_client()?;

    let new_review = NewReview {
        listing_id: args.listing,
        rating: args.rating,
        comment: args.comment,
    };

    let review = client
        .create_review(&new_review)
        .await
        .context("Failed to create review")?;

    output::success("Review posted");
    output::field("Id", &review.id);

    Ok(())
}

async fn update(args: UpdateArgs, ctx: &Ctx) -> Result<()> {
    let (client, _session) = ctx.authenticated_client()?;

    let update = ReviewUpdate {
        rating: args.rating,
        comment: args.comment,
    };

    client
        .update_review(&args.id, &update)
        .await
        .context("Failed to update review")?;

    output::success("Review updated");

    Ok(())
}

async fn delete(args: DeleteArgs, ctx: &Ctx) -> Result<()> {
    let (client, _session) = ctx.authenticated_client()?;

    client
        .delete_review(&args.id)
        .await
        .context("Failed to delete review")?;

    output::success("Review deleted");

    Ok(())
}
