//! Listings subcommand implementations.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use nu3pbnb::types::{ListingUpdate, NewListing};
use nu3pbnb::Params;

use crate::commands::Ctx;
use crate::output;

#[derive(Args, Debug)]
pub struct ListingsCommand {
    #[command(subcommand)]
    pub command: ListingsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ListingsSubcommand {
    /// List listings, paginated
    List(ListArgs),

    /// Fetch a single listing
    Get(GetArgs),

    /// Search listings by location and price
    Search(SearchArgs),

    /// Show featured listings
    Popular,

    /// Create a listing (host role required)
    Create(CreateArgs),

    /// Update a listing
    Update(UpdateArgs),

    /// Delete a listing
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Page number
    #[arg(long)]
    pub page: Option<u32>,

    /// Maximum listings per page
    #[arg(long)]
    pub limit: Option<u32>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Listing id
    pub id: String,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-form location query
    #[arg(long)]
    pub location: Option<String>,

    /// City filter
    #[arg(long)]
    pub city: Option<String>,

    /// Minimum price per night
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price per night
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Number of guests
    #[arg(long)]
    pub guests: Option<u32>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub description: String,

    #[arg(long)]
    pub location: String,

    #[arg(long)]
    pub city: String,

    #[arg(long)]
    pub country: String,

    /// Price per night
    #[arg(long)]
    pub price: f64,

    /// Property type (apartment, house, ...)
    #[arg(long = "type")]
    pub property_type: String,

    #[arg(long)]
    pub latitude: f64,

    #[arg(long)]
    pub longitude: f64,

    /// Photo URL (repeatable)
    #[arg(long = "photo")]
    pub photos: Vec<String>,

    /// Amenity (repeatable)
    #[arg(long = "amenity")]
    pub amenities: Vec<String>,

    #[arg(long)]
    pub max_guests: Option<u32>,

    #[arg(long)]
    pub bedrooms: Option<u32>,

    #[arg(long)]
    pub bathrooms: Option<u32>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Listing id
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    /// Price per night
    #[arg(long)]
    pub price: Option<f64>,

    #[arg(long)]
    pub available: Option<bool>,

    #[arg(long)]
    pub featured: Option<bool>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Listing id
    pub id: String,
}

pub async fn handle(cmd: ListingsCommand, ctx: &Ctx) -> Result<()> {
    match cmd.command {
        ListingsSubcommand::List(args) => list(args, ctx).await,
        ListingsSubcommand::Get(args) => get(args, ctx).await,
        ListingsSubcommand::Search(args) => search(args, ctx).await,
        ListingsSubcommand::Popular => popular(ctx).await,
        ListingsSubcommand::Create(args) => create(args, ctx).await,
        ListingsSubcommand::Update(args) => update(args, ctx).await,
        ListingsSubcommand::Delete(args) => delete(args, ctx).await,
    }
}

async fn list(args: ListArgs, ctx: &Ctx) -> Result<()> {
    let (client, _session) = ctx.client();

    let mut params = Params::new();
    if let Some(page) = args.page {
        params = params.set("page", page);
    }
    if let Some(limit) = args.limit {
        params = params.set("limit", limit);
    }

    let page = client
        .get_listings(&params)
        .await
        .context("Failed to fetch listings")?;

    if page.listings.is_empty() {
        eprintln!("{}", "No listings found.".dimmed());
        return Ok(());
    }

    for listing in &page.listings {
        if args.pretty {
            output::json_pretty(listing)?;
        } else {
            output::json(listing)?;
        }
    }

    if let Some(pagination) = &page.pagination
        && let (Some(current), Some(total)) = (pagination.current, pagination.total)
    {
        eprintln!();
        eprintln!("{}: {}/{}", "Page".dimmed(), current, total);
    }

    Ok(())
}

async fn get(args: GetArgs, ctx: &Ctx) -> Result<()> {
    let (client, _session) = ctx.client();

    let listing = client
        .get_listing(&args.id)
        .await
        .context("Failed to fetch listing")?;

    output::json_pretty(&listing)
}

async fn search(args: SearchArgs, ctx: &Ctx) -> Result<()> {
    let (client, _session) = ctx.client();

    let mut params = Params::new();
    if let Some(location) = &args.location {
        params = params.set("location", location);
    }
    if let Some(city) = &args.city {
        params = params.set("city", city);
    }
    if let Some(min_price) = args.min_price {
        params = params.set("minPrice", min_price);
    }
    if let Some(max_price) = args.max_price {
        params = params.set("maxPrice", max_price);
    }
    if let Some(guests) = args.guests {
        params = params.set("guests", guests);
    }

    let results = client
        .search_listings(&params)
        .await
        .context("Failed to search listings")?;

    if results.is_empty() {
        eprintln!("{}", "No listings matched.".dimmed());
        return Ok(());
    }

    for listing in &results {
        if args.pretty {
            output::json_pretty(listing)?;
        } else {
            output::json(listing)?;
        }
    }

    Ok(())
}

async fn popular(ctx: &Ctx) -> Result<()> {
    let (client, _session) = ctx.client();

    let listings = client
        .get_popular_listings()
        .await
        .context("Failed to fetch popular listings")?;

    for listing in &listings {
        output::json(listing)?;
    }

    Ok(())
}

async fn create(args: CreateArgs, ctx: &Ctx) -> Result<()> {
    let (client, _session) = ctx.authenticated_client()?;

    let new_listing = NewListing {
        title: args.title,
        description: args.description,
        location: args.location,
        city: args.city,
        country: args.country,
        price: args.price,
        property_type: args.property_type,
        latitude: args.latitude,
        longitude: args.longitude,
        photos: args.photos,
        amenities: args.amenities,
        max_guests: args.max_guests,
        bedrooms: args.bedrooms,
        bathrooms: args.bathrooms,
    };

    let listing = client
        .create_listing(&new_listing)
        .await
        .context("Failed to create listing")?;

    output::success("Listing created");
    output::field("Id", &listing.id);

    Ok(())
}

async fn update(args: UpdateArgs, ctx: &Ctx) -> Result<()> {
    let (client, _session) = ctx.authenticated_client()?;

    let update = ListingUpdate {
        title: args.title,
        description: args.description,
        location: args.location,
        city: args.city,
        country: args.country,
        price: args.price,
        available: args.available,
        featured: args.featured,
    };

    client
        .update_listing(&args.id, &update)
        .await
        .context("Failed to update listing")?;

    output::success("Listing updated");

    Ok(())
}

async fn delete(args: DeleteArgs, ctx: &Ctx) -> Result<()> {
    let (client, _session) = ctx.authenticated_client()?;

    client
        .delete_listing(&args.id)
        .await
        .context("Failed to delete listing")?;

    output::success("Listing deleted");

    Ok(())
}
