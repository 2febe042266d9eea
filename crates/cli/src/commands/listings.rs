//! Listings command - browse available food donations

use anyhow::{Context, Result};
use std::path::PathBuf;
use zerohunger_domain::FoodType;
use zerohunger_domain::usecases::ListingBoard;

use crate::args::ListingsArgs;

pub async fn execute(args: ListingsArgs, _config_path: Option<PathBuf>) -> Result<()> {
    let mut board = ListingBoard::new();

    if let Some(location) = &args.location {
        board.set_location(location.clone());
    }
    if let Some(raw) = &args.food_type {
        let food_type: FoodType = raw.parse().map_err(|e: String| anyhow::anyhow!(e))?;
        board.set_food_type(Some(food_type));
    }
    if let Some(radius_km) = args.radius_km {
        board.set_radius_km(radius_km);
    }

    let listings = board.search();

    if args.json {
        let json =
            serde_json::to_string_pretty(listings).context("Failed to serialize listings")?;
        println!("{}", json);
        return Ok(());
    }

    println!("Available Food ({})", listings.len());
    println!();

    for listing in listings {
        println!("{} [{}]", listing.title, listing.food_type);
        println!("  {}", listing.description);
        println!("  Donor: {}", listing.donor);
        println!("  {}", listing.location);
        println!("  Quantity: {}", listing.quantity);
        println!(
            "  Posted {} | Expires {}",
            listing.posted, listing.expires_in
        );
        if !listing.dietary_tags.is_empty() {
            println!("  Tags: {}", listing.dietary_tags.join(", "));
        }
        println!();
    }

    Ok(())
}
