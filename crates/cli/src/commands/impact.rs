//! Impact command - community impact statistics

use anyhow::{Context, Result};
use std::path::PathBuf;
use zerohunger_domain::{ImpactSnapshot, recent_activity};

use crate::args::ImpactArgs;

pub async fn execute(args: ImpactArgs, _config_path: Option<PathBuf>) -> Result<()> {
    let snapshot = ImpactSnapshot::community();
    let milestones = snapshot.milestones();
    let activity = recent_activity();

    if args.json {
        let report = serde_json::json!({
            "stats": snapshot,
            "milestones": milestones,
            "recent_activity": activity,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize impact report")?
        );
        return Ok(());
    }

    println!("Our Impact Together");
    println!("===================");
    println!();
    println!("Meals provided:        {}", snapshot.total_meals);
    println!("People helped:         {}", snapshot.people_helped);
    println!("Food saved:            {} tons", snapshot.food_saved_tons);
    println!("CO2 reduced:           {} tons", snapshot.co2_reduced_tons);
    println!("Active donors:         {}", snapshot.active_donors);
    println!("Active recipients:     {}", snapshot.active_recipients);
    println!("Partner organizations: {}", snapshot.partner_organizations);
    println!();

    println!("Progress toward goals:");
    for milestone in &milestones {
        println!(
            "  {}: {:.1}/{:.1} ({:.0}%)",
            milestone.label,
            milestone.current,
            milestone.target,
            milestone.percent()
        );
    }
    println!();

    println!("Recent activity:");
    for entry in &activity {
        println!(
            "  {} - {} -> {} ({}, {}, {})",
            entry.title, entry.donor, entry.recipient, entry.amount, entry.location, entry.time_ago
        );
    }

    Ok(())
}
