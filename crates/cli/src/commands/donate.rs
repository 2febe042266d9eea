//! Donate command - post a food donation listing

use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;
use zerohunger_domain::usecases::{DonateError, DonateUseCase};
use zerohunger_domain::{DonationDraft, FoodType, SystemClock};

use crate::args::DonateArgs;
use crate::commands::{GENERIC_FAILURE, record_store, require_session};
use crate::config::AppConfig;

pub async fn execute(args: DonateArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref()).unwrap_or_default();
    let session = require_session(&config).await?;

    let food_type: FoodType = args.food_type.parse().map_err(|e: String| anyhow!(e))?;

    let mut draft = DonationDraft {
        title: args.title,
        description: args.description,
        food_type,
        quantity: args.quantity,
        expiry_date: args.expiry_date,
        location: args.location,
        contact_info: args.contact_info,
        dietary_tags: vec![],
    };
    for tag in &args.tags {
        draft.add_dietary_tag(tag);
    }

    let records = record_store(&config, Some(&session))?;
    let usecase = DonateUseCase::new(records, SystemClock);

    let record = usecase
        .submit(session.user_id, draft)
        .await
        .map_err(|e| match e {
            DonateError::Validation(v) => anyhow!("{}", v),
            DonateError::Record(r) => {
                tracing::error!(error = %r, "Failed to store donation");
                anyhow!("{}", GENERIC_FAILURE)
            }
        })?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&record).context("Failed to serialize donation")?
        );
        return Ok(());
    }

    println!("Food donation posted successfully! We'll match you with recipients nearby.");
    println!("Listing id: {}", record.id);

    Ok(())
}
