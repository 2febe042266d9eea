//! Profile command - show and edit the signed-in user's profile

use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};
use zerohunger_domain::usecases::{ProfileError, ProfileUseCase, SubscriptionUseCase};
use zerohunger_domain::{BannerState, ProfileUpdate, SystemClock, UserRole};

use crate::args::{ProfileArgs, ProfileCommands};
use crate::commands::{
    GENERIC_FAILURE, auth_gateway, blob_store, record_store, require_session,
};
use crate::config::AppConfig;

pub async fn execute(args: ProfileArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref()).unwrap_or_default();

    match args.command {
        ProfileCommands::Show { json } => show(&config, json).await,
        ProfileCommands::Update {
            full_name,
            phone,
            address,
            city,
            country,
            organization,
            role,
            avatar,
        } => {
            let role = role
                .map(|raw| raw.parse::<UserRole>())
                .transpose()
                .map_err(|e| anyhow!(e))?;
            let update = ProfileUpdate {
                full_name,
                phone,
                address,
                city,
                country,
                organization_name: organization,
                user_role: role,
            };
            apply_update(&config, update, avatar.as_deref()).await
        }
    }
}

async fn show(config: &AppConfig, json: bool) -> Result<()> {
    let session = require_session(config).await?;

    let usecase = ProfileUseCase::new(
        auth_gateway(config)?,
        record_store(config, Some(&session))?,
        blob_store(config)?,
        SystemClock,
    );

    let (user, profile) = usecase.current(&session).await.map_err(user_facing)?;

    if json {
        let report = serde_json::json!({
            "user": user,
            "profile": profile,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("Failed to serialize profile")?
        );
        return Ok(());
    }

    println!("{} ({})", user.email, user.id);
    match profile {
        Some(profile) => {
            println!("Name:         {}", profile.full_name);
            println!("Role:         {}", profile.user_role);
            println!("City:         {}, {}", profile.city, profile.country);
            if let Some(phone) = &profile.phone {
                println!("Phone:        {}", phone);
            }
            if let Some(address) = &profile.address {
                println!("Address:      {}", address);
            }
            if let Some(organization) = &profile.organization_name {
                println!("Organization: {}", organization);
            }
            if let Some(avatar_url) = &profile.avatar_url {
                println!("Avatar:       {}", avatar_url);
            }
        }
        None => println!("No profile saved yet. Run `zerohunger profile update`."),
    }

    banner(config, &session).await;
    Ok(())
}

/// The subscription banner is informational; failures to fetch it never
/// block the profile view.
async fn banner(config: &AppConfig, session: &zerohunger_domain::Session) {
    let Ok(records) = record_store(config, Some(session)) else {
        return;
    };

    match SubscriptionUseCase::new(records, SystemClock)
        .banner(session.user_id)
        .await
    {
        Ok(BannerState::PremiumActive { plan }) => {
            println!();
            println!("{} Plan Active - enjoy unlimited access to all features", plan);
        }
        Ok(BannerState::TrialExpired) => {
            println!();
            println!("Free trial expired. Upgrade to continue using premium features.");
        }
        Ok(BannerState::TrialExpiring { days_left }) => {
            println!();
            println!(
                "Trial ending soon: {} day{} left.",
                days_left,
                if days_left == 1 { "" } else { "s" }
            );
        }
        Ok(BannerState::TrialActive { days_left }) => {
            println!();
            println!(
                "Free trial active: {} day{} remaining.",
                days_left,
                if days_left == 1 { "" } else { "s" }
            );
        }
        Ok(BannerState::Hidden) => {}
        Err(e) => {
            tracing::warn!(error = %e, "Failed to fetch subscription");
        }
    }
}

async fn apply_update(
    config: &AppConfig,
    update: ProfileUpdate,
    avatar: Option<&Path>,
) -> Result<()> {
    if update.is_empty() && avatar.is_none() {
        anyhow::bail!("Nothing to update; pass at least one field flag");
    }

    let session = require_session(config).await?;

    let usecase = ProfileUseCase::new(
        auth_gateway(config)?,
        record_store(config, Some(&session))?,
        blob_store(config)?,
        SystemClock,
    );

    if let Some(path) = avatar {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read avatar file: {}", path.display()))?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("bin")
            .to_string();

        let url = usecase
            .set_avatar(&session, bytes, &extension)
            .await
            .map_err(user_facing)?;
        println!("Profile picture uploaded successfully");
        println!("Avatar: {}", url);
    }

    if !update.is_empty() {
        let profile = usecase.update(&session, update).await.map_err(user_facing)?;
        println!("Profile updated successfully!");
        println!("Name: {} ({})", profile.full_name, profile.user_role);
    }

    Ok(())
}

fn user_facing(err: ProfileError) -> anyhow::Error {
    match err {
        ProfileError::Validation(e) => anyhow!("{}", e),
        ProfileError::Auth(e) => {
            tracing::error!(error = %e, "Auth check failed");
            anyhow!("{}", e.user_message())
        }
        ProfileError::Record(e) => {
            tracing::error!(error = %e, "Record operation failed");
            anyhow!("{}", GENERIC_FAILURE)
        }
        ProfileError::Blob(e) => {
            tracing::error!(error = %e, "Upload failed");
            anyhow!("Error uploading profile picture")
        }
    }
}
