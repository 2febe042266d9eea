//! Auth command - registration, login, logout, whoami

use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;
use time::format_description::well_known::Rfc3339;
use zerohunger_domain::usecases::{AuthFlowError, AuthUseCase};
use zerohunger_domain::{AccountKind, AuthGateway, Registration};

use crate::args::{AuthArgs, AuthCommands};
use crate::commands::{GENERIC_FAILURE, auth_gateway, require_session, session_store};
use crate::config::AppConfig;

pub async fn execute(args: AuthArgs, config_path: Option<PathBuf>) -> Result<()> {
    let config = AppConfig::load(config_path.as_deref()).unwrap_or_default();

    match args.command {
        AuthCommands::Register {
            full_name,
            email,
            password,
            confirm_password,
            kind,
            organization,
            location,
            phone,
        } => {
            let kind: AccountKind = kind.parse().map_err(|e: String| anyhow!(e))?;
            let form = Registration {
                full_name,
                email,
                password,
                confirm_password,
                kind,
                organization,
                location,
                phone,
            };
            register(&config, &form).await
        }
        AuthCommands::Login { email, password } => login(&config, &email, &password).await,
        AuthCommands::Logout => logout(&config).await,
        AuthCommands::Whoami { json } => whoami(&config, json).await,
    }
}

async fn register(config: &AppConfig, form: &Registration) -> Result<()> {
    let usecase = AuthUseCase::new(auth_gateway(config)?, session_store(config));

    let outcome = usecase.register(form).await.map_err(user_facing)?;

    if outcome.confirmation_pending {
        println!(
            "Registration successful! Please check your email to verify your account before logging in."
        );
    } else {
        println!("Registration successful! You can now login.");
    }
    println!("Account: {} ({})", outcome.email, outcome.user_id);

    Ok(())
}

async fn login(config: &AppConfig, email: &str, password: &str) -> Result<()> {
    let usecase = AuthUseCase::new(auth_gateway(config)?, session_store(config));

    let session = usecase.login(email, password).await.map_err(user_facing)?;

    println!("Login successful! Welcome back.");
    println!("Signed in as {}", session.email);

    Ok(())
}

async fn logout(config: &AppConfig) -> Result<()> {
    let usecase = AuthUseCase::new(auth_gateway(config)?, session_store(config));

    if usecase.logout().await.map_err(user_facing)? {
        println!("Logged out successfully");
    } else {
        println!("No active session.");
    }

    Ok(())
}

async fn whoami(config: &AppConfig, json: bool) -> Result<()> {
    let session = require_session(config).await?;

    let user = auth_gateway(config)?
        .current_user(&session.access_token)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to resolve current user");
            anyhow!("{}", e.user_message())
        })?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&user).context("Failed to serialize user")?
        );
        return Ok(());
    }

    println!("Signed in as {} ({})", user.email, user.id);
    match user.confirmed_at {
        Some(at) => println!(
            "Email confirmed at {}",
            at.format(&Rfc3339).unwrap_or_else(|_| at.to_string())
        ),
        None => println!("Email not yet confirmed"),
    }

    Ok(())
}

/// Collapse a flow error into the message shown to the user. Known
/// collaborator causes keep their tailored text; anything unexpected is
/// logged and reported generically.
pub(crate) fn user_facing(err: AuthFlowError) -> anyhow::Error {
    match err {
        AuthFlowError::Validation(e) => anyhow!("{}", e),
        AuthFlowError::Auth(e) => {
            tracing::error!(error = %e, "Auth operation failed");
            anyhow!("{}", e.user_message())
        }
        AuthFlowError::Session(e) => {
            tracing::error!(error = %e, "Session cache failure");
            anyhow!("{}", GENERIC_FAILURE)
        }
    }
}
