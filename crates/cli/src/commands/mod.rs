//! Command implementations and shared wiring helpers

pub mod auth;
pub mod config;
pub mod doctor;
pub mod donate;
pub mod impact;
pub mod listings;
pub mod profile;
pub mod recipes;

use anyhow::{Context, Result, bail};
use secrecy::SecretString;
use std::time::Duration;
use zerohunger_adapters::{FsSessionStore, HttpAuthGateway, HttpBlobStore, HttpRecordStore};
use zerohunger_domain::{Session, SessionStore};

use crate::config::AppConfig;

/// Generic failure notice; specific causes get tailored messages upstream.
pub(crate) const GENERIC_FAILURE: &str = "The operation failed. Please try again.";

pub(crate) fn load_api_key(config: &AppConfig) -> Result<SecretString> {
    let env_var = config.backend.api_key_env.trim();
    if env_var.is_empty() {
        bail!("No API key env var configured for the backend");
    }

    let key = std::env::var(env_var)
        .with_context(|| format!("Missing backend API key env var {}", env_var))?;

    if key.trim().is_empty() {
        bail!("Backend API key env var {} is empty", env_var);
    }

    Ok(SecretString::new(key.into()))
}

fn require_base_url(config: &AppConfig) -> Result<String> {
    let base_url = config.backend.base_url.trim();
    if base_url.is_empty() {
        bail!(
            "No backend base_url configured. Run `zerohunger config init` and fill in [backend]."
        );
    }
    Ok(base_url.to_string())
}

pub(crate) fn auth_gateway(config: &AppConfig) -> Result<HttpAuthGateway> {
    Ok(HttpAuthGateway::with_timeout(
        require_base_url(config)?,
        load_api_key(config)?,
        Duration::from_secs(config.backend.timeout_secs),
    ))
}

pub(crate) fn record_store(
    config: &AppConfig,
    session: Option<&Session>,
) -> Result<HttpRecordStore> {
    let store = HttpRecordStore::with_timeout(
        require_base_url(config)?,
        load_api_key(config)?,
        Duration::from_secs(config.backend.timeout_secs),
    );

    Ok(match session {
        Some(session) => store.with_access_token(session.access_token.clone()),
        None => store,
    })
}

pub(crate) fn blob_store(config: &AppConfig) -> Result<HttpBlobStore> {
    Ok(HttpBlobStore::with_timeout(
        require_base_url(config)?,
        load_api_key(config)?,
        config.backend.avatar_bucket.clone(),
        Duration::from_secs(config.backend.timeout_secs),
    ))
}

pub(crate) fn session_store(config: &AppConfig) -> FsSessionStore {
    FsSessionStore::new(config.general.session_path.clone())
}

/// Load the cached session or tell the user to sign in.
pub(crate) async fn require_session(config: &AppConfig) -> Result<Session> {
    let cached = session_store(config)
        .load()
        .await
        .context("Failed to read the session cache")?;

    match cached {
        Some(session) => Ok(session),
        None => bail!("Not signed in. Run `zerohunger auth login` first."),
    }
}
