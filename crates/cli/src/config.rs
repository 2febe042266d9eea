//! Configuration loading and management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Where the signed-in session is cached between commands.
    #[serde(default = "default_session_path")]
    pub session_path: PathBuf,
}

/// The managed backend collaborator providing auth, record collections and
/// blob storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Project base URL, e.g. https://myproject.backend.example
    #[serde(default)]
    pub base_url: String,

    /// Env var holding the project API key (never stored in the file).
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Bucket for donation and avatar images.
    #[serde(default = "default_avatar_bucket")]
    pub avatar_bucket: String,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_session_path() -> PathBuf {
    PathBuf::from("./session.json")
}

fn default_api_key_env() -> String {
    "ZEROHUNGER_API_KEY".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_avatar_bucket() -> String {
    "donation-images".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            session_path: default_session_path(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout(),
            avatar_bucket: default_avatar_bucket(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        // Try default config path if none specified
        let default_path = PathBuf::from("./config.toml");
        let path = config_path.unwrap_or(&default_path);

        if path.exists() {
            builder = builder.add_source(config::File::from(path));
        } else if config_path.is_some() {
            // User specified a path that doesn't exist
            anyhow::bail!("Config file not found: {}", path.display());
        }

        // Add environment variable overrides
        builder = builder.add_source(
            config::Environment::with_prefix("ZEROHUNGER")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Generate example configuration as TOML string
    pub fn example_toml() -> String {
        r#"# zerohunger configuration

[general]
log_level = "info"
session_path = "./session.json"

[backend]
# Project base URL of the managed backend (auth, records, storage)
base_url = "https://myproject.backend.example"
# Env var holding the project API key; the key itself never lives here
api_key_env = "ZEROHUNGER_API_KEY"
timeout_secs = 30
avatar_bucket = "donation-images"
"#
        .to_string()
    }
}
