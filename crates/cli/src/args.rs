//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// zerohunger: share surplus food, find donations, and get recipe ideas
#[derive(Parser, Debug)]
#[command(name = "zerohunger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register, sign in and out, and inspect the current session
    Auth(AuthArgs),

    /// Post a food donation listing
    Donate(DonateArgs),

    /// Browse available food donations
    Listings(ListingsArgs),

    /// Suggest recipes from the ingredients you have
    Recipes(RecipesArgs),

    /// Show community impact statistics
    Impact(ImpactArgs),

    /// View and edit your profile
    Profile(ProfileArgs),

    /// Configuration management
    Config(ConfigArgs),

    /// Validate configuration and show status
    Doctor(DoctorArgs),
}

#[derive(Args, Debug)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommands,
}

#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Create a new account
    Register {
        /// Your full name
        #[arg(long)]
        full_name: String,

        /// E-mail address
        #[arg(long)]
        email: String,

        /// Password (at least 6 characters)
        #[arg(long)]
        password: String,

        /// Password confirmation; must match --password
        #[arg(long)]
        confirm_password: String,

        /// Account kind: individual, restaurant, food-bank, recipient
        #[arg(long)]
        kind: String,

        /// Organization name (required for restaurant and food-bank)
        #[arg(long)]
        organization: Option<String>,

        /// Your city or area
        #[arg(long)]
        location: String,

        /// Phone number for coordination
        #[arg(long)]
        phone: Option<String>,
    },

    /// Sign in with e-mail and password
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Sign out and drop the cached session
    Logout,

    /// Show who is currently signed in
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct DonateArgs {
    /// Short title, e.g. "Fresh vegetables from restaurant"
    #[arg(long)]
    pub title: String,

    /// Free-form description of the food and its condition
    #[arg(long, default_value = "")]
    pub description: String,

    /// Food type: fresh-produce, prepared-meals, packaged-goods, dairy,
    /// meat-poultry, bakery-items, beverages, other
    #[arg(long)]
    pub food_type: String,

    /// Quantity, e.g. "20 servings", "5kg", "10 items"
    #[arg(long)]
    pub quantity: String,

    /// Expiry date (YYYY-MM-DD)
    #[arg(long)]
    pub expiry_date: Option<String>,

    /// Pickup address or landmark
    #[arg(long)]
    pub location: String,

    /// Phone number or e-mail for coordination
    #[arg(long)]
    pub contact_info: String,

    /// Dietary tag, repeatable (e.g. --tag Vegetarian --tag Fresh)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Output the stored record as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ListingsArgs {
    /// Your location (collected, not yet applied to results)
    #[arg(long)]
    pub location: Option<String>,

    /// Food type filter (collected, not yet applied to results)
    #[arg(long)]
    pub food_type: Option<String>,

    /// Search radius in km (collected, not yet applied to results)
    #[arg(long)]
    pub radius_km: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct RecipesArgs {
    /// Ingredient you have on hand, repeatable
    #[arg(long = "ingredient")]
    pub ingredients: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ImpactArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommands,
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Show the signed-in user's profile
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Update profile fields; omitted flags keep their stored values
    Update {
        #[arg(long)]
        full_name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        city: Option<String>,

        #[arg(long)]
        country: Option<String>,

        #[arg(long)]
        organization: Option<String>,

        /// Role: donor, recipient, volunteer
        #[arg(long)]
        role: Option<String>,

        /// Image file to upload as the profile picture (max 5 MB)
        #[arg(long)]
        avatar: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Init {
        /// Path to write config file
        #[arg(long, default_value = "./config.toml")]
        path: PathBuf,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
