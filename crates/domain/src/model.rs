//! Domain models and value objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;
use uuid::Uuid;

/// Role a user plays on the platform.
///
/// The role drives conditional behavior across views, so it is a closed
/// variant rather than a free-form string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Donor,
    #[default]
    Recipient,
    Volunteer,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UserRole::Donor => "donor",
            UserRole::Recipient => "recipient",
            UserRole::Volunteer => "volunteer",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "donor" => Ok(UserRole::Donor),
            "recipient" => Ok(UserRole::Recipient),
            "volunteer" => Ok(UserRole::Volunteer),
            other => Err(format!("unknown user role: {}", other)),
        }
    }
}

/// Account kind selected at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccountKind {
    Individual,
    Restaurant,
    FoodBank,
    Recipient,
}

impl AccountKind {
    /// Map the registration selection onto a platform role.
    /// Individuals, restaurants and food banks all register as donors.
    pub fn role(self) -> UserRole {
        match self {
            AccountKind::Individual | AccountKind::Restaurant | AccountKind::FoodBank => {
                UserRole::Donor
            }
            AccountKind::Recipient => UserRole::Recipient,
        }
    }

    /// Restaurants and food banks register on behalf of an organization.
    pub fn requires_organization(self) -> bool {
        matches!(self, AccountKind::Restaurant | AccountKind::FoodBank)
    }
}

impl FromStr for AccountKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "individual" => Ok(AccountKind::Individual),
            "restaurant" => Ok(AccountKind::Restaurant),
            "food-bank" | "food_bank" => Ok(AccountKind::FoodBank),
            "recipient" => Ok(AccountKind::Recipient),
            other => Err(format!("unknown account kind: {}", other)),
        }
    }
}

/// Registration form as entered by the user.
#[derive(Debug, Clone)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub kind: AccountKind,
    pub organization: Option<String>,
    pub location: String,
    pub phone: Option<String>,
}

/// Profile metadata forwarded to the collaborator as the sign-up payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileMetadata {
    pub full_name: String,
    pub user_role: UserRole,
    pub organization_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Credentials plus metadata for a sign-up call.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub metadata: ProfileMetadata,
}

/// Authenticated user as reported by the collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
    /// Present once the user has confirmed their e-mail address.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub confirmed_at: Option<OffsetDateTime>,
}

/// An issued session: the collaborator's access token plus the identity it
/// belongs to. Cached locally between commands, never minted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user_id: Uuid,
    pub email: String,
}

/// Outcome of a sign-up call.
#[derive(Debug, Clone)]
pub struct SignUp {
    pub user: AuthUser,
    /// Issued immediately when the collaborator does not require e-mail
    /// confirmation.
    pub session: Option<Session>,
}

impl SignUp {
    pub fn confirmation_pending(&self) -> bool {
        self.user.confirmed_at.is_none()
    }
}

/// A user profile record, upserted by id into the `profiles` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "id")]
    pub user_id: Uuid,
    pub full_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_city")]
    pub city: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default)]
    pub organization_name: Option<String>,
    pub user_role: UserRole,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Profile {
    /// A fresh profile with placeholder location defaults.
    pub fn new(
        user_id: Uuid,
        full_name: String,
        user_role: UserRole,
        updated_at: OffsetDateTime,
    ) -> Self {
        Self {
            user_id,
            full_name,
            phone: None,
            address: None,
            city: default_city(),
            country: default_country(),
            organization_name: None,
            user_role,
            avatar_url: None,
            updated_at,
        }
    }
}

fn default_city() -> String {
    "Nairobi".to_string()
}

fn default_country() -> String {
    "Kenya".to_string()
}

/// Edits applied to a profile. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub organization_name: Option<String>,
    pub user_role: Option<UserRole>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.city.is_none()
            && self.country.is_none()
            && self.organization_name.is_none()
            && self.user_role.is_none()
    }
}

/// Subscription lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Trial,
    Active,
    Canceled,
}

/// Subscription plan tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    Basic,
    Premium,
    Pro,
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlanKind::Basic => "basic",
            PlanKind::Premium => "premium",
            PlanKind::Pro => "pro",
        };
        write!(f, "{}", label)
    }
}

/// A subscription record from the `subscriptions` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub user_id: Uuid,
    pub status: SubscriptionStatus,
    pub plan_type: PlanKind,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub trial_ends_at: Option<OffsetDateTime>,
}

/// What the dashboard banner should show for a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerState {
    /// Paid plan active.
    PremiumActive { plan: PlanKind },
    /// Trial over, upgrade required for premium features.
    TrialExpired,
    /// Trial ends within three days.
    TrialExpiring { days_left: i64 },
    /// Trial running with time to spare.
    TrialActive { days_left: i64 },
    /// Nothing to show (no record, basic plan, canceled).
    Hidden,
}

impl BannerState {
    /// Evaluate the banner for a (possibly absent) subscription record.
    pub fn evaluate(subscription: Option<&Subscription>, now: OffsetDateTime) -> Self {
        let Some(sub) = subscription else {
            return BannerState::Hidden;
        };

        match sub.status {
            SubscriptionStatus::Active if sub.plan_type != PlanKind::Basic => {
                BannerState::PremiumActive {
                    plan: sub.plan_type,
                }
            }
            SubscriptionStatus::Trial => {
                // A trial without an end date counts as already over.
                let days_left = sub
                    .trial_ends_at
                    .map(|end| days_until(now, end))
                    .unwrap_or(0);
                if days_left <= 0 {
                    BannerState::TrialExpired
                } else if days_left <= 3 {
                    BannerState::TrialExpiring { days_left }
                } else {
                    BannerState::TrialActive { days_left }
                }
            }
            _ => BannerState::Hidden,
        }
    }
}

/// Whole days remaining until `end`, rounded up, never negative.
fn days_until(now: OffsetDateTime, end: OffsetDateTime) -> i64 {
    let secs = (end - now).whole_seconds();
    if secs <= 0 {
        0
    } else {
        (secs as u64).div_ceil(86_400) as i64
    }
}

/// Category of donated food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FoodType {
    FreshProduce,
    PreparedMeals,
    PackagedGoods,
    Dairy,
    MeatPoultry,
    BakeryItems,
    Beverages,
    Other,
}

impl fmt::Display for FoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FoodType::FreshProduce => "Fresh Produce",
            FoodType::PreparedMeals => "Prepared Meals",
            FoodType::PackagedGoods => "Packaged Goods",
            FoodType::Dairy => "Dairy",
            FoodType::MeatPoultry => "Meat & Poultry",
            FoodType::BakeryItems => "Bakery Items",
            FoodType::Beverages => "Beverages",
            FoodType::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for FoodType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fresh-produce" | "fresh_produce" => Ok(FoodType::FreshProduce),
            "prepared-meals" | "prepared_meals" => Ok(FoodType::PreparedMeals),
            "packaged-goods" | "packaged_goods" => Ok(FoodType::PackagedGoods),
            "dairy" => Ok(FoodType::Dairy),
            "meat-poultry" | "meat_poultry" => Ok(FoodType::MeatPoultry),
            "bakery-items" | "bakery_items" => Ok(FoodType::BakeryItems),
            "beverages" => Ok(FoodType::Beverages),
            "other" => Ok(FoodType::Other),
            other => Err(format!("unknown food type: {}", other)),
        }
    }
}

/// Dietary tags offered as one-click suggestions on the donation form.
pub const COMMON_DIETARY_TAGS: &[&str] = &[
    "Vegetarian",
    "Vegan",
    "Gluten-Free",
    "Halal",
    "Kosher",
    "Organic",
    "Fresh",
    "Cooked",
    "Packaged",
    "Frozen",
];

/// A donation listing as entered on the donation form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub food_type: FoodType,
    pub quantity: String,
    /// Forwarded verbatim as entered (`YYYY-MM-DD`); no date math happens
    /// on this side of the boundary.
    #[serde(default)]
    pub expiry_date: Option<String>,
    pub location: String,
    pub contact_info: String,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
}

impl DonationDraft {
    /// Append a dietary tag unless it is blank or already present.
    pub fn add_dietary_tag(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.is_empty() || self.dietary_tags.iter().any(|t| t == tag) {
            return;
        }
        self.dietary_tags.push(tag.to_string());
    }

    /// Remove a dietary tag; absent tags are a no-op.
    pub fn remove_dietary_tag(&mut self, tag: &str) {
        self.dietary_tags.retain(|t| t != tag.trim());
    }
}

/// A donation listing stamped for storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationRecord {
    pub id: Uuid,
    pub donor_id: Uuid,
    #[serde(flatten)]
    pub draft: DonationDraft,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Filter inputs collected on the find-food board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFilter {
    pub location: String,
    pub food_type: Option<FoodType>,
    pub radius_km: u32,
}

impl Default for ListingFilter {
    fn default() -> Self {
        Self {
            location: String::new(),
            food_type: None,
            radius_km: 5,
        }
    }
}

/// A food listing shown on the find-food board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodListing {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub donor: String,
    pub location: String,
    pub quantity: String,
    pub posted: String,
    pub expires_in: String,
    pub dietary_tags: Vec<String>,
    pub food_type: FoodType,
    pub available: bool,
}

/// The fixed listing board shown to recipients.
pub fn listing_catalog() -> Vec<FoodListing> {
    vec![
        FoodListing {
            id: 1,
            title: "Fresh Vegetables & Fruits".to_string(),
            description: "Surplus produce from local restaurant. Perfect for families or food banks."
                .to_string(),
            donor: "Green Garden Restaurant".to_string(),
            location: "Downtown, 2.3 km away".to_string(),
            quantity: "20-25 servings".to_string(),
            posted: "2 hours ago".to_string(),
            expires_in: "Today".to_string(),
            dietary_tags: vec![
                "Vegetarian".to_string(),
                "Vegan".to_string(),
                "Fresh".to_string(),
                "Organic".to_string(),
            ],
            food_type: FoodType::FreshProduce,
            available: true,
        },
        FoodListing {
            id: 2,
            title: "Cooked Meals Ready to Serve".to_string(),
            description: "Prepared lunch portions including rice, curry, and bread. Still warm!"
                .to_string(),
            donor: "Spice Corner Cafe".to_string(),
            location: "City Center, 1.8 km away".to_string(),
            quantity: "15 servings".to_string(),
            posted: "30 minutes ago".to_string(),
            expires_in: "2 hours".to_string(),
            dietary_tags: vec![
                "Vegetarian".to_string(),
                "Cooked".to_string(),
                "Halal".to_string(),
            ],
            food_type: FoodType::PreparedMeals,
            available: true,
        },
        FoodListing {
            id: 3,
            title: "Packaged Groceries".to_string(),
            description: "Canned goods, pasta, and dry ingredients nearing expiry but still good."
                .to_string(),
            donor: "Community Food Bank".to_string(),
            location: "Westside, 4.1 km away".to_string(),
            quantity: "50+ items".to_string(),
            posted: "1 hour ago".to_string(),
            expires_in: "3 days".to_string(),
            dietary_tags: vec!["Packaged".to_string(), "Long-lasting".to_string()],
            food_type: FoodType::PackagedGoods,
            available: true,
        },
        FoodListing {
            id: 4,
            title: "Bakery Items - End of Day".to_string(),
            description: "Fresh bread, pastries, and baked goods from today's batch.".to_string(),
            donor: "Sunrise Bakery".to_string(),
            location: "Market Street, 3.2 km away".to_string(),
            quantity: "30+ items".to_string(),
            posted: "4 hours ago".to_string(),
            expires_in: "Tomorrow morning".to_string(),
            dietary_tags: vec!["Fresh".to_string(), "Vegetarian".to_string()],
            food_type: FoodType::BakeryItems,
            available: true,
        },
    ]
}

/// Community-wide aggregate impact figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpactSnapshot {
    pub total_meals: u32,
    pub people_helped: u32,
    pub food_saved_tons: f64,
    pub co2_reduced_tons: f64,
    pub active_donors: u32,
    pub active_recipients: u32,
    pub partner_organizations: u32,
}

impl ImpactSnapshot {
    /// The current community snapshot.
    pub fn community() -> Self {
        Self {
            total_meals: 15_420,
            people_helped: 3_840,
            food_saved_tons: 12.3,
            co2_reduced_tons: 18.7,
            active_donors: 245,
            active_recipients: 892,
            partner_organizations: 34,
        }
    }

    /// Progress toward the published community goals.
    pub fn milestones(&self) -> Vec<Milestone> {
        vec![
            Milestone {
                label: "Meals Provided".to_string(),
                current: f64::from(self.total_meals),
                target: 20_000.0,
            },
            Milestone {
                label: "People Helped".to_string(),
                current: f64::from(self.people_helped),
                target: 5_000.0,
            },
            Milestone {
                label: "Tons Food Saved".to_string(),
                current: self.food_saved_tons,
                target: 15.0,
            },
            Milestone {
                label: "Tons CO2 Reduced".to_string(),
                current: self.co2_reduced_tons,
                target: 25.0,
            },
        ]
    }
}

/// One goal with progress toward it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub label: String,
    pub current: f64,
    pub target: f64,
}

impl Milestone {
    /// Completion percentage, capped at 100.
    pub fn percent(&self) -> f64 {
        if self.target <= 0.0 {
            return 100.0;
        }
        (self.current / self.target * 100.0).min(100.0)
    }
}

/// Kind of activity shown in the recent-activity feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Donation,
    Match,
    Pickup,
}

/// One entry in the recent-activity feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub title: String,
    pub donor: String,
    pub recipient: String,
    pub amount: String,
    pub time_ago: String,
    pub location: String,
}

/// The recent activity feed shown on the impact page.
pub fn recent_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            kind: ActivityKind::Donation,
            title: "Fresh vegetables donated".to_string(),
            donor: "Green Garden Restaurant".to_string(),
            recipient: "Downtown Food Bank".to_string(),
            amount: "25 servings".to_string(),
            time_ago: "2 hours ago".to_string(),
            location: "Downtown".to_string(),
        },
        ActivityEntry {
            kind: ActivityKind::Match,
            title: "Cooked meals matched".to_string(),
            donor: "Spice Corner Cafe".to_string(),
            recipient: "Family Support Center".to_string(),
            amount: "15 servings".to_string(),
            time_ago: "4 hours ago".to_string(),
            location: "City Center".to_string(),
        },
        ActivityEntry {
            kind: ActivityKind::Pickup,
            title: "Bakery items collected".to_string(),
            donor: "Sunrise Bakery".to_string(),
            recipient: "Community Kitchen".to_string(),
            amount: "30+ items".to_string(),
            time_ago: "6 hours ago".to_string(),
            location: "Market Street".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn trial_sub(ends_at: Option<OffsetDateTime>) -> Subscription {
        Subscription {
            user_id: Uuid::nil(),
            status: SubscriptionStatus::Trial,
            plan_type: PlanKind::Basic,
            trial_ends_at: ends_at,
        }
    }

    #[test]
    fn account_kind_maps_to_roles() {
        assert_eq!(AccountKind::Individual.role(), UserRole::Donor);
        assert_eq!(AccountKind::Restaurant.role(), UserRole::Donor);
        assert_eq!(AccountKind::FoodBank.role(), UserRole::Donor);
        assert_eq!(AccountKind::Recipient.role(), UserRole::Recipient);
    }

    #[test]
    fn organization_required_for_businesses_only() {
        assert!(AccountKind::Restaurant.requires_organization());
        assert!(AccountKind::FoodBank.requires_organization());
        assert!(!AccountKind::Individual.requires_organization());
        assert!(!AccountKind::Recipient.requires_organization());
    }

    #[test]
    fn banner_hidden_without_subscription() {
        let now = datetime!(2025-06-01 12:00 UTC);
        assert_eq!(BannerState::evaluate(None, now), BannerState::Hidden);
    }

    #[test]
    fn banner_premium_for_active_paid_plan() {
        let now = datetime!(2025-06-01 12:00 UTC);
        let sub = Subscription {
            user_id: Uuid::nil(),
            status: SubscriptionStatus::Active,
            plan_type: PlanKind::Premium,
            trial_ends_at: None,
        };
        assert_eq!(
            BannerState::evaluate(Some(&sub), now),
            BannerState::PremiumActive {
                plan: PlanKind::Premium
            }
        );
    }

    #[test]
    fn banner_hidden_for_active_basic_plan() {
        let now = datetime!(2025-06-01 12:00 UTC);
        let sub = Subscription {
            user_id: Uuid::nil(),
            status: SubscriptionStatus::Active,
            plan_type: PlanKind::Basic,
            trial_ends_at: None,
        };
        assert_eq!(BannerState::evaluate(Some(&sub), now), BannerState::Hidden);
    }

    #[test]
    fn banner_trial_states_by_days_left() {
        let now = datetime!(2025-06-01 12:00 UTC);

        let active = trial_sub(Some(datetime!(2025-06-11 12:00 UTC)));
        assert_eq!(
            BannerState::evaluate(Some(&active), now),
            BannerState::TrialActive { days_left: 10 }
        );

        let expiring = trial_sub(Some(datetime!(2025-06-03 12:00 UTC)));
        assert_eq!(
            BannerState::evaluate(Some(&expiring), now),
            BannerState::TrialExpiring { days_left: 2 }
        );

        let expired = trial_sub(Some(datetime!(2025-05-20 12:00 UTC)));
        assert_eq!(
            BannerState::evaluate(Some(&expired), now),
            BannerState::TrialExpired
        );
    }

    #[test]
    fn banner_trial_without_end_date_is_expired() {
        let now = datetime!(2025-06-01 12:00 UTC);
        let sub = trial_sub(None);
        assert_eq!(
            BannerState::evaluate(Some(&sub), now),
            BannerState::TrialExpired
        );
    }

    #[test]
    fn partial_trial_day_rounds_up() {
        let now = datetime!(2025-06-01 12:00 UTC);
        // 36 hours left counts as two days.
        let sub = trial_sub(Some(datetime!(2025-06-03 00:00 UTC)));
        assert_eq!(
            BannerState::evaluate(Some(&sub), now),
            BannerState::TrialExpiring { days_left: 2 }
        );
    }

    #[test]
    fn dietary_tag_add_is_idempotent() {
        let mut draft = DonationDraft {
            title: "Bread".to_string(),
            description: String::new(),
            food_type: FoodType::BakeryItems,
            quantity: "10 items".to_string(),
            expiry_date: None,
            location: "Market Street".to_string(),
            contact_info: "555-0100".to_string(),
            dietary_tags: vec![],
        };

        draft.add_dietary_tag("Fresh");
        draft.add_dietary_tag("Fresh");
        draft.add_dietary_tag("  ");
        assert_eq!(draft.dietary_tags, vec!["Fresh".to_string()]);

        draft.remove_dietary_tag("Fresh");
        draft.remove_dietary_tag("Fresh");
        assert!(draft.dietary_tags.is_empty());
    }

    #[test]
    fn common_tags_are_valid_additions() {
        let mut draft = DonationDraft {
            title: "Mixed".to_string(),
            description: String::new(),
            food_type: FoodType::Other,
            quantity: "1 box".to_string(),
            expiry_date: None,
            location: "Downtown".to_string(),
            contact_info: "555-0100".to_string(),
            dietary_tags: vec![],
        };
        for tag in COMMON_DIETARY_TAGS {
            draft.add_dietary_tag(tag);
        }
        assert_eq!(draft.dietary_tags.len(), COMMON_DIETARY_TAGS.len());
    }

    #[test]
    fn food_type_parses_kebab_case() {
        assert_eq!(
            "fresh-produce".parse::<FoodType>().unwrap(),
            FoodType::FreshProduce
        );
        assert_eq!(
            "bakery-items".parse::<FoodType>().unwrap(),
            FoodType::BakeryItems
        );
        assert!("sushi".parse::<FoodType>().is_err());
    }

    #[test]
    fn listing_catalog_is_stable() {
        let listings = listing_catalog();
        assert_eq!(listings.len(), 4);
        assert_eq!(listings[0].title, "Fresh Vegetables & Fruits");
        assert!(listings.iter().all(|l| l.available));
    }

    #[test]
    fn milestone_percent_is_capped() {
        let m = Milestone {
            label: "Meals".to_string(),
            current: 30_000.0,
            target: 20_000.0,
        };
        assert_eq!(m.percent(), 100.0);
    }
}
