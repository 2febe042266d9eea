//! Recipe suggestions from self-reported ingredients
//!
//! Matching is a stable filter over a fixed in-process catalog: a recipe is
//! suggested when any of its ingredient tags and any user ingredient are
//! related by substring containment in either direction. There is no
//! ranking and no fuzzy matching.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized (trimmed, lower-cased) ingredient token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientTag(String);

impl IngredientTag {
    /// Normalize raw input into a tag. Returns `None` when nothing is left
    /// after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Bidirectional substring containment: "veg" overlaps "vegetables"
    /// and vice versa. Both sides are already normalized.
    pub fn overlaps(&self, other: &IngredientTag) -> bool {
        self.0.contains(&other.0) || other.0.contains(&self.0)
    }
}

impl fmt::Display for IngredientTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ingredients a user has on hand, in the order they were entered.
/// Set semantics: duplicates are rejected, insertion order is preserved.
#[derive(Debug, Clone, Default)]
pub struct UserIngredientSet {
    tags: Vec<IngredientTag>,
}

impl UserIngredientSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an ingredient. Blank input and duplicates are no-ops; returns
    /// whether the set changed.
    pub fn add(&mut self, raw: &str) -> bool {
        let Some(tag) = IngredientTag::new(raw) else {
            return false;
        };
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Remove an ingredient by its normalized form; absent tags are a no-op.
    pub fn remove(&mut self, raw: &str) {
        if let Some(tag) = IngredientTag::new(raw) {
            self.tags.retain(|t| t != &tag);
        }
    }

    pub fn tags(&self) -> &[IngredientTag] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }
}

impl FromIterator<String> for UserIngredientSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = Self::new();
        for raw in iter {
            set.add(&raw);
        }
        set
    }
}

/// Cooking difficulty label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{}", label)
    }
}

/// A catalog recipe. Immutable, process-lifetime data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeEntry {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub cook_time: String,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub rating: f64,
    pub ingredients: Vec<IngredientTag>,
    pub instructions: Vec<String>,
}

impl RecipeEntry {
    /// Whether any catalog tag overlaps any user ingredient.
    fn matches(&self, ingredients: &UserIngredientSet) -> bool {
        self.ingredients
            .iter()
            .any(|tag| ingredients.tags().iter().any(|user| tag.overlaps(user)))
    }
}

/// Matching failed before it could run.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("at least one ingredient is required")]
    NoIngredients,
}

/// Filter the catalog down to recipes relevant to the user's ingredients.
///
/// The result preserves catalog order and may be empty; an empty ingredient
/// set is a validation failure, not an empty result.
pub fn find_recipes(
    ingredients: &UserIngredientSet,
    catalog: &[RecipeEntry],
) -> Result<Vec<RecipeEntry>, MatchError> {
    if ingredients.is_empty() {
        return Err(MatchError::NoIngredients);
    }

    Ok(catalog
        .iter()
        .filter(|recipe| recipe.matches(ingredients))
        .cloned()
        .collect())
}

fn tags(raw: &[&str]) -> Vec<IngredientTag> {
    raw.iter()
        .filter_map(|r| IngredientTag::new(r))
        .collect()
}

/// The fixed recipe catalog.
pub fn recipe_catalog() -> Vec<RecipeEntry> {
    vec![
        RecipeEntry {
            id: 1,
            title: "Vegetable Stir Fry".to_string(),
            description: "A quick and healthy stir fry using fresh vegetables and simple seasonings."
                .to_string(),
            cook_time: "15 mins".to_string(),
            servings: 4,
            difficulty: Difficulty::Easy,
            rating: 4.5,
            ingredients: tags(&["vegetables", "rice", "soy sauce"]),
            instructions: vec![
                "Heat oil in a large pan or wok".to_string(),
                "Add vegetables and stir fry for 5-7 minutes".to_string(),
                "Add soy sauce and seasonings".to_string(),
                "Serve over rice".to_string(),
            ],
        },
        RecipeEntry {
            id: 2,
            title: "Chicken and Rice Bowl".to_string(),
            description: "Nutritious bowl with seasoned chicken, fluffy rice, and colorful vegetables."
                .to_string(),
            cook_time: "25 mins".to_string(),
            servings: 3,
            difficulty: Difficulty::Medium,
            rating: 4.8,
            ingredients: tags(&["chicken", "rice", "vegetables"]),
            instructions: vec![
                "Season and cook chicken until golden".to_string(),
                "Prepare rice according to package instructions".to_string(),
                "Steam or saute vegetables".to_string(),
                "Assemble bowl and serve".to_string(),
            ],
        },
        RecipeEntry {
            id: 3,
            title: "Simple Pasta Primavera".to_string(),
            description: "Light pasta dish with fresh seasonal vegetables and parmesan cheese."
                .to_string(),
            cook_time: "20 mins".to_string(),
            servings: 4,
            difficulty: Difficulty::Easy,
            rating: 4.3,
            ingredients: tags(&["pasta", "vegetables", "cheese"]),
            instructions: vec![
                "Cook pasta according to package directions".to_string(),
                "Saute vegetables until tender-crisp".to_string(),
                "Toss pasta with vegetables and olive oil".to_string(),
                "Top with grated cheese and serve".to_string(),
            ],
        },
    ]
}
