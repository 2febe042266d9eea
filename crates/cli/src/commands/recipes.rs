//! Recipes command - suggest recipes from on-hand ingredients

use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use zerohunger_domain::recipes::{MatchError, UserIngredientSet, find_recipes, recipe_catalog};

use crate::args::RecipesArgs;

pub async fn execute(args: RecipesArgs, _config_path: Option<PathBuf>) -> Result<()> {
    let mut ingredients = UserIngredientSet::new();
    for raw in &args.ingredients {
        ingredients.add(raw);
    }

    tracing::debug!(count = ingredients.len(), "Collected ingredients");

    let catalog = recipe_catalog();
    let recipes = match find_recipes(&ingredients, &catalog) {
        Ok(recipes) => recipes,
        Err(MatchError::NoIngredients) => {
            bail!("Please add at least one ingredient");
        }
    };

    if args.json {
        let json =
            serde_json::to_string_pretty(&recipes).context("Failed to serialize recipes")?;
        println!("{}", json);
        return Ok(());
    }

    if recipes.is_empty() {
        println!("No recipes found. Try different ingredients!");
        return Ok(());
    }

    let plural = if recipes.len() > 1 { "s" } else { "" };
    println!(
        "Found {} recipe{} for your ingredients!",
        recipes.len(),
        plural
    );
    println!();

    for recipe in &recipes {
        println!("{} ({})", recipe.title, recipe.difficulty);
        println!("  {}", recipe.description);
        println!(
            "  {} | {} servings | rated {:.1}",
            recipe.cook_time, recipe.servings, recipe.rating
        );

        let tags: Vec<_> = recipe.ingredients.iter().map(|t| t.as_str()).collect();
        println!("  Ingredients: {}", tags.join(", "));

        println!("  Instructions:");
        for (index, step) in recipe.instructions.iter().enumerate() {
            println!("    {}. {}", index + 1, step);
        }
        println!();
    }

    Ok(())
}
