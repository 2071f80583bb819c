//! Custom actions for the recipe actor.
//!
//! Both are read-only: they compute from the stored card without changing it.

use crate::model::Allergen;
use crate::planning::ScaledRecipe;

/// Custom actions for Recipe entities.
#[derive(Debug, Clone)]
pub enum RecipeAction {
    /// Distinct allergens across every ingredient line, first-seen order.
    Allergens,
    /// Rewrites the card for the given pax count.
    ScaleTo(u32),
}

/// Results from RecipeActions; variants match 1:1 with RecipeAction.
#[derive(Debug, Clone)]
pub enum RecipeActionResult {
    Allergens(Vec<Allergen>),
    ScaleTo(ScaledRecipe),
}
