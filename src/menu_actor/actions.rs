//! Custom actions for the menu actor.
//!
//! Selection edits (`AddRecipe` to `SetPax`) change the stored menu; the rest compute from a
//! snapshot of the recipe and catalog actors and leave it as it is.

use crate::model::{Allergen, RecipeId};
use crate::planning::{AllergenMatrix, PurchaseOrder, ServiceSheet};

/// Custom actions for Menu entities.
#[derive(Debug, Clone)]
pub enum MenuAction {
    /// Appends a recipe after checking the recipe actor holds it. Repeats are allowed.
    AddRecipe(RecipeId),
    /// Removes the entry at a position.
    Remove(usize),
    /// Moves the entry at a position one place earlier. No-op on the first entry.
    MoveUp(usize),
    /// Moves the entry at a position one place later. No-op on the last entry.
    MoveDown(usize),
    SetPax(u32),
    PurchaseOrder,
    Allergens,
    AllergenMatrix,
    ServiceSheet,
}

/// Results from MenuActions; variants match 1:1 with MenuAction.
#[derive(Debug, Clone)]
pub enum MenuActionResult {
    AddRecipe(()),
    Remove(RecipeId),
    /// `false` when nothing moved.
    MoveUp(bool),
    MoveDown(bool),
    SetPax(()),
    PurchaseOrder(PurchaseOrder),
    Allergens(Vec<Allergen>),
    AllergenMatrix(AllergenMatrix),
    ServiceSheet(ServiceSheet),
}
