//! Error types for the menu actor.

use crate::catalog_actor::ProductError;
use crate::model::RecipeId;
use crate::planning::PlanningError;
use crate::recipe_actor::RecipeError;
use thiserror::Error;

/// Errors that can occur during menu operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    #[error("Menu name must not be empty")]
    EmptyName,

    /// The selection names a recipe the recipe actor does not hold.
    #[error("Unknown recipe: {0}")]
    UnknownRecipe(RecipeId),

    /// Invalid pax or a position outside the selection.
    #[error(transparent)]
    Planning(#[from] PlanningError),

    #[error("Recipe lookup failed: {0}")]
    Recipe(#[from] RecipeError),

    #[error("Catalog lookup failed: {0}")]
    Catalog(#[from] ProductError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
