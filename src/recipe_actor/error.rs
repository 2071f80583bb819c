//! Error types for the recipe actor.

use crate::planning::PlanningError;
use thiserror::Error;

/// Errors that can occur during recipe operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecipeError {
    #[error("Recipe name must not be empty")]
    EmptyName,

    /// Yields are divisors when scaling, so they must be positive and finite.
    #[error("Invalid yield quantity: {0}")]
    InvalidYield(f64),

    #[error(transparent)]
    Planning(#[from] PlanningError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
