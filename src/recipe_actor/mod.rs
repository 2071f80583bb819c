//! # Recipe Actor
//!
//! Owns the recipe cards. Create and update validate the name and yield, so every card
//! created through the actor can be scaled; cards restored from a backup are stored as they
//! come and the planning functions report their problems instead.
//!
//! ## Custom Actions
//!
//! - [`RecipeAction::Allergens`]: allergens of the card, first-seen order
//! - [`RecipeAction::ScaleTo`]: the card rewritten for a pax count
//!
//! ```rust,ignore
//! let allergens = recipe_client.allergens(id).await?;
//! let for_forty = recipe_client.scale(id, 40).await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Recipe;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new recipe actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Recipe>, ResourceClient<Recipe>) {
    ResourceActor::new(buffer_size)
}
