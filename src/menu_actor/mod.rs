//! # Menu Actor
//!
//! Owns the planned menus: a name plus a [`MenuSelection`](crate::planning::MenuSelection)
//! (ordered recipe references and a pax count).
//!
//! ## Dependencies
//!
//! The actor is started with `(RecipeClient, ProductClient)` as its context:
//!
//! ```rust,ignore
//! let menu_handle = tokio::spawn(menu_actor.run((recipe_client.clone(), product_client.clone())));
//! ```
//!
//! Neither dependency holds a menu client, so shutdown by dropping clients terminates.
//!
//! ## Custom Actions
//!
//! Selection edits: [`MenuAction::AddRecipe`], [`MenuAction::Remove`], [`MenuAction::MoveUp`],
//! [`MenuAction::MoveDown`], [`MenuAction::SetPax`].
//!
//! Planning, computed on a fresh snapshot of both dependencies:
//! [`MenuAction::PurchaseOrder`], [`MenuAction::Allergens`], [`MenuAction::AllergenMatrix`],
//! [`MenuAction::ServiceSheet`].

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Menu;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new menu actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Menu>, ResourceClient<Menu>) {
    ResourceActor::new(buffer_size)
}
