//! Type-safe wrappers around [`ResourceClient`](resource_actor::ResourceClient).
//!
//! Each client maps framework errors back to its actor's error type, so a validation
//! failure inside an actor reaches the caller as e.g. [`MenuError::UnknownRecipe`](crate::menu_actor::MenuError::UnknownRecipe)
//! rather than a string.

pub mod menu_client;
pub mod product_client;
pub mod recipe_client;

pub use menu_client::*;
pub use product_client::*;
pub use recipe_client::*;
pub use resource_actor::ActorClient;
