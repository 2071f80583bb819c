//! # Catalog Actor
//!
//! Owns the product catalog. Products carry the family (category) used to group purchase
//! orders, a display unit, allergens and an optional price.
//!
//! It has no dependencies (`Context = ()`) and no custom actions; everything goes through the
//! standard create/get/update/delete/list requests and `restore` for backup imports.
//!
//! ```rust
//! use recetario::catalog_actor;
//! use recetario::clients::{ActorClient, ProductClient};
//! use recetario::model::ProductCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = catalog_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_product(ProductCreate::new("Cebolla blanca", "verduras", "kg"))
//!         .await?;
//!     let product = client.get(id).await?.unwrap();
//!     assert_eq!(product.family(), "verduras");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Product;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new catalog actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
