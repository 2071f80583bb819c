//! # Recetario
//!
//! Recipe cards, a product catalog and planned menus for a teaching kitchen, with the
//! computations a menu needs before service: ingredient quantities scaled to the number of
//! diners, a purchase order summed across recipes and grouped by product family, and the
//! allergens of every course.
//!
//! ## Module Tour
//!
//! ### 1. The Core ([`planning`])
//! Pure functions over borrowed recipes and products. No actors, no I/O.
//! - [`PurchaseOrder::aggregate`](planning::PurchaseOrder::aggregate): family -> ingredient -> summed line.
//! - [`scale_recipe`](planning::scale_recipe), [`ServiceSheet`](planning::ServiceSheet): recipes for a pax count.
//! - [`menu_allergens`](planning::menu_allergens), [`AllergenMatrix`](planning::AllergenMatrix).
//!
//! ### 2. The Data ([`model`])
//! Serializable structures shared by every layer, in the camelCase shape of [`backup`] documents.
//!
//! ### 3. The Actors ([`catalog_actor`], [`recipe_actor`], [`menu_actor`])
//! [`resource_actor::ActorEntity`] implementations. The menu actor gets the recipe and catalog
//! clients as its context and runs the core on what it fetches from them.
//!
//! ### 4. The Interface ([`clients`])
//! Typed wrappers such as [`MenuClient::purchase_order`](clients::MenuClient::purchase_order).
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`KitchenSystem`](lifecycle::KitchenSystem) starts and wires the actors, imports and exports
//! backups and shuts everything down.
//!
//! ## Error Handling
//!
//! Each actor has its own error enum (`ProductError`, `RecipeError`, `MenuError`) and clients
//! hand those back unchanged. Problems local to one ingredient line or one recipe never fail a
//! whole menu: they come back as [`PlanningWarning`](planning::PlanningWarning)s next to the
//! result and are logged with `tracing`.

pub mod backup;
pub mod catalog_actor;
pub mod clients;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod planning;
pub mod recipe_actor;
