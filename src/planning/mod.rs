//! Menu planning: quantity scaling, purchase orders, allergens and service sheets.
//!
//! Everything here is synchronous and side-effect free apart from `tracing` output. Functions
//! borrow recipes and catalog products, so the actors can run them directly over the
//! snapshots they fetch.
//!
//! ```
//! use recetario::model::{Ingredient, Product, ProductId, Recipe, RecipeId, SubRecipe};
//! use recetario::planning::PurchaseOrder;
//!
//! let catalog = vec![Product::new(ProductId(1), "Cebolla blanca", "kg").with_category("verduras")];
//! let sofrito = Recipe::new(RecipeId(1), "Sofrito", 4.0).with_sub_recipe(SubRecipe::new(
//!     "Base",
//!     vec![Ingredient::new("Cebolla blanca", "0.500", "kg")],
//! ));
//!
//! let order = PurchaseOrder::aggregate(&[sofrito], 8, &catalog);
//! let line = order.line("verduras", "Cebolla blanca").unwrap();
//! assert_eq!(format!("{} {}", line.quantity, line.unit), "1 kg");
//! ```

pub mod allergens;
pub mod catalog;
pub mod error;
pub mod purchase_order;
pub mod quantity;
pub mod selection;
pub mod service;

pub use allergens::{menu_allergens, recipe_allergens, AllergenMatrix, AllergenRow};
pub use catalog::CatalogIndex;
pub use error::{PlanningError, PlanningWarning, QuantityError};
pub use purchase_order::{FamilyLines, PurchaseOrder, PurchaseOrderLine};
pub use quantity::{parse_quantity, scale_quantity, scale_ratio, ScaledQuantity};
pub use selection::MenuSelection;
pub use service::{
    scale_recipe, ScaledAmount, ScaledIngredient, ScaledRecipe, ScaledSubRecipe, ServiceSheet,
};
