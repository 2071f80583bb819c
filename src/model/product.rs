//! Catalog products: what the kitchen buys.
//!
//! Managed by the catalog actor; see [`crate::catalog_actor`].

use super::Allergen;
use serde::{Deserialize, Serialize};

entity_id!(ProductId, "product");

/// Family used for purchase-order lines whose product is unknown or uncategorized.
pub const DEFAULT_FAMILY: &str = "Otros";

/// A product in the catalog.
///
/// Recipes reference products by `name` only (exact string), so renaming or deleting a
/// product never touches a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub allergens: Vec<Allergen>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: None,
            unit: unit.into(),
            allergens: Vec::new(),
            price: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_allergens(mut self, allergens: impl IntoIterator<Item = Allergen>) -> Self {
        self.allergens = allergens.into_iter().collect();
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// The purchase-order family: the category, or [`DEFAULT_FAMILY`] when it is missing
    /// or empty.
    pub fn family(&self) -> &str {
        match self.category.as_deref() {
            Some(category) if !category.is_empty() => category,
            _ => DEFAULT_FAMILY,
        }
    }
}

/// Payload for adding a product to the catalog.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub category: Option<String>,
    pub unit: String,
    pub allergens: Vec<Allergen>,
    pub price: Option<f64>,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, category: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: Some(category.into()),
            unit: unit.into(),
            allergens: Vec::new(),
            price: None,
        }
    }
}

/// Partial update of a catalog product; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub unit: Option<String>,
    pub allergens: Option<Vec<Allergen>>,
    pub price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_defaults_to_otros() {
        let product = Product::new(ProductId(1), "Sal", "kg");
        assert_eq!(product.family(), DEFAULT_FAMILY);

        let blank = Product::new(ProductId(2), "Pimienta", "kg").with_category("");
        assert_eq!(blank.family(), DEFAULT_FAMILY);

        let meat = Product::new(ProductId(3), "Carrillera", "kg").with_category("carnes");
        assert_eq!(meat.family(), "carnes");
    }

    #[test]
    fn test_deserializes_without_optional_fields() {
        let json = r#"{"id": 4, "name": "Cebolla blanca"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId(4));
        assert_eq!(product.family(), DEFAULT_FAMILY);
        assert!(product.allergens.is_empty());
        assert_eq!(product.unit, "");
    }
}
