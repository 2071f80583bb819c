//! Ingredient-name to catalog-product lookup.

use crate::model::{Product, DEFAULT_FAMILY};
use std::collections::HashMap;

/// Exact, case-sensitive index of catalog products by name.
///
/// When two products share a name, the first one in catalog order wins.
#[derive(Debug)]
pub struct CatalogIndex<'a> {
    by_name: HashMap<&'a str, &'a Product>,
}

impl<'a> CatalogIndex<'a> {
    pub fn new(products: &'a [Product]) -> Self {
        let mut by_name = HashMap::with_capacity(products.len());
        for product in products {
            by_name.entry(product.name.as_str()).or_insert(product);
        }
        Self { by_name }
    }

    pub fn lookup(&self, ingredient_name: &str) -> Option<&'a Product> {
        self.by_name.get(ingredient_name).copied()
    }

    /// Family for an ingredient name: the matching product's family, else `"Otros"`.
    pub fn family_of(&self, ingredient_name: &str) -> &'a str {
        self.lookup(ingredient_name)
            .map_or(DEFAULT_FAMILY, |product| product.family())
    }
}
