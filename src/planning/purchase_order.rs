//! Purchase-order aggregation.
//!
//! For a menu (an ordered list of recipes, repeats allowed), a pax count and the catalog,
//! sums the scaled quantity of every ingredient and groups the sums by product family.
//!
//! # Policies
//!
//! - Recipe with a missing, zero or non-finite yield: its contribution is skipped and a
//!   [`PlanningWarning::InvalidYield`] is recorded. The rest of the menu is still aggregated.
//! - Ingredient with an unparseable quantity: counted as zero (the line is still listed) and
//!   a [`PlanningWarning::MalformedQuantity`] is recorded.
//! - Same ingredient with different units: summed as raw numbers under the first unit seen,
//!   with a [`PlanningWarning::UnitMismatch`]. Units are never converted.
//! - Ingredient with no catalog product of exactly the same name: family `"Otros"`.

use super::catalog::CatalogIndex;
use super::error::PlanningWarning;
use super::quantity::{scale_quantity, scale_ratio, ScaledQuantity};
use crate::model::{Product, Recipe};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Ingredient name to line.
pub type FamilyLines = BTreeMap<String, PurchaseOrderLine>;

/// Total demand for one ingredient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseOrderLine {
    pub name: String,
    pub quantity: ScaledQuantity,
    /// Unit of the first ingredient line seen under this name.
    pub unit: String,
}

/// Aggregated demand for a menu, grouped by family.
///
/// Families iterate in lexicographic order, and so do the ingredients within a family.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PurchaseOrder {
    families: BTreeMap<String, FamilyLines>,
    #[serde(skip)]
    warnings: Vec<PlanningWarning>,
}

impl PurchaseOrder {
    /// Aggregates `recipes` for `pax` diners.
    ///
    /// Inputs are only borrowed; calling it twice with the same inputs gives the same order.
    pub fn aggregate(recipes: &[Recipe], pax: u32, catalog: &[Product]) -> Self {
        let index = CatalogIndex::new(catalog);
        let mut order = PurchaseOrder::default();

        for recipe in recipes {
            let ratio = match scale_ratio(recipe, pax) {
                Ok(ratio) => ratio,
                Err(e) => {
                    warn!(recipe = %recipe.name, error = %e, "Skipping recipe contribution");
                    order.warnings.push(PlanningWarning::InvalidYield {
                        recipe: recipe.name.clone(),
                    });
                    continue;
                }
            };
            debug!(recipe = %recipe.name, ratio, "Aggregating recipe");

            for (sub_recipe, ingredient) in recipe.ingredients() {
                let quantity = match scale_quantity(&ingredient.quantity, ratio) {
                    Ok(quantity) => quantity,
                    Err(e) => {
                        warn!(
                            recipe = %recipe.name,
                            ingredient = %ingredient.name,
                            error = %e,
                            "Counting ingredient as zero"
                        );
                        order.warnings.push(PlanningWarning::MalformedQuantity {
                            recipe: recipe.name.clone(),
                            sub_recipe: sub_recipe.name.clone(),
                            ingredient: ingredient.name.clone(),
                            quantity: ingredient.quantity.clone(),
                        });
                        ScaledQuantity::default()
                    }
                };

                let family = index.family_of(&ingredient.name);
                order.add(family, &ingredient.name, quantity, &ingredient.unit);
            }
        }

        debug!(
            families = order.families.len(),
            lines = order.line_count(),
            warnings = order.warnings.len(),
            "Purchase order aggregated"
        );
        order
    }

    fn add(&mut self, family: &str, name: &str, quantity: ScaledQuantity, unit: &str) {
        let lines = self.families.entry(family.to_string()).or_default();
        match lines.get_mut(name) {
            Some(line) => {
                line.quantity += quantity;
                if line.unit != unit {
                    self.warnings.push(PlanningWarning::UnitMismatch {
                        ingredient: name.to_string(),
                        unit: line.unit.clone(),
                        found: unit.to_string(),
                    });
                }
            }
            None => {
                lines.insert(
                    name.to_string(),
                    PurchaseOrderLine {
                        name: name.to_string(),
                        quantity,
                        unit: unit.to_string(),
                    },
                );
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.families.values().map(BTreeMap::len).sum()
    }

    pub fn family(&self, family: &str) -> Option<&FamilyLines> {
        self.families.get(family)
    }

    pub fn line(&self, family: &str, ingredient: &str) -> Option<&PurchaseOrderLine> {
        self.families.get(family)?.get(ingredient)
    }

    /// Families with their lines, in lexicographic order.
    pub fn families(&self) -> impl Iterator<Item = (&str, &FamilyLines)> {
        self.families
            .iter()
            .map(|(family, lines)| (family.as_str(), lines))
    }

    /// Every line with its family, family by family.
    pub fn lines(&self) -> impl Iterator<Item = (&str, &PurchaseOrderLine)> {
        self.families()
            .flat_map(|(family, lines)| lines.values().map(move |line| (family, line)))
    }

    pub fn warnings(&self) -> &[PlanningWarning] {
        &self.warnings
    }

    /// The bare family mapping.
    pub fn into_families(self) -> BTreeMap<String, FamilyLines> {
        self.families
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Ingredient, ProductId, RecipeId, SubRecipe, DEFAULT_FAMILY};

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(ProductId(1), "Cebolla blanca", "kg").with_category("verduras"),
            Product::new(ProductId(2), "Carrillera de cerdo", "kg").with_category("carnes"),
            Product::new(ProductId(3), "Vino tinto", "l").with_category("bodega"),
        ]
    }

    fn recipe_a() -> Recipe {
        Recipe::new(RecipeId(1), "Sofrito", 4.0).with_sub_recipe(SubRecipe::new(
            "Base",
            vec![Ingredient::new("Cebolla blanca", "0.500", "kg")],
        ))
    }

    fn carrilleras() -> Recipe {
        Recipe::new(RecipeId(2), "Carrilleras al vino", 4.0)
            .with_sub_recipe(SubRecipe::new(
                "Guiso",
                vec![
                    Ingredient::new("Carrillera de cerdo", "1,200", "kg"),
                    Ingredient::new("Vino tinto", "0,750", "l"),
                    Ingredient::new("Cebolla blanca", "0,300", "kg"),
                ],
            ))
            .with_sub_recipe(SubRecipe::new(
                "Puré",
                vec![
                    Ingredient::new("Patata agria", "1", "kg"),
                    Ingredient::new("Mantequilla", "0,100", "kg"),
                ],
            ))
    }

    #[test]
    fn test_single_recipe_doubled_by_pax() {
        let order = PurchaseOrder::aggregate(&[recipe_a()], 8, &catalog());

        let line = order.line("verduras", "Cebolla blanca").unwrap();
        assert_eq!(line.quantity.value(), 1.0);
        assert_eq!(line.quantity.to_string(), "1");
        assert_eq!(line.unit, "kg");
        assert_eq!(order.line_count(), 1);
        assert!(order.warnings().is_empty());
    }

    #[test]
    fn test_empty_menu_gives_empty_order() {
        let order = PurchaseOrder::aggregate(&[], 12, &catalog());
        assert!(order.is_empty());
        assert!(order.into_families().is_empty());
    }

    #[test]
    fn test_groups_by_family_and_falls_back_to_otros() {
        let order = PurchaseOrder::aggregate(&[carrilleras()], 4, &catalog());

        let families: Vec<&str> = order.families().map(|(family, _)| family).collect();
        assert_eq!(families, vec!["Otros", "bodega", "carnes", "verduras"]);

        assert_eq!(
            order.line("carnes", "Carrillera de cerdo").unwrap().quantity.to_string(),
            "1.200"
        );
        let otros = order.family(DEFAULT_FAMILY).unwrap();
        assert_eq!(
            otros.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["Mantequilla", "Patata agria"]
        );
    }

    #[test]
    fn test_sums_across_recipes() {
        let order = PurchaseOrder::aggregate(&[recipe_a(), carrilleras()], 8, &catalog());
        let onion = order.line("verduras", "Cebolla blanca").unwrap();
        // 0.5 * 2 + 0.3 * 2
        assert!((onion.quantity.value() - 1.6).abs() < 1e-9);
        assert_eq!(onion.quantity.to_string(), "1.600");
    }

    #[test]
    fn test_repeated_recipe_doubles_every_line() {
        let once = PurchaseOrder::aggregate(&[carrilleras()], 10, &catalog());
        let twice = PurchaseOrder::aggregate(&[carrilleras(), carrilleras()], 10, &catalog());

        assert_eq!(once.line_count(), twice.line_count());
        for (family, line) in once.lines() {
            let doubled = twice.line(family, &line.name).unwrap();
            assert!((doubled.quantity.value() - 2.0 * line.quantity.value()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_invalid_yield_skips_only_that_recipe() {
        let mut broken = carrilleras();
        broken.yield_quantity = Some(0.0);
        let mut missing = carrilleras();
        missing.name = "Sin rendimiento".to_string();
        missing.yield_quantity = None;

        let order = PurchaseOrder::aggregate(&[broken, recipe_a(), missing], 8, &catalog());

        assert_eq!(order.line_count(), 1);
        assert_eq!(
            order.line("verduras", "Cebolla blanca").unwrap().quantity.value(),
            1.0
        );
        assert_eq!(
            order.warnings(),
            &[
                PlanningWarning::InvalidYield {
                    recipe: "Carrilleras al vino".to_string()
                },
                PlanningWarning::InvalidYield {
                    recipe: "Sin rendimiento".to_string()
                },
            ]
        );
        assert!(order.lines().all(|(_, line)| line.quantity.value().is_finite()));
    }

    #[test]
    fn test_malformed_quantity_counts_as_zero() {
        let recipe = Recipe::new(RecipeId(7), "Gazpacho", 4.0).with_sub_recipe(SubRecipe::new(
            "Base",
            vec![
                Ingredient::new("Sal fina", "al gusto", "g"),
                Ingredient::new("Cebolla blanca", "0,250", "kg"),
            ],
        ));

        let order = PurchaseOrder::aggregate(&[recipe], 4, &catalog());

        let salt = order.line(DEFAULT_FAMILY, "Sal fina").unwrap();
        assert_eq!(salt.quantity.value(), 0.0);
        assert_eq!(salt.quantity.to_string(), "0");
        assert_eq!(
            order.line("verduras", "Cebolla blanca").unwrap().quantity.to_string(),
            "0.250"
        );
        assert_eq!(
            order.warnings(),
            &[PlanningWarning::MalformedQuantity {
                recipe: "Gazpacho".to_string(),
                sub_recipe: "Base".to_string(),
                ingredient: "Sal fina".to_string(),
                quantity: "al gusto".to_string(),
            }]
        );
    }

    #[test]
    fn test_first_unit_wins_without_conversion() {
        let in_grams = Recipe::new(RecipeId(8), "Pil pil", 4.0).with_sub_recipe(SubRecipe::new(
            "Emulsión",
            vec![Ingredient::new("Cebolla blanca", "250", "g")],
        ));

        let order = PurchaseOrder::aggregate(&[recipe_a(), in_grams], 4, &catalog());

        let onion = order.line("verduras", "Cebolla blanca").unwrap();
        assert_eq!(onion.unit, "kg");
        assert_eq!(onion.quantity.to_string(), "250.500");
        assert_eq!(
            order.warnings(),
            &[PlanningWarning::UnitMismatch {
                ingredient: "Cebolla blanca".to_string(),
                unit: "kg".to_string(),
                found: "g".to_string(),
            }]
        );
    }

    #[test]
    fn test_recipe_without_ingredients_participates() {
        let empty = Recipe::new(RecipeId(9), "Pan de la casa", 10.0);
        let order = PurchaseOrder::aggregate(&[empty, recipe_a()], 8, &catalog());
        assert_eq!(order.line_count(), 1);
        assert!(order.warnings().is_empty());
    }

    #[test]
    fn test_inputs_are_left_untouched() {
        let recipes = vec![recipe_a(), carrilleras()];
        let products = catalog();
        let (recipes_before, products_before) = (recipes.clone(), products.clone());

        let first = PurchaseOrder::aggregate(&recipes, 6, &products);
        let second = PurchaseOrder::aggregate(&recipes, 6, &products);

        assert_eq!(first, second);
        assert_eq!(recipes, recipes_before);
        assert_eq!(products, products_before);
    }
}
