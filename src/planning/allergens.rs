//! Allergen resolution for recipes and menus.

use crate::model::{Allergen, Recipe, RecipeId};
use serde::Serialize;

/// Distinct allergens of a recipe, in the order they first appear.
pub fn recipe_allergens(recipe: &Recipe) -> Vec<Allergen> {
    menu_allergens(std::slice::from_ref(recipe))
}

/// Distinct allergens across recipes, in the order they first appear.
pub fn menu_allergens(recipes: &[Recipe]) -> Vec<Allergen> {
    let mut seen: Vec<Allergen> = Vec::new();
    for (_, ingredient) in recipes.iter().flat_map(|recipe| recipe.ingredients()) {
        for allergen in &ingredient.allergens {
            if !seen.contains(allergen) {
                seen.push(*allergen);
            }
        }
    }
    seen
}

/// Recipes against allergens: one row per menu course, one column per allergen on the menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllergenMatrix {
    pub columns: Vec<Allergen>,
    pub rows: Vec<AllergenRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllergenRow {
    pub recipe: RecipeId,
    pub name: String,
    /// Parallel to [`AllergenMatrix::columns`].
    pub present: Vec<bool>,
}

impl AllergenMatrix {
    pub fn build(recipes: &[Recipe]) -> Self {
        let columns = menu_allergens(recipes);
        let rows = recipes
            .iter()
            .map(|recipe| {
                let own = recipe_allergens(recipe);
                AllergenRow {
                    recipe: recipe.id,
                    name: recipe.name.clone(),
                    present: columns.iter().map(|a| own.contains(a)).collect(),
                }
            })
            .collect();
        Self { columns, rows }
    }

    pub fn contains(&self, recipe: RecipeId, allergen: Allergen) -> bool {
        let Some(column) = self.columns.iter().position(|a| *a == allergen) else {
            return false;
        };
        self.rows
            .iter()
            .any(|row| row.recipe == recipe && row.present[column])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Ingredient, SubRecipe};

    fn croquetas() -> Recipe {
        Recipe::new(RecipeId(1), "Croquetas de jamón", 20.0)
            .with_sub_recipe(SubRecipe::new(
                "Bechamel",
                vec![
                    Ingredient::new("Leche entera", "1", "l").with_allergens([Allergen::Dairy]),
                    Ingredient::new("Harina de trigo", "0,100", "kg")
                        .with_allergens([Allergen::Gluten]),
                ],
            ))
            .with_sub_recipe(SubRecipe::new(
                "Empanado",
                vec![
                    Ingredient::new("Huevo", "3", "ud").with_allergens([Allergen::Eggs]),
                    Ingredient::new("Pan rallado", "0,200", "kg")
                        .with_allergens([Allergen::Gluten]),
                ],
            ))
    }

    fn lubina() -> Recipe {
        Recipe::new(RecipeId(2), "Lubina a la sal", 4.0).with_sub_recipe(SubRecipe::new(
            "Pescado",
            vec![
                Ingredient::new("Lubina", "2", "ud").with_allergens([Allergen::Fish]),
                Ingredient::new("Sal gorda", "2", "kg"),
                Ingredient::new("Mantequilla", "0,050", "kg").with_allergens([Allergen::Dairy]),
            ],
        ))
    }

    #[test]
    fn test_recipe_allergens_first_seen_order() {
        assert_eq!(
            recipe_allergens(&croquetas()),
            vec![Allergen::Dairy, Allergen::Gluten, Allergen::Eggs]
        );
    }

    #[test]
    fn test_menu_allergens_union() {
        let menu = vec![lubina(), croquetas()];
        assert_eq!(
            menu_allergens(&menu),
            vec![
                Allergen::Fish,
                Allergen::Dairy,
                Allergen::Gluten,
                Allergen::Eggs
            ]
        );
        assert!(menu_allergens(&[]).is_empty());
    }

    #[test]
    fn test_recipe_without_sub_recipes_has_no_allergens() {
        let legacy = Recipe::new(RecipeId(5), "Caldo", 10.0);
        assert!(recipe_allergens(&legacy).is_empty());
    }

    #[test]
    fn test_matrix_marks_each_course() {
        let matrix = AllergenMatrix::build(&[croquetas(), lubina()]);
        assert_eq!(
            matrix.columns,
            vec![
                Allergen::Dairy,
                Allergen::Gluten,
                Allergen::Eggs,
                Allergen::Fish
            ]
        );
        assert_eq!(matrix.rows[0].present, vec![true, true, true, false]);
        assert_eq!(matrix.rows[1].present, vec![true, false, false, true]);
        assert!(matrix.contains(RecipeId(2), Allergen::Fish));
        assert!(!matrix.contains(RecipeId(2), Allergen::Gluten));
        assert!(!matrix.contains(RecipeId(2), Allergen::Sesame));
    }
}
