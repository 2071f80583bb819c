//! Recipes scaled to a pax count, and the service sheet of a menu.

use super::allergens::menu_allergens;
use super::error::{PlanningError, PlanningWarning};
use super::quantity::{scale_quantity, scale_ratio, ScaledQuantity};
use crate::model::{Allergen, Recipe, RecipeId, ServiceDetails};
use serde::Serialize;
use std::fmt::Display;
use tracing::warn;

/// An ingredient amount after scaling. Text that is not a number is passed through as typed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScaledAmount {
    Scaled(ScaledQuantity),
    Unparsed(String),
}

impl Display for ScaledAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaledAmount::Scaled(quantity) => write!(f, "{}", quantity),
            ScaledAmount::Unparsed(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledIngredient {
    pub name: String,
    pub amount: ScaledAmount,
    pub unit: String,
    pub allergens: Vec<Allergen>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledSubRecipe {
    pub name: String,
    pub ingredients: Vec<ScaledIngredient>,
    pub instructions: String,
}

/// A recipe card rewritten for a given pax count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledRecipe {
    pub recipe: RecipeId,
    pub name: String,
    pub pax: u32,
    pub sub_recipes: Vec<ScaledSubRecipe>,
    pub plating_instructions: String,
    pub service_details: ServiceDetails,
    #[serde(skip)]
    pub warnings: Vec<PlanningWarning>,
}

/// Scales every ingredient line of `recipe` to `pax` diners.
///
/// Fails with [`PlanningError::InvalidYield`] when the recipe has no usable yield. Lines whose
/// quantity is not a number keep their text and add a [`PlanningWarning::MalformedQuantity`].
pub fn scale_recipe(recipe: &Recipe, pax: u32) -> Result<ScaledRecipe, PlanningError> {
    if pax == 0 {
        return Err(PlanningError::InvalidPax(pax));
    }
    let ratio = scale_ratio(recipe, pax)?;
    let mut warnings = Vec::new();

    let sub_recipes = recipe
        .sub_recipes
        .iter()
        .map(|sub| ScaledSubRecipe {
            name: sub.name.clone(),
            instructions: sub.instructions.clone(),
            ingredients: sub
                .ingredients
                .iter()
                .map(|ingredient| {
                    let amount = match scale_quantity(&ingredient.quantity, ratio) {
                        Ok(quantity) => ScaledAmount::Scaled(quantity),
                        Err(_) => {
                            warnings.push(PlanningWarning::MalformedQuantity {
                                recipe: recipe.name.clone(),
                                sub_recipe: sub.name.clone(),
                                ingredient: ingredient.name.clone(),
                                quantity: ingredient.quantity.clone(),
                            });
                            ScaledAmount::Unparsed(ingredient.quantity.clone())
                        }
                    };
                    ScaledIngredient {
                        name: ingredient.name.clone(),
                        amount,
                        unit: ingredient.unit.clone(),
                        allergens: ingredient.allergens.clone(),
                    }
                })
                .collect(),
        })
        .collect();

    Ok(ScaledRecipe {
        recipe: recipe.id,
        name: recipe.name.clone(),
        pax,
        sub_recipes,
        plating_instructions: recipe.plating_instructions.clone(),
        service_details: recipe.service_details.clone(),
        warnings,
    })
}

/// Everything the pass needs for one menu: the courses in order and the menu allergens.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSheet {
    pub title: String,
    pub pax: u32,
    pub courses: Vec<ScaledRecipe>,
    pub allergens: Vec<Allergen>,
    #[serde(skip)]
    pub warnings: Vec<PlanningWarning>,
}

impl ServiceSheet {
    /// Builds the sheet for `recipes` in menu order.
    ///
    /// Fails on a pax of 0. Recipes without a usable yield are left out and reported as
    /// warnings. Allergens are taken over every recipe given, omitted ones included.
    pub fn build(
        title: impl Into<String>,
        recipes: &[Recipe],
        pax: u32,
    ) -> Result<Self, PlanningError> {
        if pax == 0 {
            return Err(PlanningError::InvalidPax(pax));
        }
        let mut courses = Vec::with_capacity(recipes.len());
        let mut warnings = Vec::new();

        for recipe in recipes {
            match scale_recipe(recipe, pax) {
                Ok(mut course) => {
                    warnings.append(&mut course.warnings);
                    courses.push(course);
                }
                Err(e) => {
                    warn!(recipe = %recipe.name, error = %e, "Leaving recipe off the service sheet");
                    warnings.push(PlanningWarning::InvalidYield {
                        recipe: recipe.name.clone(),
                    });
                }
            }
        }

        Ok(Self {
            title: title.into(),
            pax,
            courses,
            allergens: menu_allergens(recipes),
            warnings,
        })
    }
}
