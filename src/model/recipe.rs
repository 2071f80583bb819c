//! Recipe cards: sub-elaborations, ingredient lines and service details.
//!
//! Managed by the recipe actor; see [`crate::recipe_actor`].

use super::Allergen;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

entity_id!(RecipeId, "recipe");

/// One ingredient line of a sub-elaboration.
///
/// `quantity` keeps the text as typed (`"0,750"`, `"2"`); it is parsed only when scaling,
/// see [`crate::planning::quantity`]. `allergens` is set per line and is not synced from
/// the catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    #[serde(default, deserialize_with = "quantity_text")]
    pub quantity: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub allergens: Vec<Allergen>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            unit: unit.into(),
            allergens: Vec::new(),
        }
    }

    pub fn with_allergens(mut self, allergens: impl IntoIterator<Item = Allergen>) -> Self {
        self.allergens = allergens.into_iter().collect();
        self
    }
}

/// A named component of a recipe ("Salsa", "Guarnición") with its own ingredients.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubRecipe {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl SubRecipe {
    pub fn new(name: impl Into<String>, ingredients: Vec<Ingredient>) -> Self {
        Self {
            name: name.into(),
            ingredients,
            ..Default::default()
        }
    }
}

/// Presentation and service metadata printed on the service sheet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceDetails {
    pub presentation: String,
    pub serving_temp: String,
    pub cutlery: String,
    pub pass_time: String,
    pub service_type: String,
    pub client_description: String,
}

/// A recipe card.
///
/// Ingredient quantities are calibrated for `yield_quantity` portions (in `yield_unit`).
/// Scaling divides by it, so a missing or non-positive yield is reported as an error by the
/// planning functions rather than divided.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(
        default,
        deserialize_with = "lenient_yield",
        skip_serializing_if = "Option::is_none"
    )]
    pub yield_quantity: Option<f64>,
    #[serde(default)]
    pub yield_unit: String,
    #[serde(default)]
    pub sub_recipes: Vec<SubRecipe>,
    #[serde(default)]
    pub plating_instructions: String,
    #[serde(default)]
    pub service_details: ServiceDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds", default = "Utc::now")]
    pub last_modified: DateTime<Utc>,
}

impl Recipe {
    pub fn new(id: RecipeId, name: impl Into<String>, yield_quantity: f64) -> Self {
        Self {
            id,
            name: name.into(),
            category: String::new(),
            yield_quantity: Some(yield_quantity),
            yield_unit: "pax".to_string(),
            sub_recipes: Vec::new(),
            plating_instructions: String::new(),
            service_details: ServiceDetails::default(),
            photo: None,
            last_modified: Utc::now(),
        }
    }

    pub fn with_sub_recipe(mut self, sub_recipe: SubRecipe) -> Self {
        self.sub_recipes.push(sub_recipe);
        self
    }

    /// Every ingredient line, sub-recipe by sub-recipe.
    pub fn ingredients(&self) -> impl Iterator<Item = (&SubRecipe, &Ingredient)> {
        self.sub_recipes
            .iter()
            .flat_map(|sub| sub.ingredients.iter().map(move |ingredient| (sub, ingredient)))
    }
}

/// Payload for creating a recipe card.
#[derive(Debug, Clone)]
pub struct RecipeCreate {
    pub name: String,
    pub category: String,
    pub yield_quantity: f64,
    pub yield_unit: String,
    pub sub_recipes: Vec<SubRecipe>,
    pub plating_instructions: String,
    pub service_details: ServiceDetails,
}

impl RecipeCreate {
    pub fn new(name: impl Into<String>, yield_quantity: f64) -> Self {
        Self {
            name: name.into(),
            category: String::new(),
            yield_quantity,
            yield_unit: "pax".to_string(),
            sub_recipes: Vec::new(),
            plating_instructions: String::new(),
            service_details: ServiceDetails::default(),
        }
    }

    pub fn with_sub_recipe(mut self, sub_recipe: SubRecipe) -> Self {
        self.sub_recipes.push(sub_recipe);
        self
    }
}

/// Partial update of a recipe card; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct RecipeUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub yield_quantity: Option<f64>,
    pub yield_unit: Option<String>,
    pub sub_recipes: Option<Vec<SubRecipe>>,
    pub plating_instructions: Option<String>,
    pub service_details: Option<ServiceDetails>,
    pub photo: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Older documents store some quantities as JSON numbers; keep them as text like the rest.
fn quantity_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(value)) => value.to_string(),
        Some(NumberOrText::Text(text)) => text,
        None => String::new(),
    })
}

/// Accepts `4`, `"4"`, `"2,5"` or `null` for the yield.
///
/// Unparseable text becomes `None`, which the planning functions treat as a missing yield.
fn lenient_yield<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<NumberOrText>::deserialize(deserializer)? {
        Some(NumberOrText::Number(value)) => Some(value),
        Some(NumberOrText::Text(text)) => text.trim().replace(',', ".").parse().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yield_accepts_text_and_numbers() {
        let from_number: Recipe =
            serde_json::from_str(r#"{"id": 1, "name": "Crema", "yieldQuantity": 4}"#).unwrap();
        assert_eq!(from_number.yield_quantity, Some(4.0));

        let from_text: Recipe =
            serde_json::from_str(r#"{"id": 2, "name": "Crema", "yieldQuantity": "2,5"}"#).unwrap();
        assert_eq!(from_text.yield_quantity, Some(2.5));

        let garbage: Recipe =
            serde_json::from_str(r#"{"id": 3, "name": "Crema", "yieldQuantity": "unas"}"#).unwrap();
        assert_eq!(garbage.yield_quantity, None);
    }

    #[test]
    fn test_numeric_quantities_become_text() {
        let ingredient: Ingredient =
            serde_json::from_str(r#"{"name": "Ajo", "quantity": 2, "unit": "ud"}"#).unwrap();
        assert_eq!(ingredient.quantity, "2");

        let ingredient: Ingredient =
            serde_json::from_str(r#"{"name": "Aceite", "quantity": 0.25, "unit": "l"}"#).unwrap();
        assert_eq!(ingredient.quantity, "0.25");
    }

    #[test]
    fn test_missing_sub_recipes_deserialize_empty() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id": 9, "name": "Consomé", "yieldQuantity": 10, "lastModified": 1700000000000}"#,
        )
        .unwrap();
        assert!(recipe.sub_recipes.is_empty());
        assert_eq!(recipe.ingredients().count(), 0);
        assert_eq!(recipe.last_modified.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_ingredients_walks_sub_recipes_in_order() {
        let recipe = Recipe::new(RecipeId(1), "Merluza en salsa verde", 4.0)
            .with_sub_recipe(SubRecipe::new(
                "Fumet",
                vec![Ingredient::new("Espinas de merluza", "1", "kg")],
            ))
            .with_sub_recipe(SubRecipe::new(
                "Salsa",
                vec![
                    Ingredient::new("Perejil", "0,050", "kg"),
                    Ingredient::new("Ajo", "2", "ud"),
                ],
            ));

        let names: Vec<(&str, &str)> = recipe
            .ingredients()
            .map(|(sub, ingredient)| (sub.name.as_str(), ingredient.name.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![
                ("Fumet", "Espinas de merluza"),
                ("Salsa", "Perejil"),
                ("Salsa", "Ajo")
            ]
        );
    }
}
