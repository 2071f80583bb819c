//! # Backup Documents
//!
//! The whole persisted state in one JSON document:
//!
//! ```json
//! {
//!   "version": "2",
//!   "timestamp": "2026-03-01T09:30:00Z",
//!   "settings": { "teacherName": "", "instituteName": "", "academicYear": "" },
//!   "recipes": [ ... ],
//!   "productDatabase": [ ... ]
//! }
//! ```
//!
//! Reading migrates older recipe shapes first: a recipe without `subRecipes` but with
//! top-level `ingredients` or `instructions` becomes a recipe with one sub-recipe named after
//! it. A recipe with neither is read with no sub-recipes.

use crate::catalog_actor::ProductError;
use crate::model::{Product, Recipe, Settings};
use crate::recipe_actor::RecipeError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Version written by [`BackupDocument::new`].
pub const BACKUP_VERSION: &str = "2";

#[derive(Debug, Error)]
pub enum BackupError {
    #[error("Backup file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed backup document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Restoring recipes failed: {0}")]
    Recipe(#[from] RecipeError),

    #[error("Restoring catalog failed: {0}")]
    Catalog(#[from] ProductError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub version: String,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub product_database: Vec<Product>,
}

impl BackupDocument {
    /// A document stamped with the current time.
    pub fn new(settings: Settings, recipes: Vec<Recipe>, product_database: Vec<Product>) -> Self {
        Self {
            version: BACKUP_VERSION.to_string(),
            timestamp: Utc::now(),
            settings,
            recipes,
            product_database,
        }
    }

    /// Parses a document, migrating legacy recipes on the way.
    pub fn from_json(text: &str) -> Result<Self, BackupError> {
        let mut value: Value = serde_json::from_str(text)?;
        migrate(&mut value);
        Ok(serde_json::from_value(value)?)
    }

    pub fn to_json(&self) -> Result<String, BackupError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn read_from(path: impl AsRef<Path>) -> Result<Self, BackupError> {
        let path = path.as_ref();
        let document = Self::from_json(&std::fs::read_to_string(path)?)?;
        info!(
            path = %path.display(),
            version = %document.version,
            recipes = document.recipes.len(),
            products = document.product_database.len(),
            "Backup read"
        );
        Ok(document)
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), BackupError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        info!(path = %path.display(), "Backup written");
        Ok(())
    }
}

fn migrate(document: &mut Value) {
    // Some writers stored the version as a number.
    if let Some(Value::Number(number)) = document.get("version") {
        document["version"] = Value::String(number.to_string());
    }
    if let Some(Value::Array(recipes)) = document.get_mut("recipes") {
        for recipe in recipes.iter_mut().filter_map(Value::as_object_mut) {
            migrate_recipe(recipe);
        }
    }
}

fn migrate_recipe(recipe: &mut Map<String, Value>) {
    if recipe.contains_key("subRecipes") {
        return;
    }
    let ingredients = recipe.remove("ingredients");
    let instructions = recipe.remove("instructions");
    if ingredients.is_none() && instructions.is_none() {
        return;
    }

    let name = recipe.get("name").cloned().unwrap_or(Value::String(String::new()));
    debug!(recipe = %name, "Migrating legacy recipe");
    recipe.insert(
        "subRecipes".to_string(),
        json!([{
            "name": name,
            "ingredients": ingredients.unwrap_or_else(|| json!([])),
            "instructions": instructions.unwrap_or_else(|| json!("")),
        }]),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Allergen, Ingredient, ProductId, RecipeId, SubRecipe};

    const LEGACY: &str = r#"{
        "version": 1,
        "timestamp": "2024-05-02T10:00:00Z",
        "settings": {"teacherName": "Marta Ibáñez", "instituteName": "IES Hostelería"},
        "recipes": [
            {
                "id": 1,
                "name": "Salmorejo",
                "category": "Entrantes",
                "yieldQuantity": "4",
                "yieldUnit": "raciones",
                "ingredients": [
                    {"name": "Tomate pera", "quantity": "1", "unit": "kg"},
                    {"name": "Pan de telera", "quantity": 0.2, "unit": "kg", "allergens": ["Gluten"]}
                ],
                "instructions": "Triturar y emulsionar",
                "lastModified": 1714644000000
            },
            {"id": 2, "name": "Pan de la casa", "yieldQuantity": 10}
        ],
        "productDatabase": [
            {"id": 1, "name": "Tomate pera", "category": "verduras", "unit": "kg"}
        ]
    }"#;

    #[test]
    fn test_legacy_recipe_becomes_one_sub_recipe() {
        let document = BackupDocument::from_json(LEGACY).unwrap();

        assert_eq!(document.version, "1");
        assert_eq!(document.settings.academic_year, "");
        let salmorejo = &document.recipes[0];
        assert_eq!(salmorejo.yield_quantity, Some(4.0));
        assert_eq!(salmorejo.sub_recipes.len(), 1);

        let sub = &salmorejo.sub_recipes[0];
        assert_eq!(sub.name, "Salmorejo");
        assert_eq!(sub.instructions, "Triturar y emulsionar");
        assert_eq!(sub.ingredients[1].quantity, "0.2");
        assert_eq!(sub.ingredients[1].allergens, vec![Allergen::Gluten]);
    }

    #[test]
    fn test_recipe_without_ingredients_stays_empty() {
        let document = BackupDocument::from_json(LEGACY).unwrap();
        assert!(document.recipes[1].sub_recipes.is_empty());
        assert_eq!(document.product_database[0].family(), "verduras");
    }

    #[test]
    fn test_written_document_reads_back() {
        let recipe = Recipe::new(RecipeId(3), "Gazpacho", 6.0).with_sub_recipe(SubRecipe::new(
            "Base",
            vec![Ingredient::new("Pepino", "0,300", "kg")],
        ));
        let product = Product::new(ProductId(8), "Pepino", "kg").with_category("verduras");
        let document = BackupDocument::new(Settings::default(), vec![recipe], vec![product]);

        let path = std::env::temp_dir().join(format!("recetario-backup-{}.json", std::process::id()));
        document.write_to(&path).unwrap();
        let read = BackupDocument::read_from(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(read.version, BACKUP_VERSION);
        assert_eq!(read.recipes[0].sub_recipes, document.recipes[0].sub_recipes);
        assert_eq!(read.product_database, document.product_database);
        assert_eq!(
            read.recipes[0].last_modified.timestamp_millis(),
            document.recipes[0].last_modified.timestamp_millis()
        );
    }

    #[test]
    fn test_camel_case_field_names() {
        let document = BackupDocument::new(Settings::default(), Vec::new(), Vec::new());
        let value = serde_json::to_value(&document).unwrap();
        assert!(value.get("productDatabase").is_some());
        assert!(value["settings"].get("teacherName").is_some());
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(
            BackupDocument::from_json("{\"recipes\": 3"),
            Err(BackupError::Json(_))
        ));
        assert!(matches!(
            BackupDocument::read_from("/nonexistent/recetario.json"),
            Err(BackupError::Io(_))
        ));
    }
}
