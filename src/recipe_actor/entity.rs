//! [`ActorEntity`] implementation for [`Recipe`].

use super::actions::{RecipeAction, RecipeActionResult};
use super::RecipeError;
use crate::model::{Recipe, RecipeCreate, RecipeId, RecipeUpdate};
use crate::planning::{recipe_allergens, scale_recipe};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Recipe {
    type Id = RecipeId;
    type Create = RecipeCreate;
    type Update = RecipeUpdate;
    type Action = RecipeAction;
    type ActionResult = RecipeActionResult;
    type Context = ();
    type Error = RecipeError;

    fn from_create_params(id: RecipeId, params: RecipeCreate) -> Result<Self, RecipeError> {
        check_name(&params.name)?;
        check_yield(params.yield_quantity)?;
        Ok(Self {
            id,
            name: params.name,
            category: params.category,
            yield_quantity: Some(params.yield_quantity),
            yield_unit: params.yield_unit,
            sub_recipes: params.sub_recipes,
            plating_instructions: params.plating_instructions,
            service_details: params.service_details,
            photo: None,
            last_modified: Utc::now(),
        })
    }

    fn id(&self) -> &RecipeId {
        &self.id
    }

    /// Applies every field of the update and stamps `last_modified`.
    async fn on_update(&mut self, update: RecipeUpdate, _ctx: &()) -> Result<(), RecipeError> {
        if let Some(name) = &update.name {
            check_name(name)?;
        }
        if let Some(yield_quantity) = update.yield_quantity {
            check_yield(yield_quantity)?;
        }

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(yield_quantity) = update.yield_quantity {
            self.yield_quantity = Some(yield_quantity);
        }
        if let Some(yield_unit) = update.yield_unit {
            self.yield_unit = yield_unit;
        }
        if let Some(sub_recipes) = update.sub_recipes {
            self.sub_recipes = sub_recipes;
        }
        if let Some(plating_instructions) = update.plating_instructions {
            self.plating_instructions = plating_instructions;
        }
        if let Some(service_details) = update.service_details {
            self.service_details = service_details;
        }
        if let Some(photo) = update.photo {
            self.photo = Some(photo);
        }
        self.last_modified = Utc::now();
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: RecipeAction,
        _ctx: &(),
    ) -> Result<RecipeActionResult, RecipeError> {
        match action {
            RecipeAction::Allergens => Ok(RecipeActionResult::Allergens(recipe_allergens(self))),
            RecipeAction::ScaleTo(pax) => Ok(RecipeActionResult::ScaleTo(scale_recipe(self, pax)?)),
        }
    }
}

fn check_name(name: &str) -> Result<(), RecipeError> {
    if name.trim().is_empty() {
        return Err(RecipeError::EmptyName);
    }
    Ok(())
}

fn check_yield(yield_quantity: f64) -> Result<(), RecipeError> {
    if !yield_quantity.is_finite() || yield_quantity <= 0.0 {
        return Err(RecipeError::InvalidYield(yield_quantity));
    }
    Ok(())
}
