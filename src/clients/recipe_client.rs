//! # Recipe Client
//!
//! High-level API for the recipe actor.
use crate::model::{Allergen, Recipe, RecipeCreate, RecipeId, RecipeUpdate};
use crate::planning::ScaledRecipe;
use crate::recipe_actor::{RecipeAction, RecipeActionResult, RecipeError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the recipe actor.
#[derive(Clone)]
pub struct RecipeClient {
    inner: ResourceClient<Recipe>,
}

impl RecipeClient {
    pub fn new(inner: ResourceClient<Recipe>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Recipe> for RecipeClient {
    type Error = RecipeError;

    fn inner(&self) -> &ResourceClient<Recipe> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity::<RecipeError>()
            .unwrap_or_else(|e| RecipeError::ActorCommunicationError(e.to_string()))
    }
}

impl RecipeClient {
    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_recipe(&self, params: RecipeCreate) -> Result<RecipeId, RecipeError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self, update))]
    pub async fn update_recipe(
        &self,
        id: RecipeId,
        update: RecipeUpdate,
    ) -> Result<Recipe, RecipeError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Replaces every stored recipe, keeping the given ids.
    #[instrument(skip(self, recipes), fields(count = recipes.len()))]
    pub async fn restore(&self, recipes: Vec<Recipe>) -> Result<usize, RecipeError> {
        debug!("Sending request");
        self.inner.restore(recipes).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn allergens(&self, id: RecipeId) -> Result<Vec<Allergen>, RecipeError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, RecipeAction::Allergens)
            .await
            .map_err(Self::map_error)?
        {
            RecipeActionResult::Allergens(allergens) => Ok(allergens),
            other => Err(unexpected(other)),
        }
    }

    /// The recipe card rewritten for `pax` diners.
    #[instrument(skip(self))]
    pub async fn scale(&self, id: RecipeId, pax: u32) -> Result<ScaledRecipe, RecipeError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, RecipeAction::ScaleTo(pax))
            .await
            .map_err(Self::map_error)?
        {
            RecipeActionResult::ScaleTo(scaled) => Ok(scaled),
            other => Err(unexpected(other)),
        }
    }
}

fn unexpected(result: RecipeActionResult) -> RecipeError {
    RecipeError::ActorCommunicationError(format!("Unexpected action result: {:?}", result))
}
