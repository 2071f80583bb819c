//! [`ActorEntity`] implementation for [`Menu`].
//!
//! The context is the pair of recipe and catalog clients. Planning actions fetch the recipes
//! and the whole catalog, resolve the selection against them and hand the snapshot to
//! [`crate::planning`].

use super::actions::{MenuAction, MenuActionResult};
use super::MenuError;
use crate::clients::{ActorClient, ProductClient, RecipeClient};
use crate::model::{Menu, MenuCreate, MenuId, MenuUpdate, Recipe, RecipeId};
use crate::planning::{menu_allergens, AllergenMatrix, MenuSelection, PurchaseOrder, ServiceSheet};
use async_trait::async_trait;
use resource_actor::ActorEntity;
use std::collections::BTreeMap;
use tracing::debug;

#[async_trait]
impl ActorEntity for Menu {
    type Id = MenuId;
    type Create = MenuCreate;
    type Update = MenuUpdate;
    type Action = MenuAction;
    type ActionResult = MenuActionResult;
    type Context = (RecipeClient, ProductClient);
    type Error = MenuError;

    fn from_create_params(id: MenuId, params: MenuCreate) -> Result<Self, MenuError> {
        check_name(&params.name)?;
        let selection = MenuSelection::new(params.pax)?.with_recipes(params.recipes);
        Ok(Self::new(id, params.name, selection))
    }

    fn id(&self) -> &MenuId {
        &self.id
    }

    /// Every selected recipe must exist when the menu is created.
    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), MenuError> {
        if self.selection.is_empty() {
            return Ok(());
        }
        let (recipe_client, _) = ctx;
        let known = index_recipes(recipe_client.list().await?);
        if let Some(missing) = self
            .selection
            .recipes()
            .iter()
            .find(|id| !known.contains_key(*id))
        {
            return Err(MenuError::UnknownRecipe(*missing));
        }
        Ok(())
    }

    async fn on_update(&mut self, update: MenuUpdate, _ctx: &Self::Context) -> Result<(), MenuError> {
        if let Some(name) = update.name {
            check_name(&name)?;
            self.name = name;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: MenuAction,
        ctx: &Self::Context,
    ) -> Result<MenuActionResult, MenuError> {
        match action {
            MenuAction::AddRecipe(recipe) => {
                let (recipe_client, _) = ctx;
                if recipe_client.get(recipe).await?.is_none() {
                    return Err(MenuError::UnknownRecipe(recipe));
                }
                self.selection.push(recipe);
                Ok(MenuActionResult::AddRecipe(()))
            }
            MenuAction::Remove(index) => Ok(MenuActionResult::Remove(self.selection.remove(index)?)),
            MenuAction::MoveUp(index) => Ok(MenuActionResult::MoveUp(self.selection.move_up(index))),
            MenuAction::MoveDown(index) => {
                Ok(MenuActionResult::MoveDown(self.selection.move_down(index)))
            }
            MenuAction::SetPax(pax) => {
                self.selection.set_pax(pax)?;
                Ok(MenuActionResult::SetPax(()))
            }
            MenuAction::PurchaseOrder => {
                let (_, product_client) = ctx;
                let recipes = self.selected_recipes(ctx).await?;
                let catalog = product_client.list().await?;
                debug!(menu = %self.id, recipes = recipes.len(), products = catalog.len(), "Snapshot fetched");
                Ok(MenuActionResult::PurchaseOrder(PurchaseOrder::aggregate(
                    &recipes,
                    self.selection.pax(),
                    &catalog,
                )))
            }
            MenuAction::Allergens => {
                let recipes = self.selected_recipes(ctx).await?;
                Ok(MenuActionResult::Allergens(menu_allergens(&recipes)))
            }
            MenuAction::AllergenMatrix => {
                let recipes = self.selected_recipes(ctx).await?;
                Ok(MenuActionResult::AllergenMatrix(AllergenMatrix::build(&recipes)))
            }
            MenuAction::ServiceSheet => {
                let recipes = self.selected_recipes(ctx).await?;
                Ok(MenuActionResult::ServiceSheet(ServiceSheet::build(
                    self.name.clone(),
                    &recipes,
                    self.selection.pax(),
                )?))
            }
        }
    }
}

impl Menu {
    /// The selected recipes in menu order, repeats included.
    async fn selected_recipes(
        &self,
        (recipe_client, _): &(RecipeClient, ProductClient),
    ) -> Result<Vec<Recipe>, MenuError> {
        let known = index_recipes(recipe_client.list().await?);
        self.selection
            .recipes()
            .iter()
            .map(|id| {
                known
                    .get(id)
                    .cloned()
                    .ok_or(MenuError::UnknownRecipe(*id))
            })
            .collect()
    }
}

fn index_recipes(recipes: Vec<Recipe>) -> BTreeMap<RecipeId, Recipe> {
    recipes.into_iter().map(|recipe| (recipe.id, recipe)).collect()
}

fn check_name(name: &str) -> Result<(), MenuError> {
    if name.trim().is_empty() {
        return Err(MenuError::EmptyName);
    }
    Ok(())
}
