//! # Menu Client
//!
//! High-level API for the menu actor: selection editing and the planning outputs.
use crate::menu_actor::{MenuAction, MenuActionResult, MenuError};
use crate::model::{Allergen, Menu, MenuCreate, MenuId, MenuUpdate, RecipeId};
use crate::planning::{AllergenMatrix, PurchaseOrder, ServiceSheet};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<Menu>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<Menu>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Menu> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<Menu> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity::<MenuError>()
            .unwrap_or_else(|e| MenuError::ActorCommunicationError(e.to_string()))
    }
}

impl MenuClient {
    /// Plans a new menu. Fails with [`MenuError::UnknownRecipe`] if a recipe does not exist.
    #[instrument(skip(self))]
    pub async fn create_menu(&self, params: MenuCreate) -> Result<MenuId, MenuError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn rename(&self, id: MenuId, name: String) -> Result<Menu, MenuError> {
        debug!("Sending request");
        let update = MenuUpdate { name: Some(name) };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn add_recipe(&self, id: MenuId, recipe: RecipeId) -> Result<(), MenuError> {
        match self.act(id, MenuAction::AddRecipe(recipe)).await? {
            MenuActionResult::AddRecipe(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    /// Removes the entry at `index` and returns the recipe it referenced.
    #[instrument(skip(self))]
    pub async fn remove_recipe(&self, id: MenuId, index: usize) -> Result<RecipeId, MenuError> {
        match self.act(id, MenuAction::Remove(index)).await? {
            MenuActionResult::Remove(recipe) => Ok(recipe),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn move_up(&self, id: MenuId, index: usize) -> Result<bool, MenuError> {
        match self.act(id, MenuAction::MoveUp(index)).await? {
            MenuActionResult::MoveUp(moved) => Ok(moved),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn move_down(&self, id: MenuId, index: usize) -> Result<bool, MenuError> {
        match self.act(id, MenuAction::MoveDown(index)).await? {
            MenuActionResult::MoveDown(moved) => Ok(moved),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_pax(&self, id: MenuId, pax: u32) -> Result<(), MenuError> {
        match self.act(id, MenuAction::SetPax(pax)).await? {
            MenuActionResult::SetPax(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn purchase_order(&self, id: MenuId) -> Result<PurchaseOrder, MenuError> {
        match self.act(id, MenuAction::PurchaseOrder).await? {
            MenuActionResult::PurchaseOrder(order) => {
                info!(
                    families = order.families().count(),
                    lines = order.line_count(),
                    warnings = order.warnings().len(),
                    "Purchase order ready"
                );
                Ok(order)
            }
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn allergens(&self, id: MenuId) -> Result<Vec<Allergen>, MenuError> {
        match self.act(id, MenuAction::Allergens).await? {
            MenuActionResult::Allergens(allergens) => Ok(allergens),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn allergen_matrix(&self, id: MenuId) -> Result<AllergenMatrix, MenuError> {
        match self.act(id, MenuAction::AllergenMatrix).await? {
            MenuActionResult::AllergenMatrix(matrix) => Ok(matrix),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn service_sheet(&self, id: MenuId) -> Result<ServiceSheet, MenuError> {
        match self.act(id, MenuAction::ServiceSheet).await? {
            MenuActionResult::ServiceSheet(sheet) => Ok(sheet),
            other => Err(unexpected(other)),
        }
    }

    async fn act(&self, id: MenuId, action: MenuAction) -> Result<MenuActionResult, MenuError> {
        debug!(?action, "Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

fn unexpected(result: MenuActionResult) -> MenuError {
    MenuError::ActorCommunicationError(format!("Unexpected action result: {:?}", result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::PlanningError;
    use resource_actor::mock::{create_mock_client, expect_action};

    #[tokio::test]
    async fn test_move_up_reports_noop() {
        let (client, mut receiver) = create_mock_client::<Menu>(10);
        let menu_client = MenuClient::new(client);

        let task = tokio::spawn(async move { menu_client.move_up(MenuId(1), 0).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, MenuId(1));
        assert!(matches!(action, MenuAction::MoveUp(0)));
        responder.send(Ok(MenuActionResult::MoveUp(false))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(false));
    }

    #[tokio::test]
    async fn test_remove_out_of_range() {
        let (client, mut receiver) = create_mock_client::<Menu>(10);
        let menu_client = MenuClient::new(client);

        let task = tokio::spawn(async move { menu_client.remove_recipe(MenuId(1), 9).await });

        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        let error = MenuError::Planning(PlanningError::PositionOutOfRange { index: 9, len: 2 });
        responder.send(Err(FrameworkError::entity(error.clone()))).unwrap();

        assert_eq!(task.await.unwrap(), Err(error));
    }

    #[tokio::test]
    async fn test_missing_menu_is_a_communication_error() {
        let (client, mut receiver) = create_mock_client::<Menu>(10);
        let menu_client = MenuClient::new(client);

        let task = tokio::spawn(async move { menu_client.purchase_order(MenuId(42)).await });

        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::NotFound(MenuId(42).to_string())))
            .unwrap();

        match task.await.unwrap() {
            Err(MenuError::ActorCommunicationError(msg)) => assert!(msg.contains("menu_42")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
