use crate::backup::{BackupDocument, BackupError};
use crate::clients::{ActorClient, MenuClient, ProductClient, RecipeClient};
use crate::model::Settings;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info, warn};

/// Default request channel capacity for each actor.
pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// Runs the catalog, recipe and menu actors and wires them together.
///
/// The menu actor gets clones of the recipe and catalog clients as its context. The app
/// settings are plain data kept here; they only matter for headers and backups.
///
/// # Example
///
/// ```ignore
/// let mut system = KitchenSystem::new(DEFAULT_BUFFER_SIZE);
/// system.import_backup(BackupDocument::read_from("recetario.json")?).await?;
///
/// let menu = system.menu_client.create_menu(params).await?;
/// let order = system.menu_client.purchase_order(menu).await?;
///
/// system.shutdown().await?;
/// ```
pub struct KitchenSystem {
    pub product_client: ProductClient,
    pub recipe_client: RecipeClient,
    pub menu_client: MenuClient,
    settings: Settings,
    handles: Vec<JoinHandle<()>>,
}

impl KitchenSystem {
    /// Spawns all actors. Must be called inside a Tokio runtime.
    pub fn new(buffer_size: usize) -> Self {
        // 1. Create actors (no dependencies)
        let (catalog_actor, product_client) = crate::catalog_actor::new(buffer_size);
        let (recipe_actor, recipe_client) = crate::recipe_actor::new(buffer_size);
        let (menu_actor, menu_client) = crate::menu_actor::new(buffer_size);

        let product_client = ProductClient::new(product_client);
        let recipe_client = RecipeClient::new(recipe_client);
        let menu_client = MenuClient::new(menu_client);

        // 2. Start actors with injected context
        let catalog_handle = tokio::spawn(catalog_actor.run(()));
        let recipe_handle = tokio::spawn(recipe_actor.run(()));
        let menu_handle =
            tokio::spawn(menu_actor.run((recipe_client.clone(), product_client.clone())));

        info!(buffer_size, "Kitchen system started");
        Self {
            product_client,
            recipe_client,
            menu_client,
            settings: Settings::default(),
            // Menu first: it holds the other two clients.
            handles: vec![menu_handle, recipe_handle, catalog_handle],
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Snapshot of settings, recipes and catalog, both lists ordered by id.
    pub async fn export_backup(&self) -> Result<BackupDocument, BackupError> {
        let recipes = self.recipe_client.list().await?;
        let products = self.product_client.list().await?;
        info!(recipes = recipes.len(), products = products.len(), "Backup exported");
        Ok(BackupDocument::new(self.settings.clone(), recipes, products))
    }

    /// Replaces settings, recipes and catalog with the document's contents.
    ///
    /// Ids are kept, and new entities continue after the highest imported id. Menus are not
    /// part of a backup and are left alone. On error nothing changes: recipes already
    /// restored are put back when the catalog is rejected.
    pub async fn import_backup(&mut self, document: BackupDocument) -> Result<(), BackupError> {
        let previous_recipes = self.recipe_client.list().await?;
        let recipes = self.recipe_client.restore(document.recipes).await?;
        let products = match self.product_client.restore(document.product_database).await {
            Ok(products) => products,
            Err(e) => {
                warn!(error = %e, "Catalog rejected, putting previous recipes back");
                if let Err(rollback) = self.recipe_client.restore(previous_recipes).await {
                    error!(error = %rollback, "Could not put previous recipes back");
                }
                return Err(e.into());
            }
        };
        self.settings = document.settings;
        info!(
            version = %document.version,
            recipes,
            products,
            "Backup imported"
        );
        Ok(())
    }

    /// Drops every client and waits for the actors to finish.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down kitchen system...");

        drop(self.menu_client);
        drop(self.recipe_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e);
            }
        }

        info!("Kitchen system shutdown complete.");
        Ok(())
    }
}
