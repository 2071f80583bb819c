//! # ActorClient Trait
//!
//! Shared surface for resource-specific clients: `get`, `delete` and `list` come for free
//! once a client exposes its inner `ResourceClient` and an error mapping.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read/delete operations.
///
/// # Example
///
/// ```rust
/// use resource_actor::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Supplier { id: u32 }
/// #[derive(Debug)] struct SupplierCreate;
/// #[derive(Debug)] struct SupplierUpdate;
/// #[derive(Debug)] enum SupplierAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct SupplierError(String);
///
/// #[async_trait]
/// impl ActorEntity for Supplier {
///     type Id = u32;
///     type Create = SupplierCreate;
///     type Update = SupplierUpdate;
///     type Action = SupplierAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = SupplierError;
///
///     fn from_create_params(id: u32, _: SupplierCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     fn id(&self) -> &u32 { &self.id }
///     async fn on_update(&mut self, _: SupplierUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: SupplierAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct SupplierClient {
///     inner: ResourceClient<Supplier>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Supplier> for SupplierClient {
///     type Error = SupplierError;
///
///     fn inner(&self) -> &ResourceClient<Supplier> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         SupplierError(e.to_string())
///     }
/// }
///
/// async fn usage(client: SupplierClient) {
///     let _ = client.get(1).await;
///     let _ = client.list().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Every stored entity, ordered by id.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }
}
