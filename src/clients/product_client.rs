//! # Product Client
//!
//! High-level API for the catalog actor.
use crate::catalog_actor::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the catalog actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity::<ProductError>()
            .unwrap_or_else(|e| ProductError::ActorCommunicationError(e.to_string()))
    }
}

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Replaces the whole catalog, keeping the given ids.
    #[instrument(skip(self, products), fields(count = products.len()))]
    pub async fn restore(&self, products: Vec<Product>) -> Result<usize, ProductError> {
        debug!("Sending request");
        self.inner.restore(products).await.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::mock::{create_mock_client, expect_create};

    #[tokio::test]
    async fn test_create_product_returns_id() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move {
            product_client
                .create_product(ProductCreate::new("Pimentón de la Vera", "especias", "kg"))
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.name, "Pimentón de la Vera");
        responder.send(Ok(ProductId(12))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(ProductId(12)));
    }

    #[tokio::test]
    async fn test_entity_errors_keep_their_type() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move {
            product_client
                .create_product(ProductCreate::new("", "especias", "kg"))
                .await
        });

        let (_, responder) = expect_create(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::entity(ProductError::EmptyName)))
            .unwrap();

        assert_eq!(task.await.unwrap(), Err(ProductError::EmptyName));
    }

    #[tokio::test]
    async fn test_closed_actor_is_a_communication_error() {
        let (client, receiver) = create_mock_client::<Product>(10);
        drop(receiver);

        let result = ProductClient::new(client).list().await;
        assert!(matches!(
            result,
            Err(ProductError::ActorCommunicationError(msg)) if msg.contains("closed")
        ));
    }
}
