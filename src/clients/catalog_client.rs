use crate::catalog_actor::CatalogError;
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{PizzaCreate, PizzaId, PizzaItem, PizzaUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the catalog actor.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<PizzaItem>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<PizzaItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_pizza(&self, description: &str) -> Result<PizzaItem, CatalogError> {
        debug!("Sending request");
        self.inner
            .create(PizzaCreate {
                description: description.to_string(),
            })
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_pizza(&self, id: PizzaId, description: &str) -> Result<PizzaItem, CatalogError> {
        debug!("Sending request");
        self.inner
            .update(
                id,
                PizzaUpdate {
                    description: description.to_string(),
                },
            )
            .await
            .map_err(Self::map_error)
    }

    pub async fn list_pizzas(&self) -> Result<Vec<PizzaItem>, CatalogError> {
        self.list().await
    }

    pub async fn delete_pizza(&self, id: PizzaId) -> Result<(), CatalogError> {
        self.delete(id).await
    }
}

#[async_trait]
impl ActorClient<PizzaItem> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<PizzaItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CatalogError::NotFound(id),
            other => match other.entity_error::<CatalogError>() {
                Some(entity) => entity.clone(),
                None => CatalogError::ActorCommunicationError(other.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;

    #[tokio::test]
    async fn test_entity_errors_come_back_typed() {
        let mut mock = MockClient::<PizzaItem>::new();
        mock.expect_create().return_ok(PizzaItem::new(1, "Margherita"));
        mock.expect_update(PizzaId(1))
            .return_err(FrameworkError::EntityError(Box::new(CatalogError::MissingDescription)));
        mock.expect_get(PizzaId(1))
            .return_ok(Some(PizzaItem::new(1, "Margherita")));
        mock.expect_delete(PizzaId(4))
            .return_err(FrameworkError::NotFound("pizza_4".into()));

        let catalog = CatalogClient::new(mock.client());
        let created = catalog.create_pizza("Margherita").await.unwrap();
        assert_eq!(created.id, PizzaId(1));
        assert_eq!(
            catalog.update_pizza(PizzaId(1), "").await,
            Err(CatalogError::MissingDescription)
        );
        assert_eq!(catalog.get(PizzaId(1)).await.unwrap(), Some(created));
        assert_eq!(
            catalog.delete_pizza(PizzaId(4)).await,
            Err(CatalogError::NotFound("pizza_4".into()))
        );

        mock.verify();
    }
}
