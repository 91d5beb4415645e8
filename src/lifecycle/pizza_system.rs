use crate::clients::{CatalogClient, OrderClient};
use crate::model::{Order, OrderId, OrderStatus, PizzaId, PizzaItem, SubmissionPayload};
use crate::services::{CatalogService, OrderService, TransportError};
use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info};

/// An actor task ended abnormally during shutdown.
#[derive(Debug, Error)]
#[error("Actor task failed: {0}")]
pub struct ShutdownError(String);

/// The in-process backend: a catalog actor and an order actor wired together.
///
/// The order actor receives a [`CatalogClient`] as its context so it can resolve
/// pizza ids. `PizzaSystem` implements [`CatalogService`] and [`OrderService`], so
/// the console can use it wherever it would use the REST backend.
///
/// ```ignore
/// let system = PizzaSystem::new(32);
/// let margherita = system.catalog_client.create_pizza("Margherita").await?;
/// system.shutdown().await?;
/// ```
pub struct PizzaSystem {
    pub catalog_client: CatalogClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl PizzaSystem {
    /// Spawns both actors. Must be called inside a Tokio runtime.
    pub fn new(buffer_size: usize) -> Self {
        let (catalog_actor, catalog_client) = crate::catalog_actor::new(buffer_size);
        let (order_actor, order_client) = crate::order_actor::new(buffer_size);

        let catalog_handle = tokio::spawn(catalog_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(catalog_client.clone()));

        Self {
            catalog_client,
            order_client,
            handles: vec![catalog_handle, order_handle],
        }
    }

    /// Drops the clients and waits for both actors to drain.
    ///
    /// The catalog actor only stops once the order actor has exited, since the
    /// order actor holds a catalog client of its own.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");
        drop(self.order_client);
        drop(self.catalog_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(ShutdownError(format!("{e:?}")));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

#[async_trait]
impl CatalogService for PizzaSystem {
    async fn list_pizzas(&self) -> Result<Vec<PizzaItem>, TransportError> {
        Ok(self.catalog_client.list_pizzas().await?)
    }

    async fn create_pizza(&self, description: &str) -> Result<PizzaItem, TransportError> {
        Ok(self.catalog_client.create_pizza(description).await?)
    }

    async fn update_pizza(&self, id: PizzaId, description: &str) -> Result<PizzaItem, TransportError> {
        Ok(self.catalog_client.update_pizza(id, description).await?)
    }

    async fn delete_pizza(&self, id: PizzaId) -> Result<(), TransportError> {
        Ok(self.catalog_client.delete_pizza(id).await?)
    }
}

#[async_trait]
impl OrderService for PizzaSystem {
    async fn list_orders(&self) -> Result<Vec<Order>, TransportError> {
        Ok(self.order_client.list_orders().await?)
    }

    async fn list_orders_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, TransportError> {
        Ok(self.order_client.list_by_status(status).await?)
    }

    async fn create_order(&self, payload: &SubmissionPayload) -> Result<Order, TransportError> {
        Ok(self.order_client.create_order(payload.clone()).await?)
    }

    async fn update_order(&self, id: OrderId, payload: &SubmissionPayload) -> Result<Order, TransportError> {
        Ok(self.order_client.update_order(id, payload.clone()).await?)
    }

    async fn update_order_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, TransportError> {
        Ok(self.order_client.set_status(id, status).await?)
    }

    async fn delete_order(&self, id: OrderId) -> Result<(), TransportError> {
        Ok(self.order_client.delete_order(id).await?)
    }
}
