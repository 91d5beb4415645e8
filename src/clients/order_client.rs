use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderId, OrderStatus, SubmissionPayload};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the order actor.
///
/// Pizza resolution happens in the order actor's `on_create` and `on_update`
/// hooks; this client only forwards payloads.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, payload))]
    pub async fn create_order(&self, payload: SubmissionPayload) -> Result<Order, OrderError> {
        debug!(?payload, "create_order called");
        let order = self.inner.create(payload).await.map_err(Self::map_error)?;
        info!(order_id = %order.id, "Order created");
        Ok(order)
    }

    #[instrument(skip(self, payload))]
    pub async fn update_order(&self, id: OrderId, payload: SubmissionPayload) -> Result<Order, OrderError> {
        debug!(?payload, "update_order called");
        self.inner.update(id, payload).await.map_err(Self::map_error)
    }

    /// Changes only the status; returns the updated order.
    #[instrument(skip(self))]
    pub async fn set_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        let (order, OrderActionResult::SetStatus { previous }) = self
            .inner
            .perform_action(id, OrderAction::SetStatus(status))
            .await
            .map_err(Self::map_error)?;
        info!(order_id = %order.id, %previous, %status, "Status changed");
        Ok(order)
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.list().await
    }

    #[instrument(skip(self))]
    pub async fn list_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError> {
        let orders = self.list().await?;
        Ok(orders.into_iter().filter(|order| order.status == status).collect())
    }

    pub async fn delete_order(&self, id: OrderId) -> Result<(), OrderError> {
        self.delete(id).await
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => match other.entity_error::<OrderError>() {
                Some(entity) => entity.clone(),
                None => OrderError::ActorCommunicationError(other.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_update};
    use crate::model::PizzaId;

    #[tokio::test]
    async fn test_set_status_sends_status_only_action() {
        let (client, mut receiver) = create_mock_client::<Order>(4);
        let orders = OrderClient::new(client);
        let task = tokio::spawn(async move { orders.set_status(OrderId(3), OrderStatus::Fulfilled).await });

        let (id, action, respond_to) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, OrderId(3));
        assert!(matches!(action, OrderAction::SetStatus(OrderStatus::Fulfilled)));

        let order = Order::new(3, "Lucia", OrderStatus::Fulfilled, vec![]);
        respond_to
            .send(Ok((
                order.clone(),
                OrderActionResult::SetStatus {
                    previous: OrderStatus::Pending,
                },
            )))
            .unwrap();
        assert_eq!(task.await.unwrap(), Ok(order));
    }

    #[tokio::test]
    async fn test_update_forwards_payload_and_recovers_rejection() {
        let (client, mut receiver) = create_mock_client::<Order>(4);
        let orders = OrderClient::new(client);
        let payload = SubmissionPayload {
            nickname: "Mario".into(),
            status: OrderStatus::Pending,
            pizza_ids: vec![PizzaId(4)],
        };
        let task = tokio::spawn(async move { orders.update_order(OrderId(2), payload).await });

        let (id, update, respond_to) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, OrderId(2));
        assert_eq!(update.pizza_ids, vec![PizzaId(4)]);

        respond_to
            .send(Err(FrameworkError::EntityError(Box::new(OrderError::InvalidPizzas(vec![
                PizzaId(4),
            ])))))
            .unwrap();
        assert_eq!(
            task.await.unwrap(),
            Err(OrderError::InvalidPizzas(vec![PizzaId(4)]))
        );
    }
}
