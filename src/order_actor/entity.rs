//! Entity trait implementation for [`Order`].
//!
//! Orders depend on the catalog: every pizza id in a create or update payload is
//! resolved against the catalog actor and the resolved pizzas are embedded in the
//! stored order. An unknown id rejects the whole write.

use super::{OrderAction, OrderActionResult, OrderError};
use crate::clients::CatalogClient;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderId, PizzaId, PizzaItem, SubmissionPayload};
use async_trait::async_trait;
use tracing::debug;

fn check_payload(payload: &SubmissionPayload) -> Result<(), OrderError> {
    if payload.nickname.is_empty() {
        return Err(OrderError::ValidationError("nickname is required".into()));
    }
    if payload.pizza_ids.is_empty() {
        return Err(OrderError::ValidationError("at least one pizza is required".into()));
    }
    Ok(())
}

async fn resolve_pizzas(catalog: &CatalogClient, ids: &[PizzaId]) -> Result<Vec<PizzaItem>, OrderError> {
    let known = catalog
        .list_pizzas()
        .await
        .map_err(|e| OrderError::CatalogUnavailable(e.to_string()))?;

    let mut resolved = Vec::with_capacity(ids.len());
    let mut missing = Vec::new();
    for id in ids {
        match known.iter().find(|pizza| pizza.id == *id) {
            Some(pizza) => resolved.push(pizza.clone()),
            None => missing.push(*id),
        }
    }

    if missing.is_empty() {
        Ok(resolved)
    } else {
        debug!(?missing, "Unknown pizza ids");
        Err(OrderError::InvalidPizzas(missing))
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = SubmissionPayload;
    type Update = SubmissionPayload;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = CatalogClient;
    type Error = OrderError;

    /// Builds the order with id-only pizzas; [`on_create`](Self::on_create) fills them in.
    fn from_create_params(id: OrderId, params: SubmissionPayload) -> Result<Self, Self::Error> {
        check_payload(&params)?;
        Ok(Self {
            id,
            nickname: params.nickname,
            status: params.status,
            pizzas: params
                .pizza_ids
                .into_iter()
                .map(|pizza_id| PizzaItem {
                    id: pizza_id,
                    description: String::new(),
                })
                .collect(),
        })
    }

    async fn on_create(&mut self, catalog: &CatalogClient) -> Result<(), Self::Error> {
        let ids: Vec<PizzaId> = self.pizza_ids().collect();
        self.pizzas = resolve_pizzas(catalog, &ids).await?;
        Ok(())
    }

    /// Replaces nickname, status and pizzas.
    async fn on_update(&mut self, update: SubmissionPayload, catalog: &CatalogClient) -> Result<(), Self::Error> {
        check_payload(&update)?;
        self.pizzas = resolve_pizzas(catalog, &update.pizza_ids).await?;
        self.nickname = update.nickname;
        self.status = update.status;
        Ok(())
    }

    async fn handle_action(&mut self, action: OrderAction, _catalog: &CatalogClient) -> Result<OrderActionResult, Self::Error> {
        match action {
            OrderAction::SetStatus(status) => {
                let previous = self.status;
                self.status = status;
                Ok(OrderActionResult::SetStatus { previous })
            }
        }
    }
}
