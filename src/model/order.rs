//! Represents a customer order.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
//! - Creation and update parameters ([`SubmissionPayload`])
//! - Custom actions ([`OrderAction`](crate::order_actor::OrderAction))

use crate::model::{OrderStatus, PizzaId, PizzaItem};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Server-assigned identifier of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// An order as returned by the order service, pizzas embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub nickname: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub pizzas: Vec<PizzaItem>,
}

impl Order {
    pub fn new(id: u64, nickname: impl Into<String>, status: OrderStatus, pizzas: Vec<PizzaItem>) -> Self {
        Self {
            id: OrderId(id),
            nickname: nickname.into(),
            status,
            pizzas,
        }
    }

    /// Pizza ids in the order's own ordering.
    pub fn pizza_ids(&self) -> impl Iterator<Item = PizzaId> + '_ {
        self.pizzas.iter().map(|pizza| pizza.id)
    }
}

/// Identifier-based representation of a draft, sent on create and update.
///
/// Serializes to the create body of the order API: `{nickname, status, pizzaIds}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub nickname: String,
    pub status: OrderStatus,
    pub pizza_ids: Vec<PizzaId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_decodes_server_shape() {
        let raw = r#"{"id":4,"nickname":"Mario","status":2,
            "pizzas":[{"id":1,"description":"Margherita"},{"id":3,"description":"Capricciosa"}]}"#;
        let order: Order = serde_json::from_str(raw).unwrap();
        assert_eq!(order.id, OrderId(4));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.pizza_ids().collect::<Vec<_>>(), vec![PizzaId(1), PizzaId(3)]);
    }

    #[test]
    fn test_submission_uses_camel_case_ids() {
        let payload = SubmissionPayload {
            nickname: "Mario".into(),
            status: OrderStatus::Processing,
            pizza_ids: vec![PizzaId(2)],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"nickname": "Mario", "status": 1, "pizzaIds": [2]}));
    }
}
