//! # Service Contracts
//!
//! The console talks to the outside world through three traits:
//!
//! - [`CatalogService`] - list and maintain catalog pizzas
//! - [`OrderService`] - list and maintain orders
//! - [`NotificationSink`] - surface one user-visible message per operation
//!
//! Two backends implement the first two: the in-process
//! [`PizzaSystem`](crate::lifecycle::PizzaSystem) and the HTTP [`RestBackend`].
//! Both report failures as [`TransportError`].

pub mod error;
pub mod notify;
pub mod rest;

pub use error::*;
pub use notify::*;
pub use rest::*;

use crate::model::{Order, OrderId, OrderStatus, PizzaId, PizzaItem, SubmissionPayload};
use async_trait::async_trait;

#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn list_pizzas(&self) -> Result<Vec<PizzaItem>, TransportError>;

    async fn create_pizza(&self, description: &str) -> Result<PizzaItem, TransportError>;

    async fn update_pizza(&self, id: PizzaId, description: &str) -> Result<PizzaItem, TransportError>;

    async fn delete_pizza(&self, id: PizzaId) -> Result<(), TransportError>;
}

#[async_trait]
pub trait OrderService: Send + Sync {
    async fn list_orders(&self) -> Result<Vec<Order>, TransportError>;

    /// Orders currently in `status`.
    async fn list_orders_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, TransportError>;

    /// Creates an order; the returned order carries the server-assigned id.
    async fn create_order(&self, payload: &SubmissionPayload) -> Result<Order, TransportError>;

    /// Replaces nickname, status and pizzas of an existing order.
    async fn update_order(&self, id: OrderId, payload: &SubmissionPayload) -> Result<Order, TransportError>;

    /// Changes only the status of an existing order.
    async fn update_order_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, TransportError>;

    async fn delete_order(&self, id: OrderId) -> Result<(), TransportError>;
}

/// Severity of a user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Receives the one message every console operation produces.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str, kind: NotificationKind);
}
