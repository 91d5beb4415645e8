//! Error types for the order actor.

use crate::model::PizzaId;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// One or more pizza ids are unknown to the catalog.
    #[error("Invalid pizza ids: {0:?}")]
    InvalidPizzas(Vec<PizzaId>),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// The catalog could not be reached while resolving pizzas.
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
