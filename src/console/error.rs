use crate::collection::CollectionError;
use crate::model::OrderId;
use crate::reconcile::ValidationError;
use crate::services::TransportError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConsoleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A fetch returned data that cannot form a consistent view.
    #[error(transparent)]
    Collection(#[from] CollectionError),

    #[error("Order not in the current list: {0}")]
    UnknownOrder(OrderId),

    #[error("No order is being edited")]
    NoEditor,

    #[error("Pizza description is empty")]
    EmptyDescription,
}
