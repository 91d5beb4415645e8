//! Failure of a service call, whichever backend served it.

use crate::catalog_actor::CatalogError;
use crate::order_actor::OrderError;
use thiserror::Error;

/// Status code reported for requests the in-process backend refuses.
const BAD_REQUEST: u16 = 400;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The addressed resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backend answered but refused the request.
    #[error("Rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The backend could not be reached.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// The response body did not have the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl From<CatalogError> for TransportError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(id) => TransportError::NotFound(id),
            CatalogError::MissingDescription => TransportError::Rejected {
                status: BAD_REQUEST,
                message: e.to_string(),
            },
            CatalogError::ActorCommunicationError(msg) => TransportError::Unavailable(msg),
        }
    }
}

impl From<OrderError> for TransportError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(id) => TransportError::NotFound(id),
            OrderError::InvalidPizzas(_) | OrderError::ValidationError(_) => TransportError::Rejected {
                status: BAD_REQUEST,
                message: e.to_string(),
            },
            OrderError::CatalogUnavailable(msg) | OrderError::ActorCommunicationError(msg) => {
                TransportError::Unavailable(msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PizzaId;

    #[test]
    fn test_unknown_pizzas_are_a_rejection() {
        let err = TransportError::from(OrderError::InvalidPizzas(vec![PizzaId(9)]));
        assert!(matches!(err, TransportError::Rejected { status: 400, .. }));
    }

    #[test]
    fn test_not_found_keeps_the_id() {
        let err = TransportError::from(CatalogError::NotFound("pizza_3".into()));
        assert_eq!(err, TransportError::NotFound("pizza_3".into()));
    }
}
