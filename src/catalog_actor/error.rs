//! Error types for the catalog actor.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested pizza was not found.
    #[error("Pizza not found: {0}")]
    NotFound(String),

    /// The description is empty.
    #[error("Pizza description is required")]
    MissingDescription,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
