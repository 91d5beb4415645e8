//! # Catalog Actor
//!
//! In-process stand-in for the pizza catalog service.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`PizzaItem`]
//! - [`error`] - [`CatalogError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! The catalog has no dependencies, so the actor runs with a `()` context:
//!
//! ```rust,ignore
//! let (actor, catalog) = catalog_actor::new(32);
//! tokio::spawn(actor.run(()));
//! let pizza = catalog.create_pizza("Margherita").await?;
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::CatalogClient;
use crate::framework::ResourceActor;
use crate::model::PizzaItem;

/// Creates a new catalog actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<PizzaItem>, CatalogClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CatalogClient::new(generic_client))
}
