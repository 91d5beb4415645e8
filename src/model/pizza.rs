//! Represents a pizza in the catalog.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! See [`impl ActorEntity for PizzaItem`](#impl-ActorEntity-for-PizzaItem) for details on:
//! - Creation parameters ([`PizzaCreate`])
//! - Update parameters ([`PizzaUpdate`])

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Server-assigned identifier of a pizza.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PizzaId(pub u64);

impl From<u64> for PizzaId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for PizzaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pizza_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PizzaItem {
    pub id: PizzaId,
    pub description: String,
}

impl PizzaItem {
    /// Creates a new PizzaItem instance.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the catalog service
    /// * `description` - Display name, e.g. "Margherita"
    pub fn new(id: u64, description: impl Into<String>) -> Self {
        Self {
            id: PizzaId(id),
            description: description.into(),
        }
    }
}

/// Payload for adding a pizza to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PizzaCreate {
    pub description: String,
}

/// Payload for renaming a catalog pizza.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PizzaUpdate {
    pub description: String,
}
