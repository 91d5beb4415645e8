//! Client-side copy of the pizza catalog.

use crate::collection::CollectionError;
use crate::model::{PizzaId, PizzaItem};

/// The pizzas known to the console at a point in time; may be stale relative to the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSnapshot {
    pizzas: Vec<PizzaItem>,
}

impl CatalogSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fetch(pizzas: Vec<PizzaItem>) -> Result<Self, CollectionError> {
        let mut snapshot = Self::new();
        for pizza in pizzas {
            snapshot.apply_created(pizza)?;
        }
        Ok(snapshot)
    }

    pub fn get(&self, id: PizzaId) -> Option<&PizzaItem> {
        self.pizzas.iter().find(|pizza| pizza.id == id)
    }

    pub fn contains(&self, id: PizzaId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PizzaItem> {
        self.pizzas.iter()
    }

    pub fn len(&self) -> usize {
        self.pizzas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pizzas.is_empty()
    }

    pub fn apply_created(&mut self, pizza: PizzaItem) -> Result<(), CollectionError> {
        if self.contains(pizza.id) {
            return Err(CollectionError::DuplicateId(pizza.id.to_string()));
        }
        self.pizzas.push(pizza);
        Ok(())
    }

    pub fn apply_updated(&mut self, pizza: PizzaItem) -> Result<(), CollectionError> {
        let slot = self
            .pizzas
            .iter_mut()
            .find(|existing| existing.id == pizza.id)
            .ok_or_else(|| CollectionError::NotFound(pizza.id.to_string()))?;
        *slot = pizza;
        Ok(())
    }

    pub fn apply_deleted(&mut self, id: PizzaId) {
        self.pizzas.retain(|pizza| pizza.id != id);
    }
}

impl<'a> IntoIterator for &'a CatalogSnapshot {
    type Item = &'a PizzaItem;
    type IntoIter = std::slice::Iter<'a, PizzaItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
