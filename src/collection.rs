//! # Order Collection
//!
//! The client-side list of orders. It is replaced on a full fetch and patched
//! from the results of successful create, update and delete calls, so the
//! displayed list never needs a refetch after a write.

use crate::model::{Order, OrderId, OrderStatus};
use thiserror::Error;

/// A patch that does not fit the current contents of a collection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CollectionError {
    #[error("Duplicate id: {0}")]
    DuplicateId(String),
    #[error("Not in collection: {0}")]
    NotFound(String),
}

/// Orders in the order the service returned them, unique by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderCollection {
    orders: Vec<Order>,
}

impl OrderCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from a full fetch, rejecting repeated ids.
    pub fn from_fetch(orders: Vec<Order>) -> Result<Self, CollectionError> {
        let mut collection = Self::new();
        for order in orders {
            collection.apply_created(order)?;
        }
        Ok(collection)
    }

    /// Appends a newly created order.
    pub fn apply_created(&mut self, order: Order) -> Result<(), CollectionError> {
        if self.position(order.id).is_some() {
            return Err(CollectionError::DuplicateId(order.id.to_string()));
        }
        self.orders.push(order);
        Ok(())
    }

    /// Replaces the entry with the same id, keeping its position.
    pub fn apply_updated(&mut self, order: Order) -> Result<(), CollectionError> {
        let index = self
            .position(order.id)
            .ok_or_else(|| CollectionError::NotFound(order.id.to_string()))?;
        self.orders[index] = order;
        Ok(())
    }

    /// Removes the entry with `id`; absent ids are ignored.
    pub fn apply_deleted(&mut self, id: OrderId) {
        self.orders.retain(|order| order.id != id);
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| order.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn with_status(&self, status: OrderStatus) -> impl Iterator<Item = &Order> + '_ {
        self.orders.iter().filter(move |order| order.status == status)
    }

    fn position(&self, id: OrderId) -> Option<usize> {
        self.orders.iter().position(|order| order.id == id)
    }
}

impl<'a> IntoIterator for &'a OrderCollection {
    type Item = &'a Order;
    type IntoIter = std::slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: u64, nickname: &str) -> Order {
        Order::new(id, nickname, OrderStatus::Processing, vec![])
    }

    fn three() -> OrderCollection {
        OrderCollection::from_fetch(vec![order(1, "Anna"), order(2, "Bruno"), order(3, "Carla")]).unwrap()
    }

    fn ids(collection: &OrderCollection) -> Vec<u64> {
        collection.iter().map(|o| o.id.0).collect()
    }

    #[test]
    fn test_delete_removes_one_and_repeats_are_noops() {
        let mut collection = three();
        collection.apply_deleted(OrderId(2));
        assert_eq!(ids(&collection), vec![1, 3]);
        collection.apply_deleted(OrderId(2));
        assert_eq!(ids(&collection), vec![1, 3]);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut collection = three();
        collection.apply_updated(order(2, "Bruna")).unwrap();
        assert_eq!(ids(&collection), vec![1, 2, 3]);
        assert_eq!(collection.get(OrderId(2)).unwrap().nickname, "Bruna");
        assert_eq!(collection.get(OrderId(1)).unwrap().nickname, "Anna");
    }

    #[test]
    fn test_update_of_unknown_order_fails() {
        let mut collection = three();
        let err = collection.apply_updated(order(9, "Zeno")).unwrap_err();
        assert_eq!(err, CollectionError::NotFound("order_9".into()));
        assert_eq!(collection, three());
    }

    #[test]
    fn test_created_order_is_appended_once() {
        let mut collection = three();
        collection.apply_created(order(4, "Dario")).unwrap();
        assert_eq!(ids(&collection), vec![1, 2, 3, 4]);
        assert_eq!(
            collection.apply_created(order(4, "Dario")),
            Err(CollectionError::DuplicateId("order_4".into()))
        );
        assert_eq!(collection.len(), 4);
    }

    #[test]
    fn test_fetch_with_repeated_id_is_rejected() {
        let result = OrderCollection::from_fetch(vec![order(1, "Anna"), order(1, "Anna")]);
        assert!(matches!(result, Err(CollectionError::DuplicateId(_))));
    }

    #[test]
    fn test_with_status() {
        let mut collection = three();
        let mut done = order(2, "Bruno");
        done.status = OrderStatus::Fulfilled;
        collection.apply_updated(done).unwrap();
        let fulfilled: Vec<_> = collection.with_status(OrderStatus::Fulfilled).map(|o| o.id.0).collect();
        assert_eq!(fulfilled, vec![2]);
    }
}
