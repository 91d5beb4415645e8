//! Custom actions for the order actor.

use crate::model::OrderStatus;

/// Operations on an order beyond CRUD.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Changes the status only, leaving nickname and pizzas untouched.
    SetStatus(OrderStatus),
}

/// Results from [`OrderAction`] - variants match 1:1.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// The status the order had before the change.
    SetStatus { previous: OrderStatus },
}
