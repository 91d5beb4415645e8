use crate::model::OrderStatus;
use std::fmt::Display;
use thiserror::Error;

/// Draft fields that must be filled before submission, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Nickname,
    Status,
    Pizzas,
}

impl Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            DraftField::Nickname => "nickname",
            DraftField::Status => "status",
            DraftField::Pizzas => "pizzas",
        })
    }
}

/// Why a draft cannot be turned into a submission.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(DraftField),

    /// Selected pizzas that are no longer in the catalog, by description.
    #[error("Unresolved pizzas: {}", .0.join(", "))]
    UnresolvedSelection(Vec<String>),

    #[error("Status change not allowed: {from} -> {to}")]
    Transition { from: OrderStatus, to: OrderStatus },
}
