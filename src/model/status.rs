use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

/// Label shown in the order list for a code outside the known set.
pub const UNKNOWN_STATUS_LABEL: &str = "Status sconosciuto";

/// Lifecycle state of an order, carried on the wire as its integer code.
///
/// No transition between states is enforced here; see
/// [`StatusPolicy`](crate::reconcile::StatusPolicy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum OrderStatus {
    Processing,
    Pending,
    Fulfilled,
}

/// A status code outside `1..=3`.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Unknown order status code: {0}")]
pub struct UnknownStatus(pub i64);

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Processing,
        OrderStatus::Pending,
        OrderStatus::Fulfilled,
    ];

    pub fn code(self) -> i64 {
        match self {
            OrderStatus::Processing => 1,
            OrderStatus::Pending => 2,
            OrderStatus::Fulfilled => 3,
        }
    }

    pub fn from_code(code: i64) -> Result<Self, UnknownStatus> {
        match code {
            1 => Ok(OrderStatus::Processing),
            2 => Ok(OrderStatus::Pending),
            3 => Ok(OrderStatus::Fulfilled),
            other => Err(UnknownStatus(other)),
        }
    }

    /// Label used by the order list.
    pub fn list_label(self) -> &'static str {
        match self {
            OrderStatus::Processing => "In elaborazione",
            OrderStatus::Pending => "In attesa",
            OrderStatus::Fulfilled => "Evaso",
        }
    }

    /// Label used by the create/edit form.
    ///
    /// Differs from [`list_label`](Self::list_label) for codes 2 and 3. Both sets
    /// are reproduced as shipped until product decides which one is right.
    pub fn form_label(self) -> &'static str {
        match self {
            OrderStatus::Processing => "In elaborazione",
            OrderStatus::Pending => "Completato",
            OrderStatus::Fulfilled => "Annullato",
        }
    }
}

/// List label for a raw code, falling back to [`UNKNOWN_STATUS_LABEL`].
pub fn list_label_for_code(code: i64) -> &'static str {
    OrderStatus::from_code(code)
        .map(OrderStatus::list_label)
        .unwrap_or(UNKNOWN_STATUS_LABEL)
}

impl TryFrom<i64> for OrderStatus {
    type Error = UnknownStatus;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<OrderStatus> for i64 {
    fn from(status: OrderStatus) -> Self {
        status.code()
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.list_label())
    }
}
