//! # Order Draft Reconciliation
//!
//! Converts between what the user picks in the editor and what the order
//! service accepts. A draft keeps each picked pizza as an `(id, description)`
//! pair resolved against the [`CatalogSnapshot`](crate::catalog::CatalogSnapshot)
//! at the moment it is picked; on submission the ids are checked against the
//! snapshot again, since pizzas may have been deleted in the meantime.
//!
//! Everything here is pure and synchronous.
//!
//! ```rust,ignore
//! let draft = OrderDraft::new()
//!     .with_nickname("Mario")
//!     .with_status(OrderStatus::Processing)
//!     .add_selection(PizzaId(2), &snapshot);
//! let payload = draft.to_submission(&snapshot)?;
//! ```

pub mod draft;
pub mod error;
pub mod policy;

pub use draft::*;
pub use error::*;
pub use policy::*;
