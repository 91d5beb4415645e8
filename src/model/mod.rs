//! Plain data structures shared by the reconciler, the services and the backends.

pub mod order;
pub mod pizza;
pub mod status;

pub use order::*;
pub use pizza::*;
pub use status::*;
