//! Starting and stopping the in-process backend, and process-wide tracing.

pub mod pizza_system;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use pizza_system::*;
