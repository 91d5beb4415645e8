//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. The module path is hidden (`with_target(false)`); actors tag their
//! events with `entity_type` instead.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started`, `Shutdown` with the final store size
//! - **Entity operations**: `Created`, `Updated`, `Deleted`, `Action ok` and their failures
//! - **Service calls**: one span per client or REST call (`#[instrument]`)
//! - **Notifications**: every console outcome through [`TracingSink`](crate::services::TracingSink)
//!
//! ```bash
//! RUST_LOG=info cargo run
//!
//! # Payloads of create/update calls
//! RUST_LOG=debug cargo run
//!
//! RUST_LOG=pizza_console::services=debug cargo run -- --backend rest
//! ```
//!
//! With `RUST_LOG=debug` a save shows the payload once, then the actor's view:
//!
//! ```text
//! DEBUG create_order: create_order called payload=SubmissionPayload { nickname: "Mario", status: Processing, pizza_ids: [PizzaId(2)] }
//!  INFO entity_type="Order" id=order_1 size=1 Created
//!  INFO create_order: order_id=order_1 Order created
//! ```

/// Initializes the global subscriber. Call once, at the start of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
