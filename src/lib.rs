//! # Pizza Console
//!
//! > **Order and catalog management for a pizzeria, minus the rendering.**
//!
//! The heart of the crate is the [`reconcile`] module: an order being composed or
//! edited is an [`OrderDraft`](reconcile::OrderDraft) holding the picked pizzas as
//! `(id, description)` pairs, and pure functions turn it into the id-based
//! [`SubmissionPayload`](model::SubmissionPayload) the order service accepts,
//! checking every pick against the current [`CatalogSnapshot`](catalog::CatalogSnapshot).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`], [`catalog`], [`collection`])
//! Pizzas, orders and statuses as the service sends them, plus the two client-side
//! views: the catalog snapshot and the order list, both patched from write results.
//!
//! ### 2. The Reconciler ([`reconcile`])
//! Seeding a draft from an order, adding and removing pizzas, validating and
//! building the payload. The [`StatusPolicy`](reconcile::StatusPolicy) hook decides
//! which status changes an edit may make.
//!
//! ### 3. The Session ([`console`])
//! [`OrderConsole`](console::OrderConsole) holds the state a UI would show, turns
//! intents into reconciler and service calls, and reports each outcome to a
//! [`NotificationSink`](services::NotificationSink).
//!
//! ### 4. The Backends ([`services`], [`lifecycle`])
//! The console depends only on [`CatalogService`](services::CatalogService) and
//! [`OrderService`](services::OrderService). Two implementations ship:
//! - [`RestBackend`](services::RestBackend) talks to the HTTP API.
//! - [`PizzaSystem`](lifecycle::PizzaSystem) runs the same API in-process as two
//!   resource actors ([`catalog_actor`], [`order_actor`]) built on the generic
//!   [`framework`] and reached through the typed [`clients`].
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Scripted session against the in-process backend
//! RUST_LOG=info cargo run
//!
//! # Against a running server
//! cargo run -- --backend rest --api-base-url http://localhost:8080
//! ```
//!
//! Settings are read from `pizza-console.toml` and `APP__*` variables; see [`config`].

pub mod catalog;
pub mod catalog_actor;
pub mod clients;
pub mod collection;
pub mod config;
pub mod console;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod reconcile;
pub mod services;
