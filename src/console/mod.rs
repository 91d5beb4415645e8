//! # Console Session
//!
//! [`OrderConsole`] is the boundary between a presentation layer and the rest of
//! the crate. It owns the catalog snapshot, the order list and the editor (the
//! draft currently open, if any), turns user intents into reconciler and service
//! calls, and reports outcomes to a [`NotificationSink`].
//!
//! Writes notify exactly once, on success or failure. Fetches notify only when
//! they fail. A failed operation leaves the snapshot, the list and the editor
//! as they were.

pub mod error;
pub mod messages;

pub use error::*;

use crate::catalog::CatalogSnapshot;
use crate::collection::{CollectionError, OrderCollection};
use crate::model::{Order, OrderId, OrderStatus, PizzaId, PizzaItem};
use crate::reconcile::{seed_from_order, AnyTransition, DraftTarget, OrderDraft, StatusPolicy, ValidationError};
use crate::services::{CatalogService, NotificationKind, NotificationSink, OrderService};
use tracing::{info, instrument, warn};

pub struct OrderConsole<B, N> {
    backend: B,
    sink: N,
    policy: Box<dyn StatusPolicy + Send + Sync>,
    catalog: CatalogSnapshot,
    orders: OrderCollection,
    editor: Option<OrderDraft>,
}

impl<B, N> OrderConsole<B, N>
where
    B: CatalogService + OrderService,
    N: NotificationSink,
{
    /// A console with empty state; call [`load`](Self::load) to fill it.
    pub fn new(backend: B, sink: N) -> Self {
        Self {
            backend,
            sink,
            policy: Box::new(AnyTransition),
            catalog: CatalogSnapshot::new(),
            orders: OrderCollection::new(),
            editor: None,
        }
    }

    /// Replaces the status policy applied when saving edits.
    pub fn with_policy(mut self, policy: impl StatusPolicy + Send + Sync + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub fn catalog(&self) -> &CatalogSnapshot {
        &self.catalog
    }

    pub fn orders(&self) -> &OrderCollection {
        &self.orders
    }

    /// The open draft, if an editor is open.
    pub fn editor(&self) -> Option<&OrderDraft> {
        self.editor.as_ref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Ends the session, handing the backend back for shutdown.
    pub fn into_backend(self) -> B {
        self.backend
    }

    fn success(&self, message: &str) {
        self.sink.notify(message, NotificationKind::Success);
    }

    fn failure(&self, message: &str) {
        self.sink.notify(message, NotificationKind::Error);
    }

    // =========================================================================
    // Fetching
    // =========================================================================

    /// Fetches pizzas and orders together. Both must succeed.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Result<(), ConsoleError> {
        let fetched = tokio::try_join!(self.backend.list_pizzas(), self.backend.list_orders());
        let (pizzas, orders) = match fetched {
            Ok(both) => both,
            Err(e) => {
                warn!(error = %e, "Initial fetch failed");
                self.failure(messages::FETCH_FAILED);
                return Err(e.into());
            }
        };

        let views = CatalogSnapshot::from_fetch(pizzas)
            .and_then(|catalog| Ok((catalog, OrderCollection::from_fetch(orders)?)));
        match views {
            Ok((catalog, orders)) => {
                info!(pizzas = catalog.len(), orders = orders.len(), "Loaded");
                self.catalog = catalog;
                self.orders = orders;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Fetched data is inconsistent");
                self.failure(messages::FETCH_FAILED);
                Err(e.into())
            }
        }
    }

    /// Refetches the catalog only.
    #[instrument(skip(self))]
    pub async fn refresh_pizzas(&mut self) -> Result<(), ConsoleError> {
        let fetched = self
            .backend
            .list_pizzas()
            .await
            .map_err(ConsoleError::from)
            .and_then(|pizzas| Ok(CatalogSnapshot::from_fetch(pizzas)?));
        match fetched {
            Ok(catalog) => {
                self.catalog = catalog;
                Ok(())
            }
            Err(e) => {
                self.failure(messages::PIZZAS_FETCH_FAILED);
                Err(e)
            }
        }
    }

    // =========================================================================
    // Editor
    // =========================================================================

    /// Opens the editor on an empty draft, discarding any open one.
    pub fn open_create(&mut self) {
        self.editor = Some(OrderDraft::new());
    }

    /// Opens the editor on an existing order.
    ///
    /// Pizzas of the order that the snapshot no longer has are left out of the
    /// draft and reported with an error notification; the editor still opens.
    pub fn open_edit(&mut self, order_id: OrderId) -> Result<(), ConsoleError> {
        let Some(order) = self.orders.get(order_id) else {
            self.failure(messages::ORDER_NOT_FOUND);
            return Err(ConsoleError::UnknownOrder(order_id));
        };

        let outcome = seed_from_order(order, &self.catalog);
        if !outcome.is_complete() {
            warn!(%order_id, unresolved = ?outcome.unresolved, "Order references missing pizzas");
            self.failure(messages::PIZZAS_NO_LONGER_AVAILABLE);
        }
        self.editor = Some(outcome.draft);
        Ok(())
    }

    pub fn set_nickname(&mut self, nickname: &str) {
        if let Some(draft) = self.editor.as_mut() {
            draft.set_nickname(nickname);
        }
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        if let Some(draft) = self.editor.as_mut() {
            draft.set_status(status);
        }
    }

    pub fn add_pizza(&mut self, pizza_id: PizzaId) {
        if let Some(draft) = self.editor.take() {
            self.editor = Some(draft.add_selection(pizza_id, &self.catalog));
        }
    }

    pub fn remove_pizza(&mut self, description: &str) {
        if let Some(draft) = self.editor.take() {
            self.editor = Some(draft.remove_selection(description));
        }
    }

    /// Discards the open draft.
    pub fn cancel(&mut self) {
        self.editor = None;
    }

    /// Validates and submits the open draft. The editor closes only on success.
    #[instrument(skip(self))]
    pub async fn save(&mut self) -> Result<Order, ConsoleError> {
        let Some(draft) = self.editor.as_ref() else {
            return Err(ConsoleError::NoEditor);
        };
        let target = draft.target();
        let creating = target == DraftTarget::New;

        let payload = match draft.to_submission_with_policy(&self.catalog, self.policy.as_ref()) {
            Ok(payload) => payload,
            Err(e) => {
                self.failure(validation_message(&e, creating));
                return Err(e.into());
            }
        };

        let saved = match target {
            DraftTarget::New => self.backend.create_order(&payload).await,
            DraftTarget::Existing { id, .. } => self.backend.update_order(id, &payload).await,
        };
        match saved {
            Ok(order) => {
                self.absorb(order.clone());
                self.editor = None;
                self.success(if creating {
                    messages::ORDER_CREATED
                } else {
                    messages::ORDER_UPDATED
                });
                Ok(order)
            }
            Err(e) => {
                warn!(error = %e, "Save failed");
                self.failure(if creating {
                    messages::ORDER_CREATE_FAILED
                } else {
                    messages::ORDER_UPDATE_FAILED
                });
                Err(e.into())
            }
        }
    }

    // =========================================================================
    // Orders
    // =========================================================================

    #[instrument(skip(self))]
    pub async fn delete_order(&mut self, id: OrderId) -> Result<(), ConsoleError> {
        match self.backend.delete_order(id).await {
            Ok(()) => {
                self.orders.apply_deleted(id);
                self.success(messages::ORDER_DELETED);
                Ok(())
            }
            Err(e) => {
                self.failure(messages::ORDER_DELETE_FAILED);
                Err(e.into())
            }
        }
    }

    /// Changes only the status of an order, leaving its pizzas untouched.
    #[instrument(skip(self))]
    pub async fn update_order_status(&mut self, id: OrderId, status: OrderStatus) -> Result<Order, ConsoleError> {
        if let Some(current) = self.orders.get(id) {
            if let Err(e) = self.policy.check(current.status, status) {
                self.failure(messages::STATUS_CHANGE_NOT_ALLOWED);
                return Err(e.into());
            }
        }

        match self.backend.update_order_status(id, status).await {
            Ok(order) => {
                self.absorb(order.clone());
                self.success(messages::ORDER_STATUS_UPDATED);
                Ok(order)
            }
            Err(e) => {
                self.failure(messages::ORDER_STATUS_UPDATE_FAILED);
                Err(e.into())
            }
        }
    }

    /// Puts a saved order into the list. The service's answer wins over a stale list.
    fn absorb(&mut self, order: Order) {
        let result = if self.orders.get(order.id).is_some() {
            self.orders.apply_updated(order)
        } else {
            self.orders.apply_created(order)
        };
        if let Err(e) = result {
            warn!(error = %e, "Order list out of sync");
        }
    }

    // =========================================================================
    // Pizzas
    // =========================================================================

    #[instrument(skip(self))]
    pub async fn create_pizza(&mut self, description: &str) -> Result<PizzaItem, ConsoleError> {
        if description.trim().is_empty() {
            return Err(ConsoleError::EmptyDescription);
        }
        match self.backend.create_pizza(description).await {
            Ok(pizza) => {
                if let Err(e) = self.catalog.apply_created(pizza.clone()) {
                    warn!(error = %e, "Catalog out of sync");
                }
                self.success(messages::PIZZA_CREATED);
                Ok(pizza)
            }
            Err(e) => {
                self.failure(messages::PIZZA_CREATE_FAILED);
                Err(e.into())
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn update_pizza(&mut self, id: PizzaId, description: &str) -> Result<PizzaItem, ConsoleError> {
        if description.trim().is_empty() {
            return Err(ConsoleError::EmptyDescription);
        }
        match self.backend.update_pizza(id, description).await {
            Ok(pizza) => {
                let patched = match self.catalog.apply_updated(pizza.clone()) {
                    Err(CollectionError::NotFound(_)) => {
                        warn!(pizza_id = %id, "Renamed pizza was not in the snapshot");
                        self.catalog.apply_created(pizza.clone())
                    }
                    other => other,
                };
                if let Err(e) = patched {
                    warn!(error = %e, "Catalog out of sync");
                }
                self.success(messages::PIZZA_UPDATED);
                Ok(pizza)
            }
            Err(e) => {
                self.failure(messages::PIZZA_UPDATE_FAILED);
                Err(e.into())
            }
        }
    }

    /// Deletes a pizza. Drafts that selected it will fail to submit until it is removed.
    #[instrument(skip(self))]
    pub async fn delete_pizza(&mut self, id: PizzaId) -> Result<(), ConsoleError> {
        match self.backend.delete_pizza(id).await {
            Ok(()) => {
                self.catalog.apply_deleted(id);
                self.success(messages::PIZZA_DELETED);
                Ok(())
            }
            Err(e) => {
                self.failure(messages::PIZZA_DELETE_FAILED);
                Err(e.into())
            }
        }
    }
}

fn validation_message(error: &ValidationError, creating: bool) -> &'static str {
    match error {
        ValidationError::MissingField(_) if creating => messages::CREATE_FIELDS_MISSING,
        ValidationError::MissingField(_) => messages::UPDATE_FIELDS_MISSING,
        ValidationError::UnresolvedSelection(_) => messages::INVALID_PIZZA_NAMES,
        ValidationError::Transition { .. } => messages::STATUS_CHANGE_NOT_ALLOWED,
    }
}
