use super::{AnyTransition, DraftField, StatusPolicy, ValidationError};
use crate::catalog::CatalogSnapshot;
use crate::model::{Order, OrderId, OrderStatus, PizzaId, SubmissionPayload};
use tracing::debug;

/// What a draft will be saved as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftTarget {
    /// A new order.
    #[default]
    New,
    /// An edit of an existing order, remembering the status it had when opened.
    Existing { id: OrderId, status: OrderStatus },
}

/// A picked pizza. The description is kept for display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub id: PizzaId,
    pub description: String,
}

/// An order being composed or edited, not yet saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    target: DraftTarget,
    nickname: String,
    status: Option<OrderStatus>,
    selections: Vec<Selection>,
}

/// Result of [`seed_from_order`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedOutcome {
    pub draft: OrderDraft,
    /// Pizzas of the order that the snapshot no longer knows; they are not in the draft.
    pub unresolved: Vec<PizzaId>,
}

impl SeedOutcome {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Opens an existing order for editing.
pub fn seed_from_order(order: &Order, snapshot: &CatalogSnapshot) -> SeedOutcome {
    let mut draft = OrderDraft {
        target: DraftTarget::Existing {
            id: order.id,
            status: order.status,
        },
        nickname: order.nickname.clone(),
        status: Some(order.status),
        selections: Vec::with_capacity(order.pizzas.len()),
    };
    let mut unresolved = Vec::new();

    for id in order.pizza_ids() {
        if snapshot.contains(id) {
            draft = draft.add_selection(id, snapshot);
        } else if !unresolved.contains(&id) {
            unresolved.push(id);
        }
    }

    if !unresolved.is_empty() {
        debug!(order_id = %order.id, ?unresolved, "Seeded draft with missing pizzas");
    }
    SeedOutcome { draft, unresolved }
}

impl OrderDraft {
    /// An empty draft for a new order.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> DraftTarget {
        self.target
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn status(&self) -> Option<OrderStatus> {
        self.status
    }

    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    pub fn selected_descriptions(&self) -> Vec<&str> {
        self.selections.iter().map(|s| s.description.as_str()).collect()
    }

    pub fn is_selected(&self, id: PizzaId) -> bool {
        self.selections.iter().any(|s| s.id == id)
    }

    pub fn set_nickname(&mut self, nickname: impl Into<String>) {
        self.nickname = nickname.into();
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = Some(status);
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.set_nickname(nickname);
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.set_status(status);
        self
    }

    /// Appends the pizza if the snapshot knows it and it is not selected yet.
    pub fn add_selection(mut self, pizza_id: PizzaId, snapshot: &CatalogSnapshot) -> Self {
        if self.is_selected(pizza_id) {
            return self;
        }
        if let Some(pizza) = snapshot.get(pizza_id) {
            self.selections.push(Selection {
                id: pizza.id,
                description: pizza.description.clone(),
            });
        }
        self
    }

    /// Removes the first selection shown as `description`.
    pub fn remove_selection(mut self, description: &str) -> Self {
        if let Some(index) = self.selections.iter().position(|s| s.description == description) {
            self.selections.remove(index);
        }
        self
    }

    /// Builds the payload for create or update, accepting any status change.
    pub fn to_submission(&self, snapshot: &CatalogSnapshot) -> Result<SubmissionPayload, ValidationError> {
        self.to_submission_with_policy(snapshot, &AnyTransition)
    }

    /// Like [`to_submission`](Self::to_submission); edits of existing orders must also
    /// pass `policy` for the change from the status the order was opened with.
    pub fn to_submission_with_policy(
        &self,
        snapshot: &CatalogSnapshot,
        policy: &dyn StatusPolicy,
    ) -> Result<SubmissionPayload, ValidationError> {
        if self.nickname.is_empty() {
            return Err(ValidationError::MissingField(DraftField::Nickname));
        }
        let status = self
            .status
            .ok_or(ValidationError::MissingField(DraftField::Status))?;
        if self.selections.is_empty() {
            return Err(ValidationError::MissingField(DraftField::Pizzas));
        }

        let unresolved: Vec<String> = self
            .selections
            .iter()
            .filter(|s| !snapshot.contains(s.id))
            .map(|s| s.description.clone())
            .collect();
        if !unresolved.is_empty() {
            return Err(ValidationError::UnresolvedSelection(unresolved));
        }

        if let DraftTarget::Existing { status: from, .. } = self.target {
            policy.check(from, status)?;
        }

        let mut pizza_ids = Vec::with_capacity(self.selections.len());
        for selection in &self.selections {
            if !pizza_ids.contains(&selection.id) {
                pizza_ids.push(selection.id);
            }
        }

        Ok(SubmissionPayload {
            nickname: self.nickname.clone(),
            status,
            pizza_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PizzaItem;

    fn snapshot() -> CatalogSnapshot {
        CatalogSnapshot::from_fetch(vec![
            PizzaItem::new(1, "Margherita"),
            PizzaItem::new(2, "Diavola"),
            PizzaItem::new(3, "Capricciosa"),
        ])
        .unwrap()
    }

    fn ready(snapshot: &CatalogSnapshot) -> OrderDraft {
        OrderDraft::new()
            .with_nickname("Mario")
            .with_status(OrderStatus::Processing)
            .add_selection(PizzaId(1), snapshot)
    }

    #[test]
    fn test_margherita_diavola_scenario() {
        let catalog = CatalogSnapshot::from_fetch(vec![
            PizzaItem::new(1, "Margherita"),
            PizzaItem::new(2, "Diavola"),
        ])
        .unwrap();

        let draft = OrderDraft::new()
            .add_selection(PizzaId(1), &catalog)
            .add_selection(PizzaId(2), &catalog)
            .remove_selection("Margherita");
        assert_eq!(draft.selected_descriptions(), vec!["Diavola"]);

        let payload = draft
            .with_nickname("Mario")
            .with_status(OrderStatus::Processing)
            .to_submission(&catalog)
            .unwrap();
        assert_eq!(
            payload,
            SubmissionPayload {
                nickname: "Mario".into(),
                status: OrderStatus::Processing,
                pizza_ids: vec![PizzaId(2)],
            }
        );
    }

    #[test]
    fn test_add_then_remove_restores_selection() {
        let catalog = snapshot();
        let bases = [
            OrderDraft::new(),
            OrderDraft::new().add_selection(PizzaId(1), &catalog),
            OrderDraft::new()
                .add_selection(PizzaId(3), &catalog)
                .add_selection(PizzaId(1), &catalog),
        ];

        for base in bases {
            for pizza in catalog.iter() {
                if base.is_selected(pizza.id) {
                    continue;
                }
                let round_trip = base
                    .clone()
                    .add_selection(pizza.id, &catalog)
                    .remove_selection(&pizza.description);
                assert_eq!(round_trip.selected_descriptions(), base.selected_descriptions());
            }
        }
    }

    #[test]
    fn test_add_is_idempotent() {
        let catalog = snapshot();
        for pizza in catalog.iter() {
            let once = OrderDraft::new().add_selection(pizza.id, &catalog);
            let twice = once.clone().add_selection(pizza.id, &catalog);
            assert_eq!(once.selected_descriptions(), twice.selected_descriptions());
        }
    }

    #[test]
    fn test_unknown_pizza_is_not_added() {
        let draft = OrderDraft::new().add_selection(PizzaId(42), &snapshot());
        assert!(draft.selections().is_empty());
    }

    #[test]
    fn test_remove_of_absent_description_is_noop() {
        let catalog = snapshot();
        let draft = OrderDraft::new().add_selection(PizzaId(2), &catalog);
        assert_eq!(draft.clone().remove_selection("Quattro Stagioni"), draft);
    }

    #[test]
    fn test_missing_fields_are_checked_in_order() {
        let catalog = snapshot();
        assert_eq!(
            OrderDraft::new().to_submission(&catalog),
            Err(ValidationError::MissingField(DraftField::Nickname))
        );
        assert_eq!(
            OrderDraft::new().with_nickname("Mario").to_submission(&catalog),
            Err(ValidationError::MissingField(DraftField::Status))
        );
        assert_eq!(
            OrderDraft::new()
                .with_nickname("Mario")
                .with_status(OrderStatus::Pending)
                .to_submission(&catalog),
            Err(ValidationError::MissingField(DraftField::Pizzas))
        );
        assert!(ready(&catalog).to_submission(&catalog).is_ok());
    }

    #[test]
    fn test_whitespace_nickname_is_not_missing() {
        let catalog = snapshot();
        let payload = ready(&catalog).with_nickname(" ").to_submission(&catalog).unwrap();
        assert_eq!(payload.nickname, " ");
        assert_eq!(payload.pizza_ids, vec![PizzaId(1)]);
    }

    #[test]
    fn test_remove_takes_only_first_of_shared_description() {
        let catalog = CatalogSnapshot::from_fetch(vec![
            PizzaItem::new(1, "Margherita"),
            PizzaItem::new(2, "Margherita"),
        ])
        .unwrap();

        let draft = OrderDraft::new()
            .add_selection(PizzaId(1), &catalog)
            .add_selection(PizzaId(2), &catalog)
            .remove_selection("Margherita");

        let remaining: Vec<_> = draft.selections().iter().map(|s| s.id).collect();
        assert_eq!(remaining, vec![PizzaId(2)]);
        assert_eq!(draft.selected_descriptions(), vec!["Margherita"]);
    }

    #[test]
    fn test_pizza_deleted_after_selection_blocks_submission() {
        let mut catalog = snapshot();
        let draft = ready(&catalog).add_selection(PizzaId(2), &catalog);
        catalog.apply_deleted(PizzaId(2));

        assert_eq!(
            draft.to_submission(&catalog),
            Err(ValidationError::UnresolvedSelection(vec!["Diavola".into()]))
        );
    }

    #[test]
    fn test_renamed_pizza_still_resolves() {
        let mut catalog = snapshot();
        let draft = ready(&catalog);
        catalog.apply_updated(PizzaItem::new(1, "Margherita DOP")).unwrap();

        let payload = draft.to_submission(&catalog).unwrap();
        assert_eq!(payload.pizza_ids, vec![PizzaId(1)]);
    }

    #[test]
    fn test_seed_then_submit_reproduces_order() {
        let catalog = snapshot();
        let order = Order::new(
            7,
            "Lucia",
            OrderStatus::Pending,
            vec![PizzaItem::new(3, "Capricciosa"), PizzaItem::new(1, "Margherita")],
        );

        let outcome = seed_from_order(&order, &catalog);
        assert!(outcome.is_complete());
        assert_eq!(
            outcome.draft.target(),
            DraftTarget::Existing {
                id: OrderId(7),
                status: OrderStatus::Pending,
            }
        );

        let payload = outcome.draft.to_submission(&catalog).unwrap();
        assert_eq!(payload.pizza_ids, order.pizza_ids().collect::<Vec<_>>());
        assert_eq!(payload.nickname, "Lucia");
        assert_eq!(payload.status, OrderStatus::Pending);
    }

    #[test]
    fn test_seed_reports_pizzas_missing_from_snapshot() {
        let catalog = snapshot();
        let order = Order::new(
            8,
            "Paolo",
            OrderStatus::Processing,
            vec![PizzaItem::new(2, "Diavola"), PizzaItem::new(9, "Bufalina")],
        );

        let outcome = seed_from_order(&order, &catalog);
        assert_eq!(outcome.unresolved, vec![PizzaId(9)]);
        assert_eq!(outcome.draft.selected_descriptions(), vec!["Diavola"]);
    }

    #[test]
    fn test_policy_applies_only_to_edits() {
        struct Frozen;
        impl StatusPolicy for Frozen {
            fn check(&self, from: OrderStatus, to: OrderStatus) -> Result<(), ValidationError> {
                if from == to {
                    Ok(())
                } else {
                    Err(ValidationError::Transition { from, to })
                }
            }
        }

        let catalog = snapshot();
        assert!(ready(&catalog).to_submission_with_policy(&catalog, &Frozen).is_ok());

        let order = Order::new(1, "Mario", OrderStatus::Processing, vec![PizzaItem::new(1, "Margherita")]);
        let edited = seed_from_order(&order, &catalog).draft.with_status(OrderStatus::Fulfilled);
        assert_eq!(
            edited.to_submission_with_policy(&catalog, &Frozen),
            Err(ValidationError::Transition {
                from: OrderStatus::Processing,
                to: OrderStatus::Fulfilled,
            })
        );
        assert!(edited.to_submission(&catalog).is_ok());
    }
}
