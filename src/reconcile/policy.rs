use super::ValidationError;
use crate::model::OrderStatus;

/// Decides whether an existing order may move from one status to another.
pub trait StatusPolicy {
    fn check(&self, from: OrderStatus, to: OrderStatus) -> Result<(), ValidationError>;
}

/// Accepts every transition, including moving backwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyTransition;

impl StatusPolicy for AnyTransition {
    fn check(&self, _from: OrderStatus, _to: OrderStatus) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_transition_accepts_everything() {
        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                assert!(AnyTransition.check(from, to).is_ok());
            }
        }
    }

    struct ForwardOnly;

    impl StatusPolicy for ForwardOnly {
        fn check(&self, from: OrderStatus, to: OrderStatus) -> Result<(), ValidationError> {
            if to.code() >= from.code() {
                Ok(())
            } else {
                Err(ValidationError::Transition { from, to })
            }
        }
    }

    #[test]
    fn test_custom_policy_rejects_backwards_moves() {
        let forward_only = ForwardOnly;
        assert!(forward_only.check(OrderStatus::Processing, OrderStatus::Fulfilled).is_ok());
        assert_eq!(
            forward_only.check(OrderStatus::Fulfilled, OrderStatus::Pending),
            Err(ValidationError::Transition {
                from: OrderStatus::Fulfilled,
                to: OrderStatus::Pending,
            })
        );
    }
}
