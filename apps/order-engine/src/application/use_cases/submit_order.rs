//! Submit Order Use Case (create flow)

use std::sync::Arc;

use crate::application::ports::OrderStorePort;
use crate::application::use_cases::commit::{
    CommitError, CommitReceipt, CommitStep, ValidatedOrder,
};
use crate::domain::composition::OrderDraft;

/// Persists a draft as a new order: one header `POST`, then one detail
/// `POST` per line, strictly in draft order.
///
/// The flow is sequential, non-atomic and non-idempotent. A failed step
/// stops it immediately; nothing already written is rolled back and nothing
/// is retried, so a detail failure leaves the header persisted with a
/// prefix of its lines. Resubmitting after a lost create response re-runs
/// the whole flow and can therefore create a duplicate header — the wire
/// carries no idempotency key.
pub struct SubmitOrderUseCase<S: OrderStorePort> {
    store: Arc<S>,
}

impl<S: OrderStorePort> SubmitOrderUseCase<S> {
    /// Create a new use case over a store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Run the create flow for a draft.
    ///
    /// The draft is only borrowed; on failure it is intact and can be
    /// corrected or resubmitted by the caller.
    pub async fn execute(&self, draft: &OrderDraft) -> Result<CommitReceipt, CommitError> {
        let order = ValidatedOrder::from_draft(draft)?;
        let mut completed = vec![CommitStep::Validate];
        let total = order.lines().len();

        let order_id = match self.store.create_order(&order.header()).await {
            Ok(id) => id,
            Err(source) => {
                tracing::error!(
                    step = %CommitStep::CreateHeader,
                    error = %source,
                    "order submission failed; nothing was persisted"
                );
                return Err(CommitError::HeaderPersistence { source });
            }
        };
        completed.push(CommitStep::CreateHeader);
        tracing::debug!(order_id = %order_id, lines = total, "order header created");

        for index in 0..total {
            let step = CommitStep::CreateDetail { index };
            let detail = order.detail(&order_id, index);
            if let Err(source) = self.store.create_detail(&detail).await {
                tracing::error!(
                    order_id = %order_id,
                    step = %step,
                    created = index,
                    total,
                    error = %source,
                    "order submission failed; header persisted with a prefix of its lines"
                );
                return Err(CommitError::DetailPersistence {
                    order_id,
                    index,
                    created: index,
                    total,
                    source,
                });
            }
            completed.push(step);
        }

        tracing::info!(order_id = %order_id, lines = total, "order committed");
        Ok(CommitReceipt::new(order_id, completed))
    }
}
