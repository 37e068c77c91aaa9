//! Update Order Use Case (full-replace edit flow)

use std::sync::Arc;

use crate::application::ports::OrderStorePort;
use crate::application::use_cases::commit::{
    CommitError, CommitReceipt, CommitStep, ValidatedOrder,
};
use crate::domain::composition::OrderDraft;
use crate::domain::shared::OrderId;

/// Replaces a persisted order with the edited draft: one header `PUT`,
/// one wipe of all existing detail records, then one detail `POST` per
/// line in draft order.
///
/// Details are never diffed against what is stored; the flow always
/// deletes everything and recreates from the draft, so unchanged lines are
/// rewritten with fresh store-assigned ids. Like the create flow it is
/// sequential and non-atomic: a failure after the header `PUT` leaves the
/// new header paired with either the old lines (wipe failed) or a prefix
/// of the new ones (a detail `POST` failed).
pub struct UpdateOrderUseCase<S: OrderStorePort> {
    store: Arc<S>,
}

impl<S: OrderStorePort> UpdateOrderUseCase<S> {
    /// Create a new use case over a store.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Run the edit flow for a draft against an existing order.
    pub async fn execute(
        &self,
        order_id: &OrderId,
        draft: &OrderDraft,
    ) -> Result<CommitReceipt, CommitError> {
        let order = ValidatedOrder::from_draft(draft)?;
        let mut completed = vec![CommitStep::Validate];
        let total = order.lines().len();

        if let Err(source) = self.store.update_order(order_id, &order.header()).await {
            tracing::error!(
                order_id = %order_id,
                step = %CommitStep::UpdateHeader,
                error = %source,
                "order update failed; stored order is unchanged"
            );
            return Err(CommitError::HeaderPersistence { source });
        }
        completed.push(CommitStep::UpdateHeader);

        if let Err(source) = self.store.delete_details(order_id).await {
            tracing::error!(
                order_id = %order_id,
                step = %CommitStep::DeleteOldDetails,
                error = %source,
                "order update failed; header updated but old lines remain"
            );
            return Err(CommitError::DetailWipe {
                order_id: order_id.clone(),
                source,
            });
        }
        completed.push(CommitStep::DeleteOldDetails);
        tracing::debug!(order_id = %order_id, lines = total, "old details cleared");

        for index in 0..total {
            let step = CommitStep::CreateDetail { index };
            let detail = order.detail(order_id, index);
            if let Err(source) = self.store.create_detail(&detail).await {
                tracing::error!(
                    order_id = %order_id,
                    step = %step,
                    created = index,
                    total,
                    error = %source,
                    "order update failed; order holds a prefix of its new lines"
                );
                return Err(CommitError::DetailPersistence {
                    order_id: order_id.clone(),
                    index,
                    created: index,
                    total,
                    source,
                });
            }
            completed.push(step);
        }

        tracing::info!(order_id = %order_id, lines = total, "order update committed");
        Ok(CommitReceipt::new(order_id.clone(), completed))
    }
}
