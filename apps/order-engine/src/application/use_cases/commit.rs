//! Step pipeline types shared by the persistence coordinator flows.
//!
//! Submitting an order is a sequence of independent network operations with
//! no cross-resource transaction. Each step is named so that partial
//! completion is a first-class, inspectable outcome rather than a side
//! effect of a loop: a success reports the steps that ran, a failure names
//! the exact step that stopped the flow.

use chrono::NaiveDate;
use thiserror::Error;

use crate::application::ports::{NewOrderDetail, NewOrderHeader, StoreError};
use crate::domain::composition::{LineItem, OrderDraft, OrderTotals};
use crate::domain::shared::{ClientId, OrderId};

/// One step of a persistence flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitStep {
    /// Client-side validation of the draft. No network call.
    Validate,
    /// `POST` of the order header (create flow).
    CreateHeader,
    /// `PUT` of the order header (update flow).
    UpdateHeader,
    /// Wipe of all existing detail records (update flow).
    DeleteOldDetails,
    /// `POST` of the detail record at `index`, in draft order.
    CreateDetail {
        /// Zero-based position of the line in the draft.
        index: usize,
    },
}

impl std::fmt::Display for CommitStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validate => write!(f, "validate"),
            Self::CreateHeader => write!(f, "create-header"),
            Self::UpdateHeader => write!(f, "update-header"),
            Self::DeleteOldDetails => write!(f, "delete-old-details"),
            Self::CreateDetail { index } => write!(f, "create-detail[{index}]"),
        }
    }
}

/// Record of a successfully committed flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReceipt {
    order_id: OrderId,
    completed: Vec<CommitStep>,
}

impl CommitReceipt {
    pub(crate) fn new(order_id: OrderId, completed: Vec<CommitStep>) -> Self {
        Self {
            order_id,
            completed,
        }
    }

    /// The order the flow committed.
    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Every step that ran, in execution order.
    #[must_use]
    pub fn completed(&self) -> &[CommitStep] {
        &self.completed
    }
}

/// Draft problems caught before any network call.
///
/// The draft is left untouched and can be corrected and resubmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No customer selected (or a blank customer id).
    #[error("select a customer for the order")]
    MissingClient,
    /// The draft has no lines.
    #[error("add at least one product to the order")]
    EmptyOrder,
    /// No order date set.
    #[error("set a date for the order")]
    MissingDate,
}

/// Terminal outcome of a failed flow invocation.
///
/// Persistence failures stop the flow immediately; nothing already written
/// is rolled back and nothing is retried. The variants spell out exactly
/// what the store holds afterwards.
#[derive(Debug, Error)]
pub enum CommitError {
    /// The draft failed validation. No network call was made.
    #[error("order not submitted: {0}")]
    Validation(#[from] ValidationError),

    /// The header write failed. Create flow: nothing was persisted.
    /// Update flow: the stored order is completely unchanged.
    #[error("order header could not be persisted: {source}")]
    HeaderPersistence {
        /// The store failure.
        source: StoreError,
    },

    /// The wipe of existing details failed (update flow only). The header
    /// was already updated; the old detail records are still present.
    #[error("existing lines of order {order_id} could not be cleared: {source}")]
    DetailWipe {
        /// The order being updated.
        order_id: OrderId,
        /// The store failure.
        source: StoreError,
    },

    /// A detail write failed. The header (and, on update, the detail wipe)
    /// already succeeded; exactly `created` detail records exist, a strict
    /// prefix of the draft's lines.
    #[error(
        "line {index} of order {order_id} could not be persisted \
         ({created} of {total} lines written): {source}"
    )]
    DetailPersistence {
        /// The order whose details were being written.
        order_id: OrderId,
        /// Zero-based index of the failing line.
        index: usize,
        /// Number of detail records that were created before the failure.
        created: usize,
        /// Total number of lines in the draft.
        total: usize,
        /// The store failure.
        source: StoreError,
    },
}

/// A draft that passed the `Validate` step, with its totals fixed.
#[derive(Debug)]
pub(crate) struct ValidatedOrder<'a> {
    client_id: &'a ClientId,
    date: NaiveDate,
    lines: &'a [LineItem],
    totals: OrderTotals,
}

impl<'a> ValidatedOrder<'a> {
    /// Run the `Validate` step over a draft.
    pub(crate) fn from_draft(draft: &'a OrderDraft) -> Result<Self, ValidationError> {
        let client_id = draft
            .client_id()
            .filter(|id| !id.is_blank())
            .ok_or(ValidationError::MissingClient)?;
        if draft.is_empty() {
            return Err(ValidationError::EmptyOrder);
        }
        let date = draft.date().ok_or(ValidationError::MissingDate)?;

        Ok(Self {
            client_id,
            date,
            lines: draft.lines(),
            totals: draft.totals(),
        })
    }

    pub(crate) fn header(&self) -> NewOrderHeader {
        NewOrderHeader {
            client_id: self.client_id.clone(),
            date: self.date,
            subtotal: self.totals.subtotal(),
            total: self.totals.total(),
        }
    }

    pub(crate) fn lines(&self) -> &[LineItem] {
        self.lines
    }

    pub(crate) fn detail(&self, order_id: &OrderId, index: usize) -> NewOrderDetail {
        let line = &self.lines[index];
        NewOrderDetail {
            order_id: order_id.clone(),
            product_id: line.product_id().clone(),
            quantity: line.quantity(),
            unit_price: line.unit_price(),
            line_total: line.line_total(),
        }
    }
}
