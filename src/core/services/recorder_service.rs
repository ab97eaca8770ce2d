//! Appends validated transactions to the currently active month.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{LedgerStore, Transaction, TransactionDraft};

use super::rollover_service::RolloverService;

/// Stamps incoming drafts and appends them to the month containing `now`.
pub struct RecorderService;

impl RecorderService {
    /// Records `draft` against the active month, stamping `created_at = now`
    /// and the owning account's email onto it. Returns a copy of the stored
    /// transaction.
    ///
    /// Transactions keep arrival order; the list is never resorted by
    /// timestamp. Category membership is not checked against the configured
    /// category lists.
    pub fn record(
        store: &mut LedgerStore,
        draft: TransactionDraft,
        owner: &str,
        now: DateTime<Utc>,
    ) -> Transaction {
        let key = RolloverService::ensure_current(store, now);
        let transaction = draft.stamp(owner, now);
        let defaults = store.defaults.clone();
        let state = store.get_or_create_month(key, &defaults);
        state.push_transaction(transaction.clone());
        debug!(
            month = %key,
            category = %transaction.category,
            amount = transaction.amount,
            "recorded transaction"
        );
        transaction
    }
}
