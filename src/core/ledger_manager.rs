//! Facade tying the store, clock, and services together into the surface
//! an embedding (HTTP handler, CLI command) calls.

use crate::domain::{Account, LedgerStore, MonthKey, MonthlyState, Transaction, TransactionDraft};
use crate::errors::LedgerError;

use super::services::{RecorderService, ReportService, RolloverService};
use super::time::{Clock, SystemClock};
use super::MonthlyReport;

/// Owns one ledger store and a clock, and runs the rollover pass at each
/// access so callers always see the current month materialized.
///
/// No internal locking: the embedding must serialize mutating calls with
/// each other and with the load/save cycle. Construct one explicitly at
/// startup and pass it where it is needed; there is no process-wide
/// singleton.
pub struct BudgetLedger {
    store: LedgerStore,
    clock: Box<dyn Clock>,
}

impl BudgetLedger {
    pub fn new(store: LedgerStore, clock: Box<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub fn with_system_clock(store: LedgerStore) -> Self {
        Self::new(store, Box::new(SystemClock))
    }

    /// Runs the rollover pass and returns the key of the current month.
    pub fn get_or_create_current_month(&mut self) -> MonthKey {
        RolloverService::ensure_current(&mut self.store, self.clock.now())
    }

    /// The current month's state, materialized if needed.
    pub fn current_month(&mut self) -> &MonthlyState {
        let key = self.get_or_create_current_month();
        let defaults = self.store.defaults.clone();
        self.store.get_or_create_month(key, &defaults)
    }

    /// Records a transaction into the active month on behalf of `owner`.
    pub fn record_transaction(&mut self, draft: TransactionDraft, owner: &str) -> Transaction {
        RecorderService::record(&mut self.store, draft, owner, self.clock.now())
    }

    /// Like [`BudgetLedger::record_transaction`], but requires `email` to
    /// belong to a known account.
    pub fn record_for_account(
        &mut self,
        draft: TransactionDraft,
        email: &str,
    ) -> Result<Transaction, LedgerError> {
        if self.store.account_by_email(email).is_none() {
            return Err(LedgerError::AccountNotFound(email.to_string()));
        }
        Ok(self.record_transaction(draft, email))
    }

    /// Report for the month containing `end`, which must already exist.
    pub fn report_as_of(
        &self,
        end: chrono::DateTime<chrono::Utc>,
    ) -> Result<MonthlyReport, LedgerError> {
        ReportService::generate(&self.store, end)
    }

    /// Report for the current month as of now, materializing it first.
    pub fn current_report(&mut self) -> Result<MonthlyReport, LedgerError> {
        let now = self.clock.now();
        RolloverService::ensure_current(&mut self.store, now);
        let defaults = self.store.defaults.clone();
        self.store
            .get_or_create_month(MonthKey::for_date(now), &defaults);
        ReportService::generate(&self.store, now)
    }

    pub fn variable_categories(&self) -> &[String] {
        &self.store.variable_categories
    }

    pub fn fixed_categories(&self) -> &[String] {
        &self.store.fixed_categories
    }

    pub fn add_account(&mut self, account: Account) {
        self.store.insert_account(account);
    }

    /// The underlying store, for the persistence boundary.
    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    pub fn into_store(self) -> LedgerStore {
        self.store
    }
}
