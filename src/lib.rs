#![doc(test(attr(deny(warnings))))]

//! Budget Ledger tracks a household's monthly income, fixed expenses, and
//! ad-hoc transactions, and produces month-over-month spending reports.
//!
//! State is keyed by calendar month and rolled over lazily: the first access
//! in a new month materializes that month's state from the configured
//! defaults. Reports compare each category's spend against the same elapsed
//! days of the previous month.

pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

pub use crate::core::{BudgetLedger, Clock, FixedClock, MonthlyReport, SystemClock};
pub use crate::domain::{
    Account, FixedExpense, LedgerStore, MonthKey, MonthlyDefaults, MonthlyState, Transaction,
    TransactionDraft,
};
pub use crate::errors::LedgerError;
pub use crate::storage::{JsonStorage, StorageBackend};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Ledger tracing initialized.");
    });
}
