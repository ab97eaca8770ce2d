//! Pure data model for the monthly ledger: month keys, transactions,
//! defaults, per-month state, and the whole-store aggregate.

pub mod account;
pub mod defaults;
pub mod month_key;
pub mod monthly_state;
pub mod store;
pub mod transaction;

pub use account::Account;
pub use defaults::{FixedExpense, MonthlyDefaults};
pub use month_key::{MonthKey, ParseMonthKeyError};
pub use monthly_state::MonthlyState;
pub use store::LedgerStore;
pub use transaction::{Transaction, TransactionDraft};
