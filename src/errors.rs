use thiserror::Error;

use crate::domain::MonthKey;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed store snapshot: {0}")]
    MalformedStore(#[from] serde_json::Error),
    /// A report was requested for a month that was never materialized.
    /// Callers are expected to run the rollover pass first.
    #[error("No monthly state for {0}")]
    MonthNotFound(MonthKey),
    #[error("No account with email {0}")]
    AccountNotFound(String),
    #[error("Invalid month key: {0}")]
    InvalidMonthKey(#[from] crate::domain::ParseMonthKeyError),
}
