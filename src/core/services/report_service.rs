//! Read-side report computation: per-category spend for the month
//! containing an as-of instant, compared against the same elapsed days of
//! the previous month.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{LedgerStore, MonthKey, Transaction};
use crate::errors::LedgerError;

/// Headline figures for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTotals {
    pub income: i64,
    pub spent: i64,
    pub remaining: i64,
    /// Configured fixed-expense total: income committed before any
    /// variable spending, independent of what was actually spent.
    pub unallocated: i64,
}

/// One spending category's slice of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub category: String,
    pub total: i64,
    /// Signed percentage change against the same elapsed days of the
    /// previous month. Positive means more was spent this month. Zero when
    /// no baseline exists (no previous month, or nothing comparable in it).
    pub vs_previous_month: f64,
    pub transactions: Vec<Transaction>,
}

/// Totals plus per-category breakdown, categories in first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub month: MonthKey,
    pub totals: ReportTotals,
    pub categories: Vec<CategoryReport>,
}

impl MonthlyReport {
    pub fn category(&self, name: &str) -> Option<&CategoryReport> {
        self.categories.iter().find(|c| c.category == name)
    }
}

/// Computes monthly reports from a store snapshot. Pure read side; never
/// mutates the store.
pub struct ReportService;

impl ReportService {
    /// Builds the report for the month containing `end_time`.
    ///
    /// The month must already exist (run the rollover pass first);
    /// otherwise this surfaces [`LedgerError::MonthNotFound`]. A missing
    /// *previous* month is not an error: every comparison simply reads 0.
    pub fn generate(
        store: &LedgerStore,
        end_time: DateTime<Utc>,
    ) -> Result<MonthlyReport, LedgerError> {
        let key = MonthKey::for_date(end_time);
        let state = store
            .get_month(key)
            .ok_or(LedgerError::MonthNotFound(key))?;

        // Future-dated entries are excluded from the report window.
        let filtered: Vec<&Transaction> = state
            .transactions
            .iter()
            .filter(|t| t.created_at <= end_time)
            .collect();

        let mut categories: Vec<CategoryReport> = Vec::new();
        for txn in &filtered {
            match categories.iter_mut().find(|c| c.category == txn.category) {
                Some(group) => {
                    group.total += txn.amount;
                    group.transactions.push((*txn).clone());
                }
                None => categories.push(CategoryReport {
                    category: txn.category.clone(),
                    total: txn.amount,
                    vs_previous_month: 0.0,
                    transactions: vec![(*txn).clone()],
                }),
            }
        }

        let spent: i64 = filtered.iter().map(|t| t.amount).sum();
        let totals = ReportTotals {
            income: state.monthly_income,
            spent,
            remaining: state.monthly_income - spent,
            unallocated: state.fixed_total(),
        };

        if let Some(previous) = store.get_month(key.previous()) {
            // Compare against the same number of elapsed days last month.
            let day_cutoff = end_time.day();
            for group in &mut categories {
                let previous_sum: i64 = previous
                    .transactions
                    .iter()
                    .filter(|t| t.category == group.category && t.created_at.day() <= day_cutoff)
                    .map(|t| t.amount)
                    .sum();
                if previous_sum > 0 {
                    group.vs_previous_month =
                        (group.total as f64 / previous_sum as f64) * 100.0 - 100.0;
                }
            }
        }

        Ok(MonthlyReport {
            month: key,
            totals,
            categories,
        })
    }
}
