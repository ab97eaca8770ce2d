use serde::{Deserialize, Serialize};

use super::defaults::{FixedExpense, MonthlyDefaults};
use super::transaction::Transaction;

/// Financial state for a single calendar month.
///
/// Income and fixed expenses are frozen at creation time from the defaults
/// in force at that moment; editing the defaults later never reaches back
/// into an existing month. Transactions are append-only and kept in arrival
/// order, not sorted by timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyState {
    pub monthly_income: i64,
    #[serde(default)]
    pub fixed_expenses: Vec<FixedExpense>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl MonthlyState {
    /// Materializes a fresh month from the configured defaults with an
    /// empty transaction list. The expense list is an independent copy.
    pub fn from_defaults(defaults: &MonthlyDefaults) -> Self {
        Self {
            monthly_income: defaults.monthly_income,
            fixed_expenses: defaults.fixed_expenses.clone(),
            transactions: Vec::new(),
        }
    }

    pub fn push_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    /// Configured fixed-expense total for this month.
    pub fn fixed_total(&self) -> i64 {
        self.fixed_expenses.iter().map(|fe| fe.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> MonthlyDefaults {
        MonthlyDefaults::new(
            570_000,
            vec![
                FixedExpense::new("Mortgage", 200_000),
                FixedExpense::new("Insurance", 20_000),
            ],
        )
    }

    #[test]
    fn from_defaults_starts_empty() {
        let state = MonthlyState::from_defaults(&defaults());
        assert_eq!(state.monthly_income, 570_000);
        assert_eq!(state.fixed_expenses.len(), 2);
        assert!(state.transactions.is_empty());
    }

    #[test]
    fn from_defaults_copies_rather_than_aliases() {
        let template = defaults();
        let mut first = MonthlyState::from_defaults(&template);
        let second = MonthlyState::from_defaults(&template);

        first.fixed_expenses[0].amount = 1;
        assert_eq!(second.fixed_expenses[0].amount, 200_000);
        assert_eq!(template.fixed_expenses[0].amount, 200_000);
    }
}
