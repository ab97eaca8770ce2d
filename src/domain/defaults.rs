use serde::{Deserialize, Serialize};

/// A recurring, pre-committed budget line copied into each month at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedExpense {
    pub category: String,
    pub amount: i64,
}

impl FixedExpense {
    pub fn new(category: impl Into<String>, amount: i64) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}

/// Template applied to every newly created month: the income figure and the
/// fixed-expense lines it starts from. Read-only at runtime; each month gets
/// its own copy so no two months alias the same expense list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyDefaults {
    pub monthly_income: i64,
    #[serde(default)]
    pub fixed_expenses: Vec<FixedExpense>,
}

impl MonthlyDefaults {
    pub fn new(monthly_income: i64, fixed_expenses: Vec<FixedExpense>) -> Self {
        Self {
            monthly_income,
            fixed_expenses,
        }
    }

    /// Total of all fixed-expense lines: the share of income that is
    /// committed before any variable spending happens.
    pub fn fixed_total(&self) -> i64 {
        self.fixed_expenses.iter().map(|fe| fe.amount).sum()
    }
}
