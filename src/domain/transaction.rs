use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded spend against one category, stamped at arrival time.
///
/// Amounts are integers in the store's minor currency unit; floating-point
/// money never enters the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub category: String,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
    pub owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Caller-supplied transaction input, before the ledger stamps
/// `created_at` and `owner` onto it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub category: String,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TransactionDraft {
    pub fn new(category: impl Into<String>, amount: i64) -> Self {
        Self {
            category: category.into(),
            amount,
            title: None,
            notes: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Finalizes the draft into a stored transaction.
    pub fn stamp(self, owner: impl Into<String>, created_at: DateTime<Utc>) -> Transaction {
        Transaction {
            category: self.category,
            amount: self.amount,
            created_at,
            owner: owner.into(),
            title: self.title,
            notes: self.notes,
        }
    }
}
