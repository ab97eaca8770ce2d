use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::Account;
use super::defaults::{FixedExpense, MonthlyDefaults};
use super::month_key::MonthKey;
use super::monthly_state::MonthlyState;

/// The whole-household ledger: every month ever materialized, the defaults
/// new months are stamped from, the category lists, and the accounts allowed
/// to record against it. This is the unit of persistence; storage backends
/// load and save it as one object.
///
/// The month map is append-only at month granularity. Nothing in the core
/// deletes or overwrites a month once it exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerStore {
    #[serde(default)]
    pub accounts: BTreeMap<String, Account>,
    pub last_accessed: DateTime<Utc>,
    pub defaults: MonthlyDefaults,
    #[serde(default)]
    pub variable_categories: Vec<String>,
    #[serde(default)]
    pub fixed_categories: Vec<String>,
    #[serde(default)]
    pub months: BTreeMap<MonthKey, MonthlyState>,
}

impl LedgerStore {
    pub fn new(defaults: MonthlyDefaults, last_accessed: DateTime<Utc>) -> Self {
        Self {
            accounts: BTreeMap::new(),
            last_accessed,
            defaults,
            variable_categories: Vec::new(),
            fixed_categories: Vec::new(),
            months: BTreeMap::new(),
        }
    }

    /// First-run snapshot with the stock household configuration.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let defaults = MonthlyDefaults::new(
            570_000,
            vec![
                FixedExpense::new("Mortgage", 200_000),
                FixedExpense::new("Insurance", 20_000),
                FixedExpense::new("Giving", 30_000),
            ],
        );
        let mut store = Self::new(defaults, now);
        store.variable_categories = [
            "Grocery",
            "Gas",
            "Utilities",
            "Michael/Misc",
            "Anna/Misc",
        ]
        .map(String::from)
        .to_vec();
        store.fixed_categories = ["Mortgage", "Insurance", "Giving"].map(String::from).to_vec();
        store
    }

    /// Returns the state for `key`, materializing it from an independent
    /// copy of `defaults` when absent. Idempotent: calling again with the
    /// same key returns the existing state untouched.
    pub fn get_or_create_month(
        &mut self,
        key: MonthKey,
        defaults: &MonthlyDefaults,
    ) -> &mut MonthlyState {
        self.months
            .entry(key)
            .or_insert_with(|| MonthlyState::from_defaults(defaults))
    }

    /// Read-only lookup; never creates.
    pub fn get_month(&self, key: MonthKey) -> Option<&MonthlyState> {
        self.months.get(&key)
    }

    pub fn get_month_mut(&mut self, key: MonthKey) -> Option<&mut MonthlyState> {
        self.months.get_mut(&key)
    }

    pub fn account_by_email(&self, email: &str) -> Option<&Account> {
        self.accounts.get(email)
    }

    /// Inserts (or replaces) an account, keyed by email.
    pub fn insert_account(&mut self, account: Account) {
        self.accounts.insert(account.email.clone(), account);
    }
}
