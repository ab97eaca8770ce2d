use budget_ledger::{FixedClock, LedgerStore, MonthKey, TransactionDraft};
use chrono::{DateTime, TimeZone, Utc};

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub fn clock_at(year: i32, month: u32, day: u32) -> FixedClock {
    FixedClock(at(year, month, day))
}

/// Seeded store with a set of pre-recorded transactions, bypassing the
/// rollover pass so tests control exactly which months exist.
pub fn populated_store(entries: &[(&str, i64, DateTime<Utc>)]) -> LedgerStore {
    let mut store = LedgerStore::seeded(at(2022, 1, 1));
    let defaults = store.defaults.clone();
    for (category, amount, ts) in entries {
        let key = MonthKey::for_date(*ts);
        store
            .get_or_create_month(key, &defaults)
            .push_transaction(TransactionDraft::new(*category, *amount).stamp("test", *ts));
    }
    store
}
