//! Business logic: rollover, recording, reporting, and the facade that
//! owns a store plus a clock.

pub mod ledger_manager;
pub mod services;
pub mod time;

pub use ledger_manager::BudgetLedger;
pub use services::{
    CategoryReport, MonthlyReport, RecorderService, ReportService, ReportTotals, RolloverService,
};
pub use time::{Clock, FixedClock, SystemClock};
