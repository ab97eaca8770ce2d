pub mod recorder_service;
pub mod report_service;
pub mod rollover_service;

pub use recorder_service::RecorderService;
pub use report_service::{CategoryReport, MonthlyReport, ReportService, ReportTotals};
pub use rollover_service::RolloverService;
