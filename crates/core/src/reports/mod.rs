//! Report building - the table, export and summary views of a run.

pub(crate) mod format;
mod report_model;
mod report_service;

pub use report_model::{PortfolioReport, PortfolioSummary, ReportRow};
pub use report_service::{build_report, table_rows, to_csv};
