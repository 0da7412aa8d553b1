pub mod reporting;
pub mod server;

pub use reporting::{ReportService, StatsReport};
