//! Portfolio report: per-position P&L rows plus aggregate totals.

pub mod builder;
pub mod format;
pub mod types;

pub use builder::build_report;
pub use format::render_table;
pub use types::{PortfolioReport, PortfolioTotals, PositionRow, PositionStatus, ReportConfig};
