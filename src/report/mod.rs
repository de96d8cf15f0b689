//! Report-layer rollups derived from the ledger.

pub mod categories;
pub mod monthly;
pub mod period;
pub mod statistics;

pub use categories::{
    category_breakdown, CategoryBreakdown, ExpensesByKind, RevenueByCategory, TaxesByKind,
};
pub use monthly::{monthly_report, MonthlyBucket};
pub use period::{aggregate, PeriodBucket};
pub use statistics::{statistics, Summary};
