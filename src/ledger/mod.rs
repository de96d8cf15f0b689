//! Ledger domain models: enriched entries, the session ledger, and
//! calendar granularities.

pub mod entry;
pub mod granularity;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use entry::{parse_period, FinancialEntry, GROSS_RECEIPTS_RATE, VAT_RATE};
pub use granularity::Granularity;
pub use ledger::Ledger;
