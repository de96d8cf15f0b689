use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::Ledger;

/// Whole-ledger totals and per-entry means.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_revenue: Decimal,
    pub total_expenses: Decimal,
    pub total_taxes: Decimal,
    pub total_profit: Decimal,
    pub average_revenue_per_entry: Decimal,
    pub average_expenses_per_entry: Decimal,
}

/// Computes ledger-wide statistics. An empty ledger yields a zeroed
/// summary rather than an error; the caller decides whether there is
/// anything to show.
pub fn statistics(ledger: &Ledger) -> Summary {
    if ledger.is_empty() {
        return Summary::default();
    }
    let mut summary = Summary::default();
    for entry in ledger.entries() {
        summary.total_revenue += entry.revenue_a + entry.revenue_b + entry.revenue_c;
        summary.total_expenses += entry.operating_expenses + entry.other_expenses;
        summary.total_taxes += entry.vat_net + entry.gross_receipts_tax + entry.withholdings;
        summary.total_profit += entry.profit;
    }
    let count = Decimal::from(ledger.len() as u64);
    summary.average_revenue_per_entry = summary.total_revenue / count;
    summary.average_expenses_per_entry = summary.total_expenses / count;
    summary
}
