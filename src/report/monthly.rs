use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::period::{aggregate, PeriodBucket};
use crate::ledger::{Granularity, Ledger};

/// A monthly bucket extended with the three combined totals the report
/// layer displays. The totals exist only here, not on the generic bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    #[serde(flatten)]
    pub totals: PeriodBucket,
    pub revenue_total: Decimal,
    pub expense_total: Decimal,
    pub tax_total: Decimal,
}

/// Monthly aggregation plus per-month combined totals, computed after the
/// per-field sums.
pub fn monthly_report(ledger: &Ledger) -> Vec<MonthlyBucket> {
    aggregate(ledger, Granularity::Monthly)
        .into_iter()
        .map(|totals| {
            let revenue_total = totals.revenue_a + totals.revenue_b + totals.revenue_c;
            let expense_total = totals.operating_expenses + totals.other_expenses;
            let tax_total = totals.vat_net + totals.gross_receipts_tax + totals.withholdings;
            MonthlyBucket {
                totals,
                revenue_total,
                expense_total,
                tax_total,
            }
        })
        .collect()
}
