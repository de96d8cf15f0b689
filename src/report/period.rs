use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{FinancialEntry, Granularity, Ledger};

/// Field-by-field sums of every entry whose period falls inside one
/// calendar bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodBucket {
    /// Last calendar day of the bucket.
    pub period_end: NaiveDate,
    pub revenue_a: Decimal,
    pub revenue_b: Decimal,
    pub revenue_c: Decimal,
    pub operating_expenses: Decimal,
    pub other_expenses: Decimal,
    pub withholdings: Decimal,
    pub vat_output: Decimal,
    pub vat_input: Decimal,
    pub vat_net: Decimal,
    pub gross_receipts_tax: Decimal,
    pub profit: Decimal,
}

impl PeriodBucket {
    fn empty(period_end: NaiveDate) -> Self {
        Self {
            period_end,
            revenue_a: Decimal::ZERO,
            revenue_b: Decimal::ZERO,
            revenue_c: Decimal::ZERO,
            operating_expenses: Decimal::ZERO,
            other_expenses: Decimal::ZERO,
            withholdings: Decimal::ZERO,
            vat_output: Decimal::ZERO,
            vat_input: Decimal::ZERO,
            vat_net: Decimal::ZERO,
            gross_receipts_tax: Decimal::ZERO,
            profit: Decimal::ZERO,
        }
    }

    // Derived fields are carried over by summation, never recomputed from
    // the summed inputs; tiered rates would silently diverge otherwise.
    fn absorb(&mut self, entry: &FinancialEntry) {
        self.revenue_a += entry.revenue_a;
        self.revenue_b += entry.revenue_b;
        self.revenue_c += entry.revenue_c;
        self.operating_expenses += entry.operating_expenses;
        self.other_expenses += entry.other_expenses;
        self.withholdings += entry.withholdings;
        self.vat_output += entry.vat_output;
        self.vat_input += entry.vat_input;
        self.vat_net += entry.vat_net;
        self.gross_receipts_tax += entry.gross_receipts_tax;
        self.profit += entry.profit;
    }
}

/// Re-buckets the ledger into calendar periods at the given granularity,
/// ascending by bucket end date. Output is sparse: periods with no
/// contributing entries produce no bucket, and an empty ledger yields an
/// empty vector.
pub fn aggregate(ledger: &Ledger, granularity: Granularity) -> Vec<PeriodBucket> {
    let mut buckets: BTreeMap<NaiveDate, PeriodBucket> = BTreeMap::new();
    for entry in ledger.entries() {
        let end = granularity.bucket_end(entry.period);
        buckets
            .entry(end)
            .or_insert_with(|| PeriodBucket::empty(end))
            .absorb(entry);
    }
    tracing::debug!(
        granularity = granularity.label(),
        buckets = buckets.len(),
        "ledger aggregated"
    );
    buckets.into_values().collect()
}
