use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::Ledger;

/// Whole-ledger sums grouped the way the presentation layer charts them:
/// revenue by category, expenses by kind, taxes by component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub revenue: RevenueByCategory,
    pub expenses: ExpensesByKind,
    pub taxes: TaxesByKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueByCategory {
    pub category_a: Decimal,
    pub category_b: Decimal,
    pub category_c: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpensesByKind {
    pub operating: Decimal,
    pub other: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxesByKind {
    pub vat_net: Decimal,
    pub gross_receipts: Decimal,
    pub withholdings: Decimal,
}

pub fn category_breakdown(ledger: &Ledger) -> CategoryBreakdown {
    let mut breakdown = CategoryBreakdown::default();
    for entry in ledger.entries() {
        breakdown.revenue.category_a += entry.revenue_a;
        breakdown.revenue.category_b += entry.revenue_b;
        breakdown.revenue.category_c += entry.revenue_c;
        breakdown.expenses.operating += entry.operating_expenses;
        breakdown.expenses.other += entry.other_expenses;
        breakdown.taxes.vat_net += entry.vat_net;
        breakdown.taxes.gross_receipts += entry.gross_receipts_tax;
        breakdown.taxes.withholdings += entry.withholdings;
    }
    breakdown
}
