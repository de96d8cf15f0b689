use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

/// VAT rate applied to category A and B revenue and to operating expenses.
pub const VAT_RATE: Decimal = dec!(0.21);

/// Flat gross-receipts rate applied to revenue across all three categories.
pub const GROSS_RECEIPTS_RATE: Decimal = dec!(0.035);

/// One reporting month's raw figures plus the derived tax and profit fields.
///
/// The derived fields are computed once at construction and never mutated;
/// corrections are new entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialEntry {
    /// First day of the reporting month.
    pub period: NaiveDate,
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

impl FinancialEntry {
    /// Validates the raw monetary inputs and derives the tax and profit
    /// fields. Category C revenue is VAT-exempt; `vat_net` may go negative
    /// when input credits exceed output VAT.
    pub fn enrich(
        period: NaiveDate,
        revenue_a: Decimal,
        revenue_b: Decimal,
        revenue_c: Decimal,
        operating_expenses: Decimal,
        other_expenses: Decimal,
        withholdings: Decimal,
    ) -> Result<Self> {
        non_negative("revenue_a", revenue_a)?;
        non_negative("revenue_b", revenue_b)?;
        non_negative("revenue_c", revenue_c)?;
        non_negative("operating_expenses", operating_expenses)?;
        non_negative("other_expenses", other_expenses)?;
        non_negative("withholdings", withholdings)?;

        let vat_output = (revenue_a + revenue_b) * VAT_RATE;
        let vat_input = operating_expenses * VAT_RATE;
        let vat_net = vat_output - vat_input;
        let revenue = revenue_a + revenue_b + revenue_c;
        let gross_receipts_tax = revenue * GROSS_RECEIPTS_RATE;
        let profit = revenue
            - operating_expenses
            - other_expenses
            - vat_net
            - gross_receipts_tax
            - withholdings;

        Ok(Self {
            period,
            revenue_a,
            revenue_b,
            revenue_c,
            operating_expenses,
            other_expenses,
            withholdings,
            vat_output,
            vat_input,
            vat_net,
            gross_receipts_tax,
            profit,
        })
    }
}

fn non_negative(field: &'static str, value: Decimal) -> Result<()> {
    if value < Decimal::ZERO {
        return Err(LedgerError::InvalidInput(format!(
            "{} must be non-negative, got {}",
            field, value
        )));
    }
    Ok(())
}

/// Parses a reporting period from `YYYY-MM-DD` or `YYYY-MM`, normalized to
/// the first day of the month.
pub fn parse_period(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    let parsed = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d").ok());
    match parsed {
        Some(date) => Ok(NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()),
        None => Err(LedgerError::InvalidInput(format!(
            "unparseable period `{}`",
            trimmed
        ))),
    }
}
