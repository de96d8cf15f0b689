use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Calendar period size used when re-bucketing the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    Monthly,
    Bimonthly,
    Quarterly,
    Annual,
}

impl Granularity {
    pub const ALL: [Granularity; 4] = [
        Granularity::Monthly,
        Granularity::Bimonthly,
        Granularity::Quarterly,
        Granularity::Annual,
    ];

    pub fn months_spanned(&self) -> u32 {
        match self {
            Granularity::Monthly => 1,
            Granularity::Bimonthly => 2,
            Granularity::Quarterly => 3,
            Granularity::Annual => 12,
        }
    }

    /// Last calendar day of the bucket containing `period`. Buckets are
    /// calendar-aligned month blocks anchored at January, so bimonthly
    /// pairs run Jan–Feb, Mar–Apr, and so on.
    pub fn bucket_end(&self, period: NaiveDate) -> NaiveDate {
        let span = self.months_spanned();
        let block_start = ((period.month() - 1) / span) * span;
        let last_month = block_start + span;
        month_end(period.year(), last_month)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Granularity::Monthly => "Monthly",
            Granularity::Bimonthly => "Bimonthly",
            Granularity::Quarterly => "Quarterly",
            Granularity::Annual => "Annual",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Granularity {
    type Err = LedgerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(Granularity::Monthly),
            "bimonthly" => Ok(Granularity::Bimonthly),
            "quarterly" => Ok(Granularity::Quarterly),
            "annual" => Ok(Granularity::Annual),
            other => Err(LedgerError::UnsupportedGranularity(other.to_string())),
        }
    }
}

fn month_end(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap() - Duration::days(1)
}
