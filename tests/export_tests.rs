use std::fs::File;

use chrono::NaiveDate;
use fiscal_core::{
    export,
    ledger::{FinancialEntry, Ledger},
};
use rust_decimal_macros::dec;

fn seeded_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.append(
        FinancialEntry::enrich(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            dec!(1000),
            dec!(0),
            dec!(0),
            dec!(200),
            dec!(0),
            dec!(0),
        )
        .unwrap(),
    );
    ledger
}

#[test]
fn csv_snapshot_has_headers_and_one_row_per_entry() {
    let ledger = seeded_ledger();
    let rendered = export::csv_string(&ledger.snapshot()).unwrap();

    let mut lines = rendered.lines();
    assert_eq!(
        lines.next().unwrap(),
        "period,revenue_a,revenue_b,revenue_c,operating_expenses,other_expenses,\
         withholdings,vat_output,vat_input,vat_net,gross_receipts_tax,profit"
    );
    let row = lines.next().unwrap();
    assert!(row.starts_with("2024-01-01,"));
    assert!(row.contains("168.00"));
    assert_eq!(lines.next(), None);
}

#[test]
fn writes_csv_to_a_file() {
    let ledger = seeded_ledger();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.csv");

    export::write_csv(&ledger.snapshot(), File::create(&path).unwrap()).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("period,revenue_a"));
    assert_eq!(contents.lines().count(), 2);
}
