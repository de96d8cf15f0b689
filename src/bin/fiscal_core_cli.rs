use std::{env, fs::File, path::PathBuf, process::ExitCode};

use colored::Colorize;
use fiscal_core::{
    config::ConfigManager,
    currency::{format_currency_value, locale_for, CurrencyCode, FormatOptions},
    errors::{LedgerError, Result},
    export,
    ledger::{parse_period, FinancialEntry, Granularity, Ledger},
    report::{aggregate, category_breakdown, monthly_report, statistics},
};
use rust_decimal::Decimal;
use serde::Deserialize;

const USAGE: &str = "Usage: fiscal_core_cli <entries.csv> \
[--granularity monthly|bimonthly|quarterly|annual] [--export <path>]";

/// Raw input row: the six monetary inputs plus the reporting period.
/// Enrichment derives the rest.
#[derive(Debug, Deserialize)]
struct RawEntryRecord {
    period: String,
    revenue_a: Decimal,
    revenue_b: Decimal,
    revenue_c: Decimal,
    operating_expenses: Decimal,
    other_expenses: Decimal,
    withholdings: Decimal,
}

fn main() -> ExitCode {
    fiscal_core::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "[x]".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut input: Option<PathBuf> = None;
    let mut granularity: Option<Granularity> = None;
    let mut export_path: Option<PathBuf> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--granularity" => {
                let value = args
                    .next()
                    .ok_or_else(|| LedgerError::InvalidInput("--granularity needs a value".into()))?;
                granularity = Some(value.parse()?);
            }
            "--export" => {
                let value = args
                    .next()
                    .ok_or_else(|| LedgerError::InvalidInput("--export needs a path".into()))?;
                export_path = Some(PathBuf::from(value));
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                return Ok(());
            }
            other => input = Some(PathBuf::from(other)),
        }
    }

    let input = input.ok_or_else(|| LedgerError::InvalidInput(USAGE.into()))?;

    let config = ConfigManager::new()?.load()?;
    let locale = locale_for(&config.locale);
    let code = CurrencyCode::new(&config.currency);
    let options = FormatOptions::default();
    let money = |amount: Decimal| format_currency_value(amount, &code, &locale, &options);

    let mut ledger = Ledger::new();
    let mut reader = csv::Reader::from_reader(File::open(&input)?);
    for record in reader.deserialize() {
        let record: RawEntryRecord = record?;
        let period = parse_period(&record.period)?;
        let entry = FinancialEntry::enrich(
            period,
            record.revenue_a,
            record.revenue_b,
            record.revenue_c,
            record.operating_expenses,
            record.other_expenses,
            record.withholdings,
        )?;
        ledger.append(entry);
    }

    if ledger.is_empty() {
        println!("{}", "No entries loaded; nothing to report.".yellow());
        return Ok(());
    }

    println!("{}", "Monthly report".bold().underline());
    for bucket in monthly_report(&ledger) {
        println!(
            "  {}  revenue {}  expenses {}  taxes {}  profit {}",
            bucket.totals.period_end.format("%Y-%m"),
            money(bucket.revenue_total).green(),
            money(bucket.expense_total).red(),
            money(bucket.tax_total),
            money(bucket.totals.profit).cyan(),
        );
    }

    if let Some(granularity) = granularity {
        println!();
        println!("{} ({})", "Period totals".bold().underline(), granularity);
        for bucket in aggregate(&ledger, granularity) {
            let revenue = bucket.revenue_a + bucket.revenue_b + bucket.revenue_c;
            println!(
                "  {}  revenue {}  vat {}  profit {}",
                bucket.period_end,
                money(revenue).green(),
                money(bucket.vat_net),
                money(bucket.profit).cyan(),
            );
        }
    }

    let summary = statistics(&ledger);
    println!();
    println!("{}", "Statistics".bold().underline());
    println!("  total revenue      {}", money(summary.total_revenue).green());
    println!("  total expenses     {}", money(summary.total_expenses).red());
    println!("  total taxes        {}", money(summary.total_taxes));
    println!("  total profit       {}", money(summary.total_profit).cyan());
    println!("  avg revenue/entry  {}", money(summary.average_revenue_per_entry));
    println!("  avg expenses/entry {}", money(summary.average_expenses_per_entry));

    let breakdown = category_breakdown(&ledger);
    println!();
    println!("{}", "Categories".bold().underline());
    println!(
        "  revenue A {}  B {}  C {}",
        money(breakdown.revenue.category_a),
        money(breakdown.revenue.category_b),
        money(breakdown.revenue.category_c),
    );
    println!(
        "  expenses operating {}  other {}",
        money(breakdown.expenses.operating),
        money(breakdown.expenses.other),
    );
    println!(
        "  taxes vat {}  gross receipts {}  withholdings {}",
        money(breakdown.taxes.vat_net),
        money(breakdown.taxes.gross_receipts),
        money(breakdown.taxes.withholdings),
    );

    if let Some(path) = export_path {
        export::write_csv(&ledger.snapshot(), File::create(&path)?)?;
        println!();
        println!("{} snapshot written to {}", "[ok]".green(), path.display());
    }

    Ok(())
}
