//! CSV export of ledger snapshots for the download collaborator.

use std::io::Write;

use crate::errors::Result;
use crate::ledger::FinancialEntry;

/// Writes a header row plus one record per entry, periods as `YYYY-MM-DD`.
pub fn write_csv<W: Write>(entries: &[FinancialEntry], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for entry in entries {
        wtr.serialize(entry)?;
    }
    wtr.flush()?;
    Ok(())
}

/// In-memory rendition of [`write_csv`], for transports that hand the
/// payload straight to a download.
pub fn csv_string(entries: &[FinancialEntry]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(entries, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
