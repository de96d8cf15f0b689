use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entry::FinancialEntry;

/// Insertion-ordered collection of enriched entries, scoped to one session.
///
/// Entries are appended one at a time and never edited in place; the whole
/// ledger can be swapped by an external bulk update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub id: Uuid,
    #[serde(default)]
    entries: Vec<FinancialEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ledger {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            entries: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn append(&mut self, entry: FinancialEntry) {
        tracing::debug!(period = %entry.period, "entry appended");
        self.entries.push(entry);
        self.touch();
    }

    /// Discards the current contents and installs `entries` as-is. The
    /// caller guarantees they are already enriched.
    pub fn replace_all(&mut self, entries: Vec<FinancialEntry>) {
        tracing::info!(count = entries.len(), "ledger contents replaced");
        self.entries = entries;
        self.touch();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[FinancialEntry] {
        &self.entries
    }

    /// Owned copy of the entries in insertion order. Later appends never
    /// mutate a snapshot already handed out.
    pub fn snapshot(&self) -> Vec<FinancialEntry> {
        self.entries.clone()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
