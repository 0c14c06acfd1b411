//! Reject bookkeeping for one cleaning phase.

use std::collections::{BTreeMap, BTreeSet};

/// Row identifier within one chunk: the 0-based position assigned at load.
/// Identifiers always refer to the unfiltered chunk, so they survive row
/// removal.
pub type RowId = i64;

/// Per-field sets of rejected row identifiers.
///
/// Field evaluation order is preserved so reports can list offending columns
/// in the order they were checked. A row may appear under several fields when
/// more than one of its values fails.
#[derive(Debug, Clone, Default)]
pub struct RejectRecord {
    fields: Vec<String>,
    by_field: BTreeMap<String, BTreeSet<RowId>>,
}

impl RejectRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the rejected rows for a processed field. Fields are registered
    /// even when nothing was rejected, so summaries can report zero counts.
    pub fn record(&mut self, field: &str, rows: BTreeSet<RowId>) {
        if !self.by_field.contains_key(field) {
            self.fields.push(field.to_string());
        }
        self.by_field.entry(field.to_string()).or_default().extend(rows);
    }

    /// Processed fields in evaluation order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    pub fn rows_for(&self, field: &str) -> Option<&BTreeSet<RowId>> {
        self.by_field.get(field)
    }

    pub fn count_for(&self, field: &str) -> usize {
        self.by_field.get(field).map(BTreeSet::len).unwrap_or(0)
    }

    /// Distinct rejected rows across all fields.
    pub fn union(&self) -> BTreeSet<RowId> {
        let mut rows = BTreeSet::new();
        for set in self.by_field.values() {
            rows.extend(set.iter().copied());
        }
        rows
    }

    /// Fields that rejected the given row, in evaluation order.
    pub fn offending_fields(&self, row: RowId) -> Vec<String> {
        self.fields
            .iter()
            .filter(|field| {
                self.by_field
                    .get(*field)
                    .map(|set| set.contains(&row))
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }

    /// Total number of field-level rejections (a row rejected under two
    /// fields counts twice).
    pub fn field_hits(&self) -> usize {
        self.by_field.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.values().all(BTreeSet::is_empty)
    }
}
