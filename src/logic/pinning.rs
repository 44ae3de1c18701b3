//! Checked-row selection and pinning
//!
//! Checked rows float to the top of the table in the order they were
//! checked, ahead of everything the filter and sort stages produced. A
//! checked row that stops matching the current search or campus filter
//! stays visible at the top; checking is a stronger statement than
//! filtering.

use crate::logic::normalize::{Row, RowId};

/// Insertion-ordered set of checked row ids.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    ids: Vec<RowId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check an unchecked row, uncheck a checked one.
    pub fn toggle(&mut self, id: RowId) {
        if self.contains(&id) {
            self.ids.retain(|existing| existing != &id);
        } else {
            self.ids.push(id);
        }
    }

    pub fn contains(&self, id: &RowId) -> bool {
        self.ids.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> &[RowId] {
        &self.ids
    }
}

/// Build the final display sequence: checked rows first, in the order they
/// were checked, then every unchecked row from `sorted_filtered` in its
/// existing order.
///
/// Checked rows are resolved against `all_rows` rather than the filtered
/// view, so rows the filter dropped still appear. Ids that no longer match
/// any row (the schedule was refreshed underneath them) are skipped.
pub fn arrange(selection: &Selection, sorted_filtered: &[Row], all_rows: &[Row]) -> Vec<Row> {
    let mut arranged = Vec::with_capacity(sorted_filtered.len() + selection.len());

    for id in selection.ids() {
        if let Some(row) = all_rows.iter().find(|row| &row.id() == id) {
            arranged.push(row.clone());
        }
    }

    for row in sorted_filtered {
        if !selection.contains(&row.id()) {
            arranged.push(row.clone());
        }
    }

    arranged
}
