//! Sorting orchestration methods
//!
//! Column keys route through the sort spec and the display order is
//! re-derived from scratch. The spec keeps precedence sticky: toggling an
//! active column flips its direction without promoting it.

use crate::logic::sorting::ColumnKey;
use crate::App;

impl App {
    /// Toggle a sort column. A new column joins as the lowest-precedence
    /// ascending key; an active column flips direction in place.
    pub(crate) fn toggle_sort(&mut self, column: ColumnKey) {
        if !column.is_sortable() {
            return;
        }
        self.model.table.sort_spec.toggle(column);
        self.model.refresh_display();
    }
}
