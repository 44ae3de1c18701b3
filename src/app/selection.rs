//! Row selection and calendar export
//!
//! Checked rows pin to the top of the table and are the unit of export.

use crate::logic::normalize::Row;
use crate::services::ServiceRequest;
use crate::App;

impl App {
    /// Check or uncheck the row under the cursor
    pub(crate) fn toggle_selected_row(&mut self) {
        let Some(id) = self.model.table.cursor_row_id() else {
            return;
        };
        self.model.table.selection.toggle(id);
        self.model.refresh_display();
    }

    /// Rows currently checked, in the order they were checked
    pub(crate) fn selected_rows(&self) -> Vec<Row> {
        self.model
            .table
            .selection
            .ids()
            .iter()
            .filter_map(|id| {
                self.model
                    .schedule
                    .all_rows
                    .iter()
                    .find(|row| &row.id() == id)
                    .cloned()
            })
            .collect()
    }

    /// Send every checked row to the calendar service
    pub(crate) fn export_selected(&mut self) {
        if self.model.ui.export_in_flight {
            return;
        }

        let rows = self.selected_rows();
        if rows.is_empty() {
            self.model.show_toast("No rows checked".to_string());
            return;
        }

        self.model.ui.export_in_flight = true;
        self.model
            .show_toast(format!("Exporting {} events...", rows.len()));
        let _ = self.service_tx.send(ServiceRequest::ExportEvents { rows });
    }
}
