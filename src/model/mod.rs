//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models for maintainability:
//!
//! - **ScheduleModel**: Exam schedule data (rows, campus filter, load state)
//! - **TableModel**: Derived table state (sort keys, selection, display rows, cursor)
//! - **UiModel**: Search input, dialogs, popups
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: All I/O lives in the service layer
//! - Pure accessors: Helper methods are side-effect free

pub mod schedule;
pub mod table;
pub mod ui;

pub use schedule::ScheduleModel;
pub use table::TableModel;
pub use ui::UiModel;

use crate::logic::display::compute_display_rows;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Exam schedule data (rows, campus filter, load state)
    pub schedule: ScheduleModel,

    /// Derived table state (sort keys, selection, display order, cursor)
    pub table: TableModel,

    /// Search input and popups
    pub ui: UiModel,
}

impl Model {
    /// Create initial model with default settings
    pub fn new() -> Self {
        Self {
            schedule: ScheduleModel::new(),
            table: TableModel::new(),
            ui: UiModel::new(),
        }
    }

    /// Recompute the display rows from the current view state.
    ///
    /// Runs the full pipeline (filter, sort, pin) over the normalized rows
    /// and keeps the cursor on the same row where possible.
    pub fn refresh_display(&mut self) {
        let follow = self.table.cursor_row_id();
        let rows = compute_display_rows(
            &self.schedule.all_rows,
            &self.ui.search_query,
            &self.schedule.campus_filter,
            &self.table.sort_spec,
            &self.table.selection,
        );
        self.table.set_display_rows(rows, follow);
    }

    /// Replace the schedule data and recompute the display
    pub fn set_rows(&mut self, rows: Vec<crate::logic::normalize::Row>) {
        self.schedule.set_rows(rows);
        self.refresh_display();
    }

    /// Reset the view to its initial state in one step: clear the search
    /// query, the sort-key sequence and the selection, and re-enable every
    /// campus. The schedule data itself is untouched.
    pub fn reset_view(&mut self) {
        self.ui.search_query.clear();
        self.ui.search_mode = false;
        self.table.sort_spec.clear();
        self.table.selection.clear();
        self.schedule.campus_filter.reset();
        self.refresh_display();
    }

    /// Check if any modal dialog is showing
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    /// Close all modal dialogs
    pub fn close_all_modals(&mut self) {
        self.ui.close_all_modals();
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        self.ui.should_dismiss_toast()
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::normalize::Row;
    use crate::logic::sorting::ColumnKey;

    fn make_row(class_code: &str, campus: &str, date: &str, start: &str) -> Row {
        Row {
            class_code: class_code.to_string(),
            course_title: format!("Course {}", class_code),
            instructor: "Garcia".to_string(),
            day: "Monday".to_string(),
            date: date.to_string(),
            start_time: start.to_string(),
            end_time: "10:00 AM".to_string(),
            room: "HSH 112".to_string(),
            campus: campus.to_string(),
        }
    }

    fn sample_rows() -> Vec<Row> {
        vec![
            make_row("CS101", "Manhattan", "12/16/2025", "8:00 AM"),
            make_row("CS102", "Long Island", "12/15/2025", "8:00 AM"),
            make_row("MA201", "Manhattan", "12/15/2025", "2:00 PM"),
        ]
    }

    #[test]
    fn test_model_creation() {
        let model = Model::new();
        assert!(model.schedule.all_rows.is_empty());
        assert!(model.table.display_rows.is_empty());
        assert!(model.table.sort_spec.is_empty());
        assert!(!model.ui.search_mode);
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new();
        let _cloned = model.clone();
    }

    #[test]
    fn test_set_rows_refreshes_display() {
        let mut model = Model::new();
        model.set_rows(sample_rows());
        assert_eq!(model.table.display_rows.len(), 3);
        assert_eq!(model.table.cursor, Some(0));
    }

    #[test]
    fn test_refresh_display_applies_search() {
        let mut model = Model::new();
        model.set_rows(sample_rows());

        model.ui.search_query = "cs1".to_string();
        model.refresh_display();
        assert_eq!(model.table.display_rows.len(), 2);
        assert!(model
            .table
            .display_rows
            .iter()
            .all(|r| r.class_code.starts_with("CS")));
    }

    #[test]
    fn test_refresh_display_applies_sort() {
        let mut model = Model::new();
        model.set_rows(sample_rows());

        model.table.sort_spec.toggle(ColumnKey::Date);
        model.refresh_display();
        // 12/15 rows first, tie broken by start time
        assert_eq!(model.table.display_rows[0].class_code, "CS102");
        assert_eq!(model.table.display_rows[1].class_code, "MA201");
        assert_eq!(model.table.display_rows[2].class_code, "CS101");
    }

    #[test]
    fn test_refresh_display_keeps_cursor_on_row() {
        let mut model = Model::new();
        model.set_rows(sample_rows());

        model.table.cursor = Some(2); // MA201
        model.table.sort_spec.toggle(ColumnKey::Date);
        model.refresh_display();
        // MA201 moved to index 1; cursor follows it
        assert_eq!(model.table.cursor, Some(1));
        assert_eq!(model.table.cursor_row().map(|r| r.class_code.as_str()), Some("MA201"));
    }

    #[test]
    fn test_reset_view_clears_everything() {
        let mut model = Model::new();
        model.set_rows(sample_rows());

        // Non-empty search, two sort keys, selected rows, one campus disabled
        model.ui.search_query = "cs".to_string();
        model.table.sort_spec.toggle(ColumnKey::Date);
        model.table.sort_spec.toggle(ColumnKey::Instructor);
        for row in sample_rows() {
            model.table.selection.toggle(row.id());
        }
        model.schedule.campus_filter.toggle("Manhattan");
        model.refresh_display();

        model.reset_view();

        assert!(model.ui.search_query.is_empty());
        assert!(model.table.sort_spec.is_empty());
        assert!(model.table.selection.is_empty());
        assert!(model.schedule.campus_filter.all_included());
        // Data untouched, display back to the full unsorted set
        assert_eq!(model.schedule.all_rows.len(), 3);
        assert_eq!(model.table.display_rows.len(), 3);
        assert_eq!(model.table.display_rows[0].class_code, "CS101");
    }

    #[test]
    fn test_reset_view_on_empty_model() {
        let mut model = Model::new();
        model.reset_view();
        assert!(model.table.display_rows.is_empty());
        assert_eq!(model.table.cursor, None);
    }

    #[test]
    fn test_has_modal() {
        let mut model = Model::new();
        assert!(!model.has_modal());

        model.ui.show_campus_filter = true;
        assert!(model.has_modal());

        model.close_all_modals();
        assert!(!model.has_modal());
    }

    #[test]
    fn test_toast() {
        let mut model = Model::new();
        assert!(model.ui.toast_message.is_none());

        model.show_toast("Test".to_string());
        assert!(model.ui.toast_message.is_some());

        model.dismiss_toast();
        assert!(model.ui.toast_message.is_none());
    }

    #[test]
    fn test_selection_pins_rows_on_top() {
        let mut model = Model::new();
        model.set_rows(sample_rows());

        let pinned = make_row("MA201", "Manhattan", "12/15/2025", "2:00 PM").id();
        model.table.selection.toggle(pinned.clone());
        model.refresh_display();

        assert_eq!(model.table.display_rows[0].class_code, "MA201");

        // Pinned row survives a search that would exclude it
        model.ui.search_query = "cs101".to_string();
        model.refresh_display();
        assert_eq!(model.table.display_rows.len(), 2);
        assert_eq!(model.table.display_rows[0].class_code, "MA201");
        assert_eq!(model.table.display_rows[1].class_code, "CS101");
    }
}
