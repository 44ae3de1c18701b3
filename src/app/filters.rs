//! Campus filter and view reset
//!
//! The campus popup toggles per-campus include flags. Reset returns the
//! whole view (search, sort keys, selection, campus flags) to its initial
//! state in one step; the data itself stays loaded.

use crate::App;

impl App {
    pub(crate) fn toggle_campus_popup(&mut self) {
        let was_open = self.model.ui.show_campus_filter;
        self.model.close_all_modals();
        if !was_open {
            self.model.ui.show_campus_filter = true;
            self.model.ui.campus_cursor = 0;
        }
    }

    pub(crate) fn campus_cursor_up(&mut self) {
        self.model.ui.campus_cursor = self.model.ui.campus_cursor.saturating_sub(1);
    }

    pub(crate) fn campus_cursor_down(&mut self) {
        let count = self.model.schedule.campus_filter.campuses().len();
        if count == 0 {
            return;
        }
        self.model.ui.campus_cursor = (self.model.ui.campus_cursor + 1).min(count - 1);
    }

    /// Flip the include flag for the campus under the popup cursor
    pub(crate) fn toggle_campus_at_cursor(&mut self) {
        let campuses = self.model.schedule.campus_filter.campuses();
        if let Some((name, _)) = campuses.get(self.model.ui.campus_cursor) {
            let name = name.clone();
            self.model.schedule.campus_filter.toggle(&name);
            self.model.refresh_display();
        }
    }

    /// Switch every campus back on, leaving the rest of the view alone
    pub(crate) fn include_all_campuses(&mut self) {
        self.model.schedule.campus_filter.reset();
        self.model.refresh_display();
    }

    /// One-step return to the initial view
    pub(crate) fn reset_view(&mut self) {
        self.model.reset_view();
        self.model.show_toast("View reset".to_string());
    }
}
