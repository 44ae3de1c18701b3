//! Search orchestration
//!
//! Live substring search over instructor, class code and course title.
//! Every keystroke re-runs the display pipeline; the filter itself lives
//! in logic/search.rs.

use crate::App;

impl App {
    /// Enter search input mode, keeping whatever query is already applied
    pub(crate) fn open_search(&mut self) {
        self.model.close_all_modals();
        self.model.ui.search_mode = true;
    }

    /// Append one character and re-filter immediately
    pub(crate) fn push_search_char(&mut self, c: char) {
        self.model.ui.search_query.push(c);
        self.model.refresh_display();
    }

    /// Delete the last character and re-filter
    pub(crate) fn pop_search_char(&mut self) {
        if self.model.ui.search_query.pop().is_some() {
            self.model.refresh_display();
        }
    }

    /// Leave input mode with the query still applied
    pub(crate) fn accept_search(&mut self) {
        self.model.ui.search_mode = false;
    }

    /// Drop the query entirely and leave input mode
    pub(crate) fn cancel_search(&mut self) {
        self.model.ui.search_mode = false;
        if !self.model.ui.search_query.is_empty() {
            self.model.ui.search_query.clear();
            self.model.refresh_display();
        }
    }
}
