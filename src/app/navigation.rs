//! Navigation orchestration methods
//!
//! Cursor movement within the exam table. Page jumps use the viewport
//! height captured during the last render.

use crate::App;

impl App {
    pub(crate) fn move_up(&mut self) {
        self.model.table.move_cursor_up();
    }

    pub(crate) fn move_down(&mut self) {
        self.model.table.move_cursor_down();
    }

    pub(crate) fn page_up(&mut self) {
        let page = self.visible_rows.max(1);
        self.model.table.move_cursor_page(-1, page);
    }

    pub(crate) fn page_down(&mut self) {
        let page = self.visible_rows.max(1);
        self.model.table.move_cursor_page(1, page);
    }

    pub(crate) fn jump_to_first(&mut self) {
        self.model.table.move_cursor_home();
    }

    pub(crate) fn jump_to_last(&mut self) {
        self.model.table.move_cursor_end();
    }
}
