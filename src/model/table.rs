//! Table Model
//!
//! View state for the exam table: the active sort keys, the checked-row
//! selection, the computed display rows, and the cursor. Display rows are
//! written here by the app after every pipeline run; the model itself does
//! no filtering or sorting.

use crate::logic::normalize::{Row, RowId};
use crate::logic::pinning::Selection;
use crate::logic::sorting::SortSpec;

/// Sort, selection and cursor state for the table
#[derive(Clone, Debug)]
pub struct TableModel {
    /// Active sort keys in precedence order
    pub sort_spec: SortSpec,

    /// Checked rows, in check order
    pub selection: Selection,

    /// Rows currently on screen, pipeline output
    pub display_rows: Vec<Row>,

    /// Cursor position within display_rows
    pub cursor: Option<usize>,
}

impl TableModel {
    pub fn new() -> Self {
        Self {
            sort_spec: SortSpec::new(),
            selection: Selection::new(),
            display_rows: Vec::new(),
            cursor: None,
        }
    }

    /// Row under the cursor
    pub fn cursor_row(&self) -> Option<&Row> {
        self.cursor.and_then(|idx| self.display_rows.get(idx))
    }

    /// Id of the row under the cursor
    pub fn cursor_row_id(&self) -> Option<RowId> {
        self.cursor_row().map(|row| row.id())
    }

    /// Install freshly computed display rows, keeping the cursor on the
    /// same row when it is still visible and clamping it otherwise.
    pub fn set_display_rows(&mut self, rows: Vec<Row>, follow: Option<RowId>) {
        self.display_rows = rows;

        if self.display_rows.is_empty() {
            self.cursor = None;
            return;
        }

        if let Some(id) = follow {
            if let Some(idx) = self.display_rows.iter().position(|row| row.id() == id) {
                self.cursor = Some(idx);
                return;
            }
        }

        let max = self.display_rows.len() - 1;
        self.cursor = Some(self.cursor.map_or(0, |idx| idx.min(max)));
    }

    pub fn move_cursor_up(&mut self) {
        if let Some(idx) = self.cursor {
            self.cursor = Some(idx.saturating_sub(1));
        }
    }

    pub fn move_cursor_down(&mut self) {
        if let Some(idx) = self.cursor {
            if idx + 1 < self.display_rows.len() {
                self.cursor = Some(idx + 1);
            }
        } else if !self.display_rows.is_empty() {
            self.cursor = Some(0);
        }
    }

    pub fn move_cursor_home(&mut self) {
        if !self.display_rows.is_empty() {
            self.cursor = Some(0);
        }
    }

    pub fn move_cursor_end(&mut self) {
        if !self.display_rows.is_empty() {
            self.cursor = Some(self.display_rows.len() - 1);
        }
    }

    pub fn move_cursor_page(&mut self, delta: isize, page: usize) {
        if self.display_rows.is_empty() {
            return;
        }
        let max = self.display_rows.len() - 1;
        let current = self.cursor.unwrap_or(0) as isize;
        let stepped = current + delta * page as isize;
        self.cursor = Some(stepped.clamp(0, max as isize) as usize);
    }
}

impl Default for TableModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(class_code: &str) -> Row {
        Row {
            class_code: class_code.to_string(),
            ..Row::default()
        }
    }

    fn rows(codes: &[&str]) -> Vec<Row> {
        codes.iter().map(|c| make_row(c)).collect()
    }

    #[test]
    fn test_table_model_creation() {
        let model = TableModel::new();
        assert!(model.sort_spec.is_empty());
        assert!(model.selection.is_empty());
        assert!(model.display_rows.is_empty());
        assert!(model.cursor.is_none());
    }

    #[test]
    fn test_set_display_rows_initializes_cursor() {
        let mut model = TableModel::new();
        model.set_display_rows(rows(&["A", "B"]), None);
        assert_eq!(model.cursor, Some(0));
        assert_eq!(model.cursor_row().unwrap().class_code, "A");
    }

    #[test]
    fn test_set_display_rows_clamps_cursor() {
        let mut model = TableModel::new();
        model.set_display_rows(rows(&["A", "B", "C", "D"]), None);
        model.move_cursor_end();
        assert_eq!(model.cursor, Some(3));

        // The list shrank under the cursor
        model.set_display_rows(rows(&["A", "B"]), None);
        assert_eq!(model.cursor, Some(1));
    }

    #[test]
    fn test_set_display_rows_follows_row_id() {
        let mut model = TableModel::new();
        model.set_display_rows(rows(&["A", "B", "C"]), None);
        model.cursor = Some(1); // on B

        let followed = model.cursor_row_id();
        // Re-sorted: B moved to the end
        model.set_display_rows(rows(&["A", "C", "B"]), followed);
        assert_eq!(model.cursor, Some(2));
        assert_eq!(model.cursor_row().unwrap().class_code, "B");
    }

    #[test]
    fn test_set_display_rows_empty_clears_cursor() {
        let mut model = TableModel::new();
        model.set_display_rows(rows(&["A"]), None);
        model.set_display_rows(Vec::new(), None);
        assert!(model.cursor.is_none());
        assert!(model.cursor_row().is_none());
    }

    #[test]
    fn test_cursor_movement_clamps_at_edges() {
        let mut model = TableModel::new();
        model.set_display_rows(rows(&["A", "B", "C"]), None);

        model.move_cursor_up();
        assert_eq!(model.cursor, Some(0));

        model.move_cursor_down();
        model.move_cursor_down();
        model.move_cursor_down();
        assert_eq!(model.cursor, Some(2));

        model.move_cursor_home();
        assert_eq!(model.cursor, Some(0));
        model.move_cursor_end();
        assert_eq!(model.cursor, Some(2));
    }

    #[test]
    fn test_cursor_page_movement() {
        let mut model = TableModel::new();
        let codes: Vec<String> = (0..30).map(|i| format!("C{:02}", i)).collect();
        let code_refs: Vec<&str> = codes.iter().map(String::as_str).collect();
        model.set_display_rows(rows(&code_refs), None);

        model.move_cursor_page(1, 10);
        assert_eq!(model.cursor, Some(10));
        model.move_cursor_page(1, 10);
        model.move_cursor_page(1, 10);
        assert_eq!(model.cursor, Some(29)); // clamped to last row
        model.move_cursor_page(-1, 10);
        assert_eq!(model.cursor, Some(19));
    }
}
