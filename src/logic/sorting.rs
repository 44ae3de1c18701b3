//! Multi-key sorting logic
//!
//! Pure comparison logic for the exam table. A `SortSpec` is an ordered
//! list of (column, direction) keys; earlier keys take precedence and the
//! first key that distinguishes two rows decides. Sorting is stable and
//! never mutates its input, so re-sorting after every state change is safe.

use crate::logic::datetime::{compare_dates, compare_times};
use crate::logic::normalize::Row;
use std::cmp::Ordering;

/// Table columns, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKey {
    ClassCode,
    CourseTitle,
    Instructor,
    Day,
    Date,
    StartTime,
    EndTime,
    Room,
    Campus,
}

impl ColumnKey {
    /// Columns that accept a sort toggle. Room and campus do not.
    pub fn is_sortable(self) -> bool {
        !matches!(self, ColumnKey::Room | ColumnKey::Campus)
    }

    /// Header label, matching the registrar table.
    pub fn label(self) -> &'static str {
        match self {
            ColumnKey::ClassCode => "Class",
            ColumnKey::CourseTitle => "Course Title",
            ColumnKey::Instructor => "Instructor",
            ColumnKey::Day => "Day",
            ColumnKey::Date => "Date",
            ColumnKey::StartTime => "Start Time",
            ColumnKey::EndTime => "End Time",
            ColumnKey::Room => "Room",
            ColumnKey::Campus => "Campus",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// One sort key: a column and a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortKey {
    pub column: ColumnKey,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn ascending(column: ColumnKey) -> Self {
        SortKey {
            column,
            direction: SortDirection::Ascending,
        }
    }
}

/// Ordered sort keys, at most one entry per column.
///
/// The first entry is the primary key; later entries break ties. Toggling
/// a column already in the spec flips its direction without moving it, so
/// precedence is sticky once established.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl SortSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Apply a sort request for a column.
    ///
    /// Present column: direction flips in place. Absent column: appended
    /// ascending as the lowest-precedence key. Non-sortable columns are
    /// ignored.
    pub fn toggle(&mut self, column: ColumnKey) {
        if !column.is_sortable() {
            return;
        }

        if let Some(key) = self.keys.iter_mut().find(|key| key.column == column) {
            key.direction = key.direction.flip();
        } else {
            self.keys.push(SortKey::ascending(column));
        }
    }

    pub fn direction_of(&self, column: ColumnKey) -> Option<SortDirection> {
        self.keys
            .iter()
            .find(|key| key.column == column)
            .map(|key| key.direction)
    }

    /// 1-based precedence of a column, for header annotations.
    pub fn precedence_of(&self, column: ColumnKey) -> Option<usize> {
        self.keys
            .iter()
            .position(|key| key.column == column)
            .map(|pos| pos + 1)
    }

    /// Status-bar text like "Date ↑, Instructor ↓".
    pub fn describe(&self) -> String {
        if self.keys.is_empty() {
            return "none".to_string();
        }
        self.keys
            .iter()
            .map(|key| format!("{} {}", key.column.label(), key.direction.arrow()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Compare two rows on a single column.
///
/// Date comparison folds in start and end time as tie-breaks before the
/// spec moves on to its next key; two exams on the same day order by when
/// they begin. Time columns compare by minutes since midnight; everything
/// else is case-insensitive text.
fn compare_by_column(a: &Row, b: &Row, column: ColumnKey) -> Ordering {
    match column {
        ColumnKey::Date => compare_dates(&a.date, &b.date)
            .then_with(|| compare_times(&a.start_time, &b.start_time))
            .then_with(|| compare_times(&a.end_time, &b.end_time)),
        ColumnKey::StartTime => compare_times(&a.start_time, &b.start_time),
        ColumnKey::EndTime => compare_times(&a.end_time, &b.end_time),
        ColumnKey::ClassCode => text_cmp(&a.class_code, &b.class_code),
        ColumnKey::CourseTitle => text_cmp(&a.course_title, &b.course_title),
        ColumnKey::Instructor => text_cmp(&a.instructor, &b.instructor),
        ColumnKey::Day => text_cmp(&a.day, &b.day),
        ColumnKey::Room => text_cmp(&a.room, &b.room),
        ColumnKey::Campus => text_cmp(&a.campus, &b.campus),
    }
}

fn text_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Compare two rows under a sort spec: first non-equal key wins.
pub fn compare_rows(a: &Row, b: &Row, spec: &SortSpec) -> Ordering {
    for key in spec.keys() {
        let result = compare_by_column(a, b, key.column);
        let result = match key.direction {
            SortDirection::Ascending => result,
            SortDirection::Descending => result.reverse(),
        };
        if result != Ordering::Equal {
            return result;
        }
    }
    Ordering::Equal
}

/// Sort rows under a spec. Stable and non-mutating: rows equal under every
/// key keep their input order, and the input itself is untouched.
pub fn sort_rows(rows: &[Row], spec: &SortSpec) -> Vec<Row> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| compare_rows(a, b, spec));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(class_code: &str, date: &str, start: &str, end: &str) -> Row {
        Row {
            class_code: class_code.to_string(),
            date: date.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            ..Row::default()
        }
    }

    fn spec_of(columns: &[ColumnKey]) -> SortSpec {
        let mut spec = SortSpec::new();
        for &column in columns {
            spec.toggle(column);
        }
        spec
    }

    #[test]
    fn test_toggle_appends_ascending() {
        let mut spec = SortSpec::new();
        spec.toggle(ColumnKey::Date);

        assert_eq!(spec.keys().len(), 1);
        assert_eq!(spec.keys()[0].column, ColumnKey::Date);
        assert_eq!(spec.keys()[0].direction, SortDirection::Ascending);
    }

    #[test]
    fn test_toggle_flips_direction_in_place() {
        let mut spec = SortSpec::new();
        spec.toggle(ColumnKey::Date);
        spec.toggle(ColumnKey::Instructor);

        // Second toggle of Date flips it but keeps it primary
        spec.toggle(ColumnKey::Date);
        assert_eq!(spec.keys()[0].column, ColumnKey::Date);
        assert_eq!(spec.keys()[0].direction, SortDirection::Descending);
        assert_eq!(spec.keys()[1].column, ColumnKey::Instructor);

        // Third toggle flips back, still primary
        spec.toggle(ColumnKey::Date);
        assert_eq!(spec.keys()[0].direction, SortDirection::Ascending);
        assert_eq!(spec.precedence_of(ColumnKey::Date), Some(1));
        assert_eq!(spec.precedence_of(ColumnKey::Instructor), Some(2));
    }

    #[test]
    fn test_toggle_keeps_one_entry_per_column() {
        let mut spec = SortSpec::new();
        spec.toggle(ColumnKey::Date);
        spec.toggle(ColumnKey::Date);
        spec.toggle(ColumnKey::Date);

        assert_eq!(spec.keys().len(), 1);
    }

    #[test]
    fn test_toggle_unsortable_column_is_noop() {
        let mut spec = SortSpec::new();
        spec.toggle(ColumnKey::Room);
        spec.toggle(ColumnKey::Campus);

        assert!(spec.is_empty());
    }

    #[test]
    fn test_date_sort_breaks_ties_by_start_then_end_time() {
        // Same date: the 8 AM exam comes before the 9 AM exam
        let rows = vec![
            make_row("CS101", "12/10/2025", "9:00 AM", "11:00 AM"),
            make_row("CS102", "12/10/2025", "8:00 AM", "10:00 AM"),
        ];

        let sorted = sort_rows(&rows, &spec_of(&[ColumnKey::Date]));
        assert_eq!(sorted[0].class_code, "CS102");
        assert_eq!(sorted[1].class_code, "CS101");
    }

    #[test]
    fn test_date_sort_end_time_breaks_remaining_tie() {
        let rows = vec![
            make_row("LONG", "12/10/2025", "9:00 AM", "12:00 PM"),
            make_row("SHORT", "12/10/2025", "9:00 AM", "10:00 AM"),
        ];

        let sorted = sort_rows(&rows, &spec_of(&[ColumnKey::Date]));
        assert_eq!(sorted[0].class_code, "SHORT");
        assert_eq!(sorted[1].class_code, "LONG");
    }

    #[test]
    fn test_date_sort_is_chronological() {
        // Lexicographic order would put "12/..." before "9/..."
        let rows = vec![
            make_row("DEC", "12/10/2025", "9:00 AM", "11:00 AM"),
            make_row("SEP", "9/5/2025", "9:00 AM", "11:00 AM"),
        ];

        let sorted = sort_rows(&rows, &spec_of(&[ColumnKey::Date]));
        assert_eq!(sorted[0].class_code, "SEP");
    }

    #[test]
    fn test_descending_inverts_the_whole_date_composite() {
        let rows = vec![
            make_row("EARLY", "12/10/2025", "8:00 AM", "10:00 AM"),
            make_row("LATE", "12/10/2025", "1:00 PM", "3:00 PM"),
        ];

        let mut spec = SortSpec::new();
        spec.toggle(ColumnKey::Date);
        spec.toggle(ColumnKey::Date); // now descending

        let sorted = sort_rows(&rows, &spec);
        assert_eq!(sorted[0].class_code, "LATE");
        assert_eq!(sorted[1].class_code, "EARLY");
    }

    #[test]
    fn test_multi_key_precedence() {
        let mut a = make_row("A", "12/10/2025", "9:00 AM", "11:00 AM");
        let mut b = make_row("B", "12/10/2025", "9:00 AM", "11:00 AM");
        let mut c = make_row("C", "12/08/2025", "9:00 AM", "11:00 AM");
        a.instructor = "Zhou".to_string();
        b.instructor = "Adams".to_string();
        c.instructor = "Zhou".to_string();

        // Primary instructor, secondary date
        let spec = spec_of(&[ColumnKey::Instructor, ColumnKey::Date]);
        let sorted = sort_rows(&vec![a, b, c], &spec);

        assert_eq!(sorted[0].class_code, "B"); // Adams first
        assert_eq!(sorted[1].class_code, "C"); // Zhou, earlier date
        assert_eq!(sorted[2].class_code, "A");
    }

    #[test]
    fn test_text_columns_compare_case_insensitively() {
        let mut a = make_row("A", "", "", "");
        let mut b = make_row("B", "", "", "");
        a.instructor = "adams".to_string();
        b.instructor = "BAKER".to_string();

        let spec = spec_of(&[ColumnKey::Instructor]);
        assert_eq!(compare_rows(&a, &b, &spec), Ordering::Less);
    }

    #[test]
    fn test_sort_is_stable_for_equal_rows() {
        let mut first = make_row("SAME", "12/10/2025", "9:00 AM", "11:00 AM");
        let mut second = make_row("SAME", "12/10/2025", "9:00 AM", "11:00 AM");
        first.room = "first".to_string();
        second.room = "second".to_string();

        let sorted = sort_rows(&[first, second], &spec_of(&[ColumnKey::Date]));
        assert_eq!(sorted[0].room, "first");
        assert_eq!(sorted[1].room, "second");
    }

    #[test]
    fn test_empty_spec_preserves_order() {
        let rows = vec![
            make_row("C", "", "", ""),
            make_row("A", "", "", ""),
            make_row("B", "", "", ""),
        ];
        let sorted = sort_rows(&rows, &SortSpec::new());
        let codes: Vec<&str> = sorted.iter().map(|r| r.class_code.as_str()).collect();
        assert_eq!(codes, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let rows = vec![
            make_row("B", "12/10/2025", "9:00 AM", "11:00 AM"),
            make_row("A", "12/08/2025", "9:00 AM", "11:00 AM"),
        ];
        let _ = sort_rows(&rows, &spec_of(&[ColumnKey::Date]));

        assert_eq!(rows[0].class_code, "B");
        assert_eq!(rows[1].class_code, "A");
    }

    #[test]
    fn test_unparseable_dates_sort_first() {
        let rows = vec![
            make_row("REAL", "12/10/2025", "9:00 AM", "11:00 AM"),
            make_row("TBD", "TBD", "9:00 AM", "11:00 AM"),
        ];
        let sorted = sort_rows(&rows, &spec_of(&[ColumnKey::Date]));
        assert_eq!(sorted[0].class_code, "TBD");
    }

    #[test]
    fn test_describe() {
        assert_eq!(SortSpec::new().describe(), "none");

        let mut spec = SortSpec::new();
        spec.toggle(ColumnKey::Date);
        spec.toggle(ColumnKey::Instructor);
        spec.toggle(ColumnKey::Instructor);
        assert_eq!(spec.describe(), "Date ↑, Instructor ↓");
    }
}
