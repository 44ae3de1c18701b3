//! Search and campus filtering
//!
//! Pure predicate logic for narrowing the schedule: a free-text query
//! matched against instructor, class code and course title, combined with
//! per-campus include flags. Filtering preserves the input order, so it
//! composes with the sort stage without re-ordering anything.

use crate::logic::normalize::Row;
use std::collections::HashMap;

/// Per-campus include flags. Defaults to everything included.
///
/// Campuses the filter has never seen count as included, so freshly loaded
/// data always shows in full until the user excludes something.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CampusFilter {
    flags: HashMap<String, bool>,
}

impl CampusFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build flags (all included) from the campuses present in the data.
    pub fn from_rows(rows: &[Row]) -> Self {
        let mut flags = HashMap::new();
        for row in rows {
            if !row.campus.is_empty() {
                flags.entry(row.campus.clone()).or_insert(true);
            }
        }
        CampusFilter { flags }
    }

    pub fn includes(&self, campus: &str) -> bool {
        self.flags.get(campus).copied().unwrap_or(true)
    }

    /// Flip one campus flag.
    pub fn toggle(&mut self, campus: &str) {
        let flag = self.flags.entry(campus.to_string()).or_insert(true);
        *flag = !*flag;
    }

    /// Re-include every campus.
    pub fn reset(&mut self) {
        for flag in self.flags.values_mut() {
            *flag = true;
        }
    }

    /// Rebuild the campus set from freshly loaded rows, keeping the flag of
    /// every campus that is still present. A refresh must not silently undo
    /// the user's exclusions.
    pub fn rebuild_from_rows(&mut self, rows: &[Row]) {
        let mut rebuilt = CampusFilter::from_rows(rows);
        for (name, flag) in rebuilt.flags.iter_mut() {
            if let Some(&existing) = self.flags.get(name) {
                *flag = existing;
            }
        }
        *self = rebuilt;
    }

    pub fn all_included(&self) -> bool {
        self.flags.values().all(|&included| included)
    }

    /// Campus names in stable alphabetical order, for the filter popup.
    pub fn campuses(&self) -> Vec<(String, bool)> {
        let mut entries: Vec<(String, bool)> = self
            .flags
            .iter()
            .map(|(name, &included)| (name.clone(), included))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

/// Match a search query against one row.
///
/// Case-insensitive substring match over instructor, class code and course
/// title. The empty query matches everything.
///
/// # Examples
/// ```
/// use examtui::logic::normalize::Row;
/// use examtui::logic::search::matches_search;
///
/// let row = Row {
///     class_code: "CSCI-185-M01".to_string(),
///     instructor: "Garcia".to_string(),
///     ..Row::default()
/// };
/// assert!(matches_search(&row, "garcia"));
/// assert!(matches_search(&row, "csci"));
/// assert!(matches_search(&row, ""));
/// assert!(!matches_search(&row, "biology"));
/// ```
pub fn matches_search(row: &Row, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let query_lower = query.to_lowercase();
    row.instructor.to_lowercase().contains(&query_lower)
        || row.class_code.to_lowercase().contains(&query_lower)
        || row.course_title.to_lowercase().contains(&query_lower)
}

/// Filter rows by campus flags and search query, preserving order.
pub fn filter_rows(rows: &[Row], query: &str, campuses: &CampusFilter) -> Vec<Row> {
    rows.iter()
        .filter(|row| campuses.includes(&row.campus) && matches_search(row, query))
        .cloned()
        .collect()
}
