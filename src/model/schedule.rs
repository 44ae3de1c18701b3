//! Schedule Model
//!
//! This sub-model holds the loaded schedule data and its load metadata:
//! every normalized row, the campus include flags derived from the data,
//! and bookkeeping about where the last load came from.

use crate::logic::normalize::Row;
use crate::logic::search::CampusFilter;

/// Loaded schedule data and campus flags
#[derive(Clone, Debug)]
pub struct ScheduleModel {
    /// Every normalized row from the last successful load
    pub all_rows: Vec<Row>,

    /// Per-campus include flags, rebuilt from the data on each load
    pub campus_filter: CampusFilter,

    /// Whether a load is currently in flight
    pub loading: bool,

    /// Whether the last load was served from the cache
    pub last_load_from_cache: Option<bool>,

    /// How long the last load took
    pub last_load_time_ms: Option<u64>,
}

impl ScheduleModel {
    pub fn new() -> Self {
        Self {
            all_rows: Vec::new(),
            campus_filter: CampusFilter::new(),
            loading: false,
            last_load_from_cache: None,
            last_load_time_ms: None,
        }
    }

    /// Replace the row set after a load or refresh (last-write-wins).
    ///
    /// Campus flags are rebuilt from the new data but keep the user's
    /// existing exclusions for campuses that are still present.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.campus_filter.rebuild_from_rows(&rows);
        self.all_rows = rows;
    }

    pub fn row_count(&self) -> usize {
        self.all_rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_rows.is_empty()
    }
}

impl Default for ScheduleModel {
    fn default() -> Self {
        Self::new()
    }
}
