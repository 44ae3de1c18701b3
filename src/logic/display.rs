//! Display pipeline
//!
//! The single entry point the app uses to turn raw state into the row
//! sequence on screen: filter, then sort, then pin checked rows on top.
//! Pure; the caller re-runs it after any state change.

use crate::logic::normalize::Row;
use crate::logic::pinning::{arrange, Selection};
use crate::logic::search::{filter_rows, CampusFilter};
use crate::logic::sorting::{sort_rows, SortSpec};

pub fn compute_display_rows(
    all_rows: &[Row],
    search: &str,
    campuses: &CampusFilter,
    spec: &SortSpec,
    selection: &Selection,
) -> Vec<Row> {
    let visible = filter_rows(all_rows, search, campuses);
    let sorted = sort_rows(&visible, spec);
    arrange(selection, &sorted, all_rows)
}
