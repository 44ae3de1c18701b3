//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - normalize: Raw record to canonical Row normalization
//! - datetime: Date/time parsing and chronological comparison
//! - search: Free-text search and campus filter predicates
//! - sorting: Multi-key sort spec and row comparison
//! - pinning: Checked-row selection and pin-to-top arrangement
//! - display: The filter/sort/pin pipeline composition
//! - csv: Registrar CSV spreadsheet ingest
//! - formatting: Fixed-width cell formatting for the table view

pub mod csv;
pub mod datetime;
pub mod display;
pub mod formatting;
pub mod normalize;
pub mod pinning;
pub mod search;
pub mod sorting;
