//! Row normalization
//!
//! Turns raw schedule records (loosely-shaped JSON objects from the fetch
//! payload or the CSV ingest) into the canonical `Row` used everywhere else.
//! Normalization is total: whatever the record looks like, you get a `Row`
//! back, with missing or non-text fields as empty strings.

use serde_json::Value;

/// One normalized exam-schedule entry.
///
/// Every field is a plain string so that display and filtering never have
/// to handle absent values. `date`, `start_time` and `end_time` keep their
/// source text; comparison parses them on demand (see `logic::datetime`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    pub class_code: String,
    pub course_title: String,
    pub instructor: String,
    pub day: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub room: String,
    pub campus: String,
}

/// Stable content-derived identity for a row.
///
/// Selection state is keyed by this instead of by position or object
/// identity, so a refetch that rebuilds every `Row` keeps checked rows
/// checked. Class code plus date plus start time pins down one exam
/// sitting.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RowId(String);

impl Row {
    pub fn id(&self) -> RowId {
        RowId(format!(
            "{}|{}|{}",
            self.class_code, self.date, self.start_time
        ))
    }
}

/// Extract a text field from a raw record, defaulting to empty.
///
/// Strings are trimmed (the registrar spreadsheet pads cells); numbers are
/// rendered as text (room numbers sometimes arrive numeric); anything else
/// degrades to "".
fn text_field(record: &Value, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Normalize one raw record into a `Row`.
///
/// Source field names follow the registrar export: underscored headers,
/// including the combined `Building_&_Room` column (a bare `Room` column is
/// accepted as a fallback).
///
/// # Examples
/// ```
/// use examtui::logic::normalize::normalize;
///
/// let record = serde_json::json!({
///     "Class": "CSCI-185-M01",
///     "Course_Title": "Computer Programming I",
///     "Instructor": "Smith",
/// });
/// let row = normalize(&record);
/// assert_eq!(row.class_code, "CSCI-185-M01");
/// assert_eq!(row.date, ""); // missing fields default to empty
/// ```
pub fn normalize(record: &Value) -> Row {
    let mut room = text_field(record, "Building_&_Room");
    if room.is_empty() {
        room = text_field(record, "Room");
    }

    Row {
        class_code: text_field(record, "Class"),
        course_title: text_field(record, "Course_Title"),
        instructor: text_field(record, "Instructor"),
        day: text_field(record, "Day"),
        date: text_field(record, "Date"),
        start_time: text_field(record, "Start_Time"),
        end_time: text_field(record, "End_Time"),
        room,
        campus: text_field(record, "Campus"),
    }
}

/// Normalize a whole payload, preserving record order.
pub fn normalize_all(records: &[Value]) -> Vec<Row> {
    records.iter().map(normalize).collect()
}
