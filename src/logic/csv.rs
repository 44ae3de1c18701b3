//! Registrar CSV ingest
//!
//! The registrar publishes the exam schedule as a spreadsheet export with
//! a few banner rows above the real header. This module finds the header
//! row (its first cell is "Session"), rewrites the header names with
//! underscores ("Course Title" becomes "Course_Title"), and maps each data
//! row to a JSON object under those names, matching the shape the remote
//! payload uses. Rows without a Class value are decorative and dropped.

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};

/// Parse registrar CSV text into raw schedule records.
pub fn parse_registrar_csv(text: &str) -> Result<Vec<Value>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut records = Vec::new();

    for record in reader.records() {
        let record = record.context("Failed to read CSV record")?;

        let Some(names) = &headers else {
            if record.get(0).map(str::trim) == Some("Session") {
                headers = Some(
                    record
                        .iter()
                        .map(|cell| cell.trim().replace(' ', "_"))
                        .collect(),
                );
            }
            continue;
        };

        let mut object = Map::new();
        for (index, name) in names.iter().enumerate() {
            let value = record.get(index).unwrap_or("");
            object.insert(name.clone(), Value::String(value.to_string()));
        }

        let class_cell = object
            .get("Class")
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim();
        if class_cell.is_empty() {
            continue;
        }

        records.push(Value::Object(object));
    }

    if headers.is_none() {
        bail!("Could not find the schedule header row (first cell \"Session\")");
    }

    Ok(records)
}
