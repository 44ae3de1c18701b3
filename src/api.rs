use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::logic::datetime::event_datetime;
use crate::logic::normalize::Row;

/// Client for the published schedule endpoint.
///
/// The endpoint serves the registrar data as a JSON array of records with
/// underscored field names (the output of the registrar CSV conversion).
#[derive(Clone)]
pub struct ScheduleClient {
    url: String,
    client: Client,
}

impl ScheduleClient {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: Client::new(),
        }
    }

    pub async fn fetch_schedule(&self) -> Result<Vec<Value>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to fetch exam schedule")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow::anyhow!(
                "Schedule endpoint returned {}: {}",
                status,
                error_text
            ));
        }

        let records: Vec<Value> = response
            .json()
            .await
            .context("Failed to parse schedule payload")?;

        Ok(records)
    }
}

/// One event body for the calendar service.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarEvent {
    pub summary: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub start: EventTime,
    pub end: EventTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventTime {
    #[serde(rename = "dateTime")]
    pub date_time: String,
    #[serde(rename = "timeZone")]
    pub time_zone: String,
}

impl CalendarEvent {
    /// Translate a checked row into an event body.
    ///
    /// Fails when the row's date or times do not parse; export reports
    /// such rows instead of inventing times for them.
    pub fn from_row(row: &Row, time_zone: &str) -> Result<Self> {
        let start = event_datetime(&row.date, &row.start_time).with_context(|| {
            format!(
                "{}: cannot build start from {:?} {:?}",
                row.class_code, row.date, row.start_time
            )
        })?;
        let end = event_datetime(&row.date, &row.end_time).with_context(|| {
            format!(
                "{}: cannot build end from {:?} {:?}",
                row.class_code, row.date, row.end_time
            )
        })?;

        let summary = if row.course_title.is_empty() {
            format!("{} Final Exam", row.class_code)
        } else {
            format!("{} Final Exam ({})", row.course_title, row.class_code)
        };

        let location = match (row.room.is_empty(), row.campus.is_empty()) {
            (false, false) => format!("{}, {}", row.room, row.campus),
            (false, true) => row.room.clone(),
            (true, false) => row.campus.clone(),
            (true, true) => String::new(),
        };

        let description = if row.instructor.is_empty() {
            String::new()
        } else {
            format!("Instructor: {}", row.instructor)
        };

        Ok(CalendarEvent {
            summary,
            location,
            description,
            start: EventTime {
                date_time: start,
                time_zone: time_zone.to_string(),
            },
            end: EventTime {
                date_time: end,
                time_zone: time_zone.to_string(),
            },
        })
    }
}

/// Client for the external calendar service.
#[derive(Clone)]
pub struct CalendarClient {
    base_url: String,
    calendar_id: String,
    token: String,
    client: Client,
}

impl CalendarClient {
    pub fn new(base_url: String, calendar_id: String, token: String) -> Self {
        Self {
            base_url,
            calendar_id,
            token,
            client: Client::new(),
        }
    }

    /// Insert one event into the configured calendar.
    pub async fn insert_event(&self, event: &CalendarEvent) -> Result<()> {
        let url = format!(
            "{}/calendars/{}/events",
            self.base_url,
            urlencoding::encode(&self.calendar_id)
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(event)
            .send()
            .await
            .context("Failed to reach calendar service")?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            anyhow::bail!("Calendar insert failed: {} - {}", status, text);
        }

        Ok(())
    }
}
