use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_schedule_url")]
    pub schedule_url: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Calendar export stays disabled until this section is configured.
    #[serde(default)]
    pub calendar: Option<CalendarConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    #[serde(default = "default_calendar_base_url")]
    pub base_url: String,
    #[serde(default = "default_calendar_id")]
    pub calendar_id: String,
    pub token: String,
}

fn default_schedule_url() -> String {
    "https://www.nyit.edu/files/registrar/final_exams_fall_2025.json".to_string()
}

fn default_timezone() -> String {
    "America/New_York".to_string()
}

fn default_calendar_base_url() -> String {
    "https://www.googleapis.com/calendar/v3".to_string()
}

fn default_calendar_id() -> String {
    "primary".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schedule_url: default_schedule_url(),
            timezone: default_timezone(),
            calendar: None,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}
