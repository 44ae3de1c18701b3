use anyhow::Result;
use rusqlite::{params, Connection};
use std::path::PathBuf;

use crate::utils;

/// Stored schedule payload plus the moment it was fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// Serialized JSON array of raw schedule records.
    pub payload: String,
    /// Millisecond epoch timestamp of the fetch.
    pub fetched_at: i64,
}

/// Local key-value store for the schedule payload.
///
/// Two entries, mirroring the browser original: the serialized payload and
/// its fetch timestamp. Freshness policy lives in the gateway; this layer
/// only persists.
pub struct CacheDb {
    conn: Connection,
}

const PAYLOAD_KEY: &str = "schedule_payload";
const FETCHED_AT_KEY: &str = "schedule_fetched_at";

impl CacheDb {
    pub fn new() -> Result<Self> {
        let cache_dir = Self::get_cache_dir()?;
        std::fs::create_dir_all(&cache_dir)?;

        let db_path = cache_dir.join("cache.db");
        let conn = Connection::open(db_path)?;

        let mut cache = CacheDb { conn };
        cache.init_schema()?;

        Ok(cache)
    }

    /// In-memory store, for tests and as a last-resort fallback.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut cache = CacheDb { conn };
        cache.init_schema()?;
        Ok(cache)
    }

    fn get_cache_dir() -> Result<PathBuf> {
        if let Some(cache_dir) = dirs::cache_dir() {
            Ok(cache_dir.join("examtui"))
        } else {
            Ok(utils::get_cache_fallback_path())
        }
    }

    fn init_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS schedule_cache (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )?;

        Ok(())
    }

    fn get_value(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM schedule_cache WHERE key = ?1")?;

        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Load the cached payload and timestamp, if both are present and the
    /// timestamp still parses. A half-written or corrupted cache reads as
    /// a miss, never as an error.
    pub fn load_entry(&self) -> Result<Option<CacheEntry>> {
        let payload = self.get_value(PAYLOAD_KEY)?;
        let fetched_at = self
            .get_value(FETCHED_AT_KEY)?
            .and_then(|text| text.parse::<i64>().ok());

        match (payload, fetched_at) {
            (Some(payload), Some(fetched_at)) => Ok(Some(CacheEntry {
                payload,
                fetched_at,
            })),
            _ => Ok(None),
        }
    }

    pub fn save_entry(&self, payload: &str, fetched_at: i64) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO schedule_cache (key, value) VALUES (?1, ?2)",
            params![PAYLOAD_KEY, payload],
        )?;
        self.conn.execute(
            "INSERT OR REPLACE INTO schedule_cache (key, value) VALUES (?1, ?2)",
            params![FETCHED_AT_KEY, fetched_at.to_string()],
        )?;

        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        self.conn.execute("DELETE FROM schedule_cache", [])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cache_is_a_miss() {
        let db = CacheDb::open_in_memory().unwrap();
        assert_eq!(db.load_entry().unwrap(), None);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let db = CacheDb::open_in_memory().unwrap();
        db.save_entry(r#"[{"Class":"CSCI-185-M01"}]"#, 1_765_000_000_000)
            .unwrap();

        let entry = db.load_entry().unwrap().unwrap();
        assert_eq!(entry.payload, r#"[{"Class":"CSCI-185-M01"}]"#);
        assert_eq!(entry.fetched_at, 1_765_000_000_000);
    }

    #[test]
    fn test_save_overwrites_previous_entry() {
        let db = CacheDb::open_in_memory().unwrap();
        db.save_entry("[]", 1000).unwrap();
        db.save_entry(r#"[{"Class":"NEW"}]"#, 2000).unwrap();

        let entry = db.load_entry().unwrap().unwrap();
        assert_eq!(entry.payload, r#"[{"Class":"NEW"}]"#);
        assert_eq!(entry.fetched_at, 2000);
    }

    #[test]
    fn test_corrupt_timestamp_reads_as_miss() {
        let db = CacheDb::open_in_memory().unwrap();
        db.conn
            .execute(
                "INSERT INTO schedule_cache (key, value) VALUES (?1, ?2)",
                params![PAYLOAD_KEY, "[]"],
            )
            .unwrap();
        db.conn
            .execute(
                "INSERT INTO schedule_cache (key, value) VALUES (?1, ?2)",
                params![FETCHED_AT_KEY, "not a number"],
            )
            .unwrap();

        assert_eq!(db.load_entry().unwrap(), None);
    }

    #[test]
    fn test_clear() {
        let db = CacheDb::open_in_memory().unwrap();
        db.save_entry("[]", 1000).unwrap();
        db.clear().unwrap();
        assert_eq!(db.load_entry().unwrap(), None);
    }
}
