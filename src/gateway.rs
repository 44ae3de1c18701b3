//! Read-through schedule cache
//!
//! Sits between the app and the schedule endpoint. A load serves the
//! persisted payload while it is younger than the expiration window and
//! fetches otherwise, storing what it got with a fresh timestamp. A failed
//! fetch degrades to an empty row set; the display never sees an error
//! from here.
//!
//! The clock and the fetch collaborator are injected so expiry behavior is
//! testable without real time or a real endpoint.

use anyhow::Result;
use serde_json::Value;
use std::future::Future;

use crate::api::ScheduleClient;
use crate::cache::{CacheDb, CacheEntry};
use crate::logic::normalize::{normalize_all, Row};

/// How long a stored payload stays servable (one hour).
pub const CACHE_EXPIRATION_MS: i64 = 60 * 60 * 1000;

pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Wall-clock millisecond epoch, matching the stored timestamp format.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Where raw schedule records come from when the cache cannot answer.
pub trait ScheduleSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Value>>> + Send;
}

impl ScheduleSource for ScheduleClient {
    async fn fetch(&self) -> Result<Vec<Value>> {
        self.fetch_schedule().await
    }
}

/// Offline source reading a registrar CSV export instead of the network.
///
/// Used with an in-memory cache db, so a file edit shows up on the next
/// load and nothing leaks into the on-disk cache.
pub struct CsvFileSource {
    path: std::path::PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScheduleSource for CsvFileSource {
    async fn fetch(&self) -> Result<Vec<Value>> {
        use anyhow::Context;

        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read CSV file: {}", self.path.display()))?;
        crate::logic::csv::parse_registrar_csv(&text)
    }
}

/// Outcome of a gateway load. Always usable: a failed fetch shows up as
/// zero rows plus the error text for a toast, not as an Err.
#[derive(Debug)]
pub struct LoadResult {
    pub rows: Vec<Row>,
    pub from_cache: bool,
    pub error: Option<String>,
}

pub struct ScheduleGateway<S, C> {
    db: CacheDb,
    source: S,
    clock: C,
}

fn is_fresh(entry: &CacheEntry, now_millis: i64) -> bool {
    now_millis - entry.fetched_at < CACHE_EXPIRATION_MS
}

impl<S: ScheduleSource, C: Clock> ScheduleGateway<S, C> {
    pub fn new(db: CacheDb, source: S, clock: C) -> Self {
        Self { db, source, clock }
    }

    /// Read-through load: cached payload while fresh, fetch otherwise.
    ///
    /// A cache entry that fails to deserialize is treated as a miss and
    /// falls through to the fetch path.
    pub async fn load(&mut self) -> LoadResult {
        if let Ok(Some(entry)) = self.db.load_entry() {
            if is_fresh(&entry, self.clock.now_millis()) {
                if let Ok(records) = serde_json::from_str::<Vec<Value>>(&entry.payload) {
                    return LoadResult {
                        rows: normalize_all(&records),
                        from_cache: true,
                        error: None,
                    };
                }
            }
        }

        self.refresh().await
    }

    /// Fetch now, bypassing freshness. Used by the expiry path, the manual
    /// refresh key and the periodic background refresh.
    pub async fn refresh(&mut self) -> LoadResult {
        match self.source.fetch().await {
            Ok(records) => {
                if let Ok(payload) = serde_json::to_string(&records) {
                    // A failed write only costs the next startup a refetch
                    let _ = self.db.save_entry(&payload, self.clock.now_millis());
                }
                LoadResult {
                    rows: normalize_all(&records),
                    from_cache: false,
                    error: None,
                }
            }
            Err(e) => LoadResult {
                rows: Vec::new(),
                from_cache: false,
                error: Some(format!("{:#}", e)),
            },
        }
    }
}
