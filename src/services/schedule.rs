//! Schedule service worker
//!
//! Owns the cache gateway and the calendar client. The UI thread sends
//! requests over a channel and drains events between frames; every network
//! and cache touch happens on this task, never on the draw loop.

use std::fs::OpenOptions;
use std::io::Write;
use std::sync::atomic::Ordering;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::time::{interval, Duration};

use crate::api::{CalendarClient, CalendarEvent};
use crate::gateway::{Clock, ScheduleGateway, ScheduleSource};
use crate::logic::normalize::Row;

/// Background re-fetch period; keeps week-long sessions off stale data
const REFRESH_INTERVAL_SECS: u64 = 24 * 60 * 60;

fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !crate::DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(crate::utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

/// Requests the UI can make of the service
#[derive(Debug, Clone)]
pub enum ServiceRequest {
    /// Load the schedule, serving the cached payload while it is fresh
    LoadSchedule,

    /// Fetch the schedule now, bypassing cache freshness
    ForceRefresh,

    /// Insert one calendar event per row, in order
    ExportEvents { rows: Vec<Row> },
}

/// Events the service reports back
#[derive(Debug)]
pub enum ServiceEvent {
    ScheduleLoaded {
        rows: Vec<Row>,
        from_cache: bool,
        load_time_ms: u64,
        error: Option<String>,
    },

    ExportFinished {
        exported: usize,
        failed: usize,
        first_error: Option<String>,
    },
}

/// Schedule worker that processes requests in the background
struct ScheduleService<S, C> {
    gateway: ScheduleGateway<S, C>,
    calendar: Option<CalendarClient>,
    timezone: String,
    event_tx: mpsc::UnboundedSender<ServiceEvent>,
}

impl<S: ScheduleSource, C: Clock> ScheduleService<S, C> {
    fn new(
        gateway: ScheduleGateway<S, C>,
        calendar: Option<CalendarClient>,
        timezone: String,
        event_tx: mpsc::UnboundedSender<ServiceEvent>,
    ) -> Self {
        Self {
            gateway,
            calendar,
            timezone,
            event_tx,
        }
    }

    async fn load(&mut self, force: bool) {
        let started = Instant::now();
        let result = if force {
            self.gateway.refresh().await
        } else {
            self.gateway.load().await
        };

        log_debug(&format!(
            "DEBUG [Schedule Service]: loaded {} rows (from_cache={}, force={}) in {}ms",
            result.rows.len(),
            result.from_cache,
            force,
            started.elapsed().as_millis()
        ));

        let _ = self.event_tx.send(ServiceEvent::ScheduleLoaded {
            rows: result.rows,
            from_cache: result.from_cache,
            load_time_ms: started.elapsed().as_millis() as u64,
            error: result.error,
        });
    }

    /// Export rows one by one. A failed row does not stop the rest; the
    /// final event carries the counts and the first error text.
    async fn export(&mut self, rows: Vec<Row>) {
        let Some(client) = &self.calendar else {
            let _ = self.event_tx.send(ServiceEvent::ExportFinished {
                exported: 0,
                failed: rows.len(),
                first_error: Some("No calendar configured".to_string()),
            });
            return;
        };

        let mut exported = 0;
        let mut failed = 0;
        let mut first_error: Option<String> = None;

        for row in &rows {
            let outcome = match CalendarEvent::from_row(row, &self.timezone) {
                Ok(event) => client.insert_event(&event).await,
                Err(e) => Err(e),
            };

            match outcome {
                Ok(()) => exported += 1,
                Err(e) => {
                    log_debug(&format!(
                        "DEBUG [Schedule Service]: export failed for {}: {:#}",
                        row.class_code, e
                    ));
                    failed += 1;
                    if first_error.is_none() {
                        first_error = Some(format!("{:#}", e));
                    }
                }
            }
        }

        let _ = self.event_tx.send(ServiceEvent::ExportFinished {
            exported,
            failed,
            first_error,
        });
    }
}

/// Spawn the schedule service worker.
///
/// The refresh interval ticks immediately, so the startup load happens
/// here without an explicit request from the UI.
pub fn spawn_schedule_service<S, C>(
    gateway: ScheduleGateway<S, C>,
    calendar: Option<CalendarClient>,
    timezone: String,
) -> (
    mpsc::UnboundedSender<ServiceRequest>,
    mpsc::UnboundedReceiver<ServiceEvent>,
)
where
    S: ScheduleSource + Send + 'static,
    C: Clock + Send + 'static,
{
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ServiceRequest>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<ServiceEvent>();

    tokio::spawn(async move {
        let mut service = ScheduleService::new(gateway, calendar, timezone, event_tx);

        let mut refresh = interval(Duration::from_secs(REFRESH_INTERVAL_SECS));

        loop {
            tokio::select! {
                Some(request) = request_rx.recv() => {
                    match request {
                        ServiceRequest::LoadSchedule => service.load(false).await,
                        ServiceRequest::ForceRefresh => service.load(true).await,
                        ServiceRequest::ExportEvents { rows } => service.export(rows).await,
                    }
                }

                // First tick fires at once (startup load); later ticks are
                // the daily background refresh. By then the cached payload
                // has long expired, so load() goes to the network.
                _ = refresh.tick() => {
                    service.load(false).await;
                }
            }
        }
    });

    (request_tx, event_rx)
}
