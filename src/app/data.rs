//! Data loading orchestration
//!
//! Applies schedule service events to the model and issues load and
//! refresh requests. The service owns the cache and the network; these
//! methods only move results into the model.

use crate::services::{ServiceEvent, ServiceRequest};
use crate::{log_debug, App};

impl App {
    /// Apply one event from the schedule service
    pub(crate) fn handle_service_event(&mut self, event: ServiceEvent) {
        match event {
            ServiceEvent::ScheduleLoaded {
                rows,
                from_cache,
                load_time_ms,
                error,
            } => {
                self.model.schedule.loading = false;
                self.model.schedule.last_load_from_cache = Some(from_cache);
                self.model.schedule.last_load_time_ms = Some(load_time_ms);
                self.model.set_rows(rows);

                if let Some(error) = error {
                    log_debug(&format!("Schedule load failed: {}", error));
                    self.model.show_toast(format!("Load failed: {}", error));
                }
            }

            ServiceEvent::ExportFinished {
                exported,
                failed,
                first_error,
            } => {
                self.model.ui.export_in_flight = false;

                let message = match (failed, first_error) {
                    (0, _) => format!("Exported {} events", exported),
                    (_, Some(error)) => {
                        format!("Exported {}, failed {}: {}", exported, failed, error)
                    }
                    (_, None) => format!("Exported {}, failed {}", exported, failed),
                };
                self.model.show_toast(message);
            }
        }
    }

    /// Re-fetch the schedule now, bypassing cache freshness
    pub(crate) fn request_refresh(&mut self) {
        if self.model.schedule.loading {
            return;
        }
        self.model.schedule.loading = true;
        let _ = self.service_tx.send(ServiceRequest::ForceRefresh);
    }
}
