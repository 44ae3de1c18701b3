//! External Services
//!
//! This module contains services that interact with external systems:
//! - schedule: schedule load/refresh and calendar export worker

pub mod schedule;

// Re-export commonly used types for convenience
pub use schedule::{spawn_schedule_service, ServiceEvent, ServiceRequest};
