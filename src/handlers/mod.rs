//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - keyboard: User keyboard input
//!
//! Handlers are functions that take &mut App and process one event.

pub mod keyboard;

// Re-export for convenience
pub use keyboard::handle_key;
