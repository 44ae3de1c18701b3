//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! search input, popups, export progress, and visual state.

use std::time::Instant;

/// Toast lifetime before auto-dismiss
const TOAST_DURATION_MS: u128 = 3000;

/// Search input, popups and visual state
#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // SEARCH
    // ============================================
    /// Whether search input is active (receiving keystrokes)
    pub search_mode: bool,

    /// Current search query, applied live while typing
    pub search_query: String,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Help overlay with the key map
    pub show_help: bool,

    /// Campus filter popup
    pub show_campus_filter: bool,

    /// Highlighted entry in the campus filter popup
    pub campus_cursor: usize,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    // ============================================
    // EXPORT
    // ============================================
    /// Whether a calendar export is in flight
    pub export_in_flight: bool,

    // ============================================
    // VISUAL STATE
    // ============================================
    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new() -> Self {
        Self {
            search_mode: false,
            search_query: String::new(),
            show_help: false,
            show_campus_filter: false,
            campus_cursor: 0,
            toast_message: None,
            export_in_flight: false,
            should_quit: false,
        }
    }

    /// Check if any modal is currently capturing input
    pub fn has_modal(&self) -> bool {
        self.show_help || self.show_campus_filter || self.search_mode
    }

    /// Close all modals. Leaves the applied search query alone; clearing
    /// the query is an explicit action (Esc in search mode, or reset).
    pub fn close_all_modals(&mut self) {
        self.show_help = false;
        self.show_campus_filter = false;
        self.search_mode = false;
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Check if toast has outlived its display time
    pub fn should_dismiss_toast(&self) -> bool {
        match &self.toast_message {
            Some((_, timestamp)) => timestamp.elapsed().as_millis() >= TOAST_DURATION_MS,
            None => false,
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}
