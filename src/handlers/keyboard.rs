//! Keyboard Input Handler
//!
//! Handles all keyboard input and user interactions.
//! Dispatch order matters: search input captures printable keys, popups
//! capture everything, and only then do the global bindings apply.

use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::sorting::ColumnKey;
use crate::App;

/// Handle keyboard input
///
/// Processes one keyboard event and dispatches to the appropriate action.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Search input mode: printable keys edit the query
    if app.model.ui.search_mode {
        match key.code {
            KeyCode::Esc => app.cancel_search(),
            KeyCode::Enter => app.accept_search(),
            KeyCode::Backspace => app.pop_search_char(),
            // Cursor keys still move the table under the live filter
            KeyCode::Up => app.move_up(),
            KeyCode::Down => app.move_down(),
            KeyCode::Char(c) => app.push_search_char(c),
            _ => {}
        }
        return;
    }

    // Campus filter popup
    if app.model.ui.show_campus_filter {
        match key.code {
            KeyCode::Esc | KeyCode::Char('f') | KeyCode::Char('q') => {
                app.model.close_all_modals();
            }
            KeyCode::Up | KeyCode::Char('k') => app.campus_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => app.campus_cursor_down(),
            KeyCode::Char(' ') | KeyCode::Enter => app.toggle_campus_at_cursor(),
            KeyCode::Char('a') => app.include_all_campuses(),
            _ => {
                // Ignore other keys while popup is showing
            }
        }
        return;
    }

    // Help popup: any of the usual close keys dismisses it
    if app.model.ui.show_help {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter => {
                app.model.close_all_modals();
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        // Esc clears an applied search first; with nothing applied it quits
        KeyCode::Esc => {
            if app.model.ui.search_query.is_empty() {
                app.model.ui.should_quit = true;
            } else {
                app.cancel_search();
            }
        }

        KeyCode::Char('/') => app.open_search(),
        KeyCode::Char(' ') => app.toggle_selected_row(),
        KeyCode::Char('x') => app.export_selected(),

        // Sort toggles, one key per sortable column
        KeyCode::Char('c') => app.toggle_sort(ColumnKey::ClassCode),
        KeyCode::Char('t') => app.toggle_sort(ColumnKey::CourseTitle),
        KeyCode::Char('i') => app.toggle_sort(ColumnKey::Instructor),
        KeyCode::Char('y') => app.toggle_sort(ColumnKey::Day),
        KeyCode::Char('d') => app.toggle_sort(ColumnKey::Date),
        KeyCode::Char('s') => app.toggle_sort(ColumnKey::StartTime),
        KeyCode::Char('e') => app.toggle_sort(ColumnKey::EndTime),

        KeyCode::Char('f') => app.toggle_campus_popup(),
        KeyCode::Char('R') => app.reset_view(),
        KeyCode::Char('r') => app.request_refresh(),
        KeyCode::Char('?') => app.model.ui.show_help = true,

        // Table navigation
        KeyCode::Up => app.move_up(),
        KeyCode::Down => app.move_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Home => app.jump_to_first(),
        KeyCode::End => app.jump_to_last(),

        _ => {}
    }
}
