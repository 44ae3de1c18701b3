use crate::App;
use ratatui::Frame;

use super::{dialogs, header, layout, legend, search, status_bar, table, toast};

/// Main render function - orchestrates all UI rendering
/// This replaces the large terminal.draw() closure in main.rs
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    // The search bar stays on screen while a query is applied, not just
    // while it is being typed
    let search_visible = app.model.ui.search_mode || !app.model.ui.search_query.is_empty();
    let has_search_query = !app.model.ui.search_query.is_empty();

    let legend_height = legend::calculate_legend_height(
        size.width,
        app.model.ui.search_mode,
        has_search_query,
        app.calendar_enabled,
    );
    let layout_info = layout::calculate_layout(size, search_visible, legend_height);

    // Title bar at the top
    header::render_header(f, layout_info.header_area, app.model.schedule.loading);

    // The exam table (also records the visible row count for paging)
    table::render_table(f, layout_info.table_area, app);

    if search_visible {
        search::render_search_input(
            f,
            layout_info.search_area,
            &app.model.ui.search_query,
            app.model.ui.search_mode,
            app.model.table.display_rows.len(),
        );
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        app.model.ui.search_mode,
        has_search_query,
        app.calendar_enabled,
    );

    status_bar::render_status_bar(f, layout_info.status_area, &app.model);

    // Render campus filter menu if open
    if app.model.ui.show_campus_filter {
        let campuses = app.model.schedule.campus_filter.campuses();
        // Create temporary ListState for rendering
        let mut temp_state = ratatui::widgets::ListState::default();
        temp_state.select(Some(app.model.ui.campus_cursor));
        dialogs::render_campus_filter(f, &campuses, &mut temp_state);
    }

    if app.model.ui.show_help {
        dialogs::render_help(f);
    }

    // Render toast notification if active
    if let Some((message, _timestamp)) = &app.model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
