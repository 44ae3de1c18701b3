use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top title bar area
    pub header_area: Rect,
    /// Main exam table area
    pub table_area: Rect,
    /// Search input area (zero-height when search is closed)
    pub search_area: Rect,
    /// Hotkey legend area
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the main screen layout
///
/// The table gets whatever is left after the fixed bars. The search bar
/// only takes space while search is open; the legend height follows how
/// many lines the hotkey text wraps to at the current width.
pub fn calculate_layout(area: Rect, search_visible: bool, legend_height: u16) -> LayoutInfo {
    let search_height = if search_visible { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title bar
            Constraint::Min(3),                // Exam table
            Constraint::Length(search_height), // Search input
            Constraint::Length(legend_height), // Hotkey legend
            Constraint::Length(3),             // Status bar
        ])
        .split(area);

    LayoutInfo {
        header_area: chunks[0],
        table_area: chunks[1],
        search_area: chunks[2],
        legend_area: chunks[3],
        status_area: chunks[4],
    }
}
