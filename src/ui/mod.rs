// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (bars, table area, popup-free zones)
// - render: Main orchestration function that coordinates all rendering
// - header: Renders the top title bar
// - table: Renders the exam table (column header, rows, scrollbar)
// - legend: Renders hotkey legend
// - search: Renders search input box with query and match count
// - status_bar: Renders bottom status bar with metrics
// - dialogs: Renders popups (campus filter, help)
// - toast: Renders toast notifications (brief pop-up messages)

pub mod dialogs;
pub mod header;
pub mod layout;
pub mod legend;
pub mod render;
pub mod search;
pub mod status_bar;
pub mod table;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
