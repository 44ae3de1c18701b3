//! Search Input UI
//!
//! Renders the search input box with query, match count, and blinking cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render search input box above the legend
///
/// # Arguments
/// - `f`: Ratatui frame
/// - `area`: Rectangular area to render in
/// - `query`: Current search query
/// - `active`: Whether input is actively receiving keystrokes
/// - `match_count`: Number of rows the current query matches
pub fn render_search_input(
    f: &mut Frame,
    area: Rect,
    query: &str,
    active: bool,
    match_count: usize,
) {
    // Build title with match count
    let title = if active {
        format!(" Search ({} matches) - Esc to cancel ", match_count)
    } else {
        format!(" Search ({} matches) - Esc to clear ", match_count)
    };

    let border_color = if active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    // Build input line with cursor
    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = if active {
        Line::from(vec![
            Span::raw("Match: "),
            Span::raw(query),
            Span::styled("█", cursor_style), // Blinking cursor
        ])
    } else {
        Line::from(vec![Span::styled(
            format!("Match: {}", query),
            Style::default().fg(Color::Gray),
        )])
    };

    let paragraph = Paragraph::new(vec![input_line])
        .block(block)
        .style(Style::default());

    f.render_widget(paragraph, area);
}
