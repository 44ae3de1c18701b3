use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(
    search_mode: bool,
    has_search_query: bool,
    has_calendar: bool,
) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    // While typing a search, every letter goes into the query, so only
    // the keys that still work are listed
    if search_mode {
        hotkey_spans.extend(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(":Apply  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(":Cancel  "),
            Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
            Span::raw(":Nav"),
        ]);
        return hotkey_spans;
    }

    hotkey_spans.extend(vec![
        Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
        Span::raw(":Nav  "),
        Span::styled("Space", Style::default().fg(Color::Yellow)),
        Span::raw(":Check  "),
    ]);

    // Export - only show if a calendar is configured
    if has_calendar {
        hotkey_spans.extend(vec![
            Span::styled("x", Style::default().fg(Color::Yellow)),
            Span::raw(":Export  "),
        ]);
    }

    // Search key - contextual based on search state
    if has_search_query {
        hotkey_spans.extend(vec![
            Span::styled("/", Style::default().fg(Color::Yellow)),
            Span::raw(":Edit Search  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            Span::styled("/", Style::default().fg(Color::Yellow)),
            Span::raw(":Search  "),
        ]);
    }

    hotkey_spans.extend(vec![
        Span::styled("c/t/i/y/d/s/e", Style::default().fg(Color::Yellow)),
        Span::raw(":Sort  "),
        Span::styled("f", Style::default().fg(Color::Yellow)),
        Span::raw(":Campus  "),
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::raw(":Refresh  "),
        Span::styled("R", Style::default().fg(Color::Yellow)),
        Span::raw(":Reset  "),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::raw(":Help  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(
    search_mode: bool,
    has_search_query: bool,
    has_calendar: bool,
) -> Paragraph<'static> {
    let hotkey_spans = build_hotkey_spans(search_mode, has_search_query, has_calendar);
    let hotkey_line = Line::from(hotkey_spans);

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend (changes with search state and configuration)
pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    search_mode: bool,
    has_search_query: bool,
    has_calendar: bool,
) {
    let legend = build_legend_paragraph(search_mode, has_search_query, has_calendar);
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    search_mode: bool,
    has_search_query: bool,
    has_calendar: bool,
) -> u16 {
    // Build paragraph WITHOUT block borders for accurate line counting
    // (line_count() doesn't account for borders correctly when block is attached)
    let hotkey_spans = build_hotkey_spans(search_mode, has_search_query, has_calendar);
    let hotkey_line = Line::from(hotkey_spans);

    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    // Calculate available width (subtract left + right borders)
    let available_width = terminal_width.saturating_sub(2);

    // Get exact line count for wrapped text
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to convert spans to plain text for assertions
    fn spans_to_text(spans: &[Span]) -> String {
        spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    fn test_legend_search_mode_lists_only_search_keys() {
        let spans = build_hotkey_spans(
            true,  // search_mode
            false, // has_search_query
            true,  // has_calendar
        );

        let text = spans_to_text(&spans);
        assert!(text.contains("Apply"), "got: {}", text);
        assert!(text.contains("Cancel"), "got: {}", text);
        // Sort and export keys would type into the query, so they are hidden
        assert!(!text.contains("Sort"), "got: {}", text);
        assert!(!text.contains("Export"), "got: {}", text);
    }

    #[test]
    fn test_legend_hides_export_without_calendar() {
        let spans = build_hotkey_spans(
            false, // search_mode
            false, // has_search_query
            false, // has_calendar (not configured)
        );

        let text = spans_to_text(&spans);
        let has_x_key = text.split_whitespace().any(|word| word.starts_with("x:"));
        assert!(
            !has_x_key,
            "Legend without a configured calendar should not show 'x' key, got: {}",
            text
        );
        // Other keys are still there
        assert!(text.contains("Sort"), "got: {}", text);
        assert!(text.contains("Quit"), "got: {}", text);
    }

    #[test]
    fn test_legend_shows_export_with_calendar() {
        let spans = build_hotkey_spans(false, false, true);
        let text = spans_to_text(&spans);
        assert!(
            text.contains("x") && text.contains("Export"),
            "Legend with a configured calendar should contain 'x:Export', got: {}",
            text
        );
    }

    #[test]
    fn test_legend_search_entry_is_contextual() {
        let without_query = spans_to_text(&build_hotkey_spans(false, false, true));
        let with_query = spans_to_text(&build_hotkey_spans(false, true, true));

        assert!(without_query.contains(":Search"), "got: {}", without_query);
        assert!(with_query.contains(":Edit Search"), "got: {}", with_query);
    }

    #[test]
    fn test_legend_height_minimum_three() {
        // Wide terminal: everything fits on one line, still bordered
        let height = calculate_legend_height(300, false, false, true);
        assert_eq!(height, 3);
    }

    #[test]
    fn test_legend_height_grows_when_narrow() {
        let wide = calculate_legend_height(300, false, false, true);
        let narrow = calculate_legend_height(40, false, false, true);
        assert!(narrow > wide, "narrow={} wide={}", narrow, wide);
    }
}
