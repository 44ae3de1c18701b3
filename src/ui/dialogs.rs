use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the campus filter menu
///
/// One entry per campus seen in the loaded rows, with its include state
/// as a checkbox. Rows with an unrecognized campus are always shown, so
/// the list is exactly what can be toggled.
pub fn render_campus_filter(f: &mut Frame, campuses: &[(String, bool)], state: &mut ListState) {
    let menu_items: Vec<ListItem> = campuses
        .iter()
        .map(|(name, included)| {
            let checkbox = if *included { "[x]" } else { "[ ]" };
            let style = if *included {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(Span::styled(format!("{} {}", checkbox, name), style))
        })
        .collect();

    // Center the menu
    let area = f.area();
    let menu_width = 50;
    let menu_height = (campuses.len() as u16 + 2).min(20);
    let menu_area = Rect {
        x: (area.width.saturating_sub(menu_width)) / 2,
        y: (area.height.saturating_sub(menu_height)) / 2,
        width: menu_width,
        height: menu_height,
    };

    let menu = List::new(menu_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Campus Filter (Space toggle, a all, Esc close)")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    f.render_widget(ratatui::widgets::Clear, menu_area);
    f.render_stateful_widget(menu, menu_area, state);
}

/// Render the help popup with the full key reference
pub fn render_help(f: &mut Frame) {
    let help_text = "\
Navigation
  ↑/↓            Move cursor
  PgUp/PgDn      Move by page
  Home/End       Jump to first/last row

Rows
  Space          Check/uncheck row (checked rows pin to the top)
  x              Export checked rows to the calendar

Filtering & sorting
  /              Search (Enter applies, Esc cancels)
  f              Campus filter (a includes all)
  c t i y d s e  Toggle sort: Class, Title, Instructor,
                 Day, Date, Start Time, End Time
  R              Reset search, sort, filter, and checks

Other
  r              Refresh schedule from the registrar
  ?              This help
  q              Quit";

    // Center the prompt
    let area = f.area();
    let prompt_width = 62;
    let prompt_height = 24;
    let prompt_area = Rect {
        x: (area.width.saturating_sub(prompt_width)) / 2,
        y: (area.height.saturating_sub(prompt_height)) / 2,
        width: prompt_width,
        height: prompt_height,
    };

    let prompt = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help (Esc to close)")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(ratatui::widgets::Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}
