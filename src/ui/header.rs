use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const APP_TITLE: &str = "NYIT Final Exams Schedule - Fall 2025";

/// Render the title bar at the top of the screen
pub fn render_header(f: &mut Frame, area: Rect, loading: bool) {
    let mut spans = vec![Span::styled(
        APP_TITLE,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if loading {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Loading...",
            Style::default().fg(Color::Yellow),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}
