use crate::model::Model;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the bottom status bar
///
/// Shows row counts, the cursor row's campus, checked count, the active
/// sort order, and the load metrics of the last fetch (time, cache hit).
pub fn render_status_bar(f: &mut Frame, area: Rect, model: &Model) {
    let mut metrics = Vec::new();

    metrics.push(format!(
        "Exams: {}/{}",
        model.table.display_rows.len(),
        model.schedule.all_rows.len()
    ));

    // Campus lives here instead of a table column
    if let Some(row) = model.table.cursor_row() {
        if !row.campus.is_empty() {
            metrics.push(format!("Campus: {}", row.campus));
        }
    }

    if !model.table.selection.is_empty() {
        metrics.push(format!("Checked: {}", model.table.selection.len()));
    }

    metrics.push(format!("Sort: {}", model.table.sort_spec.describe()));

    if !model.schedule.campus_filter.all_included() {
        let campuses = model.schedule.campus_filter.campuses();
        let included = campuses.iter().filter(|(_, on)| *on).count();
        metrics.push(format!("Campuses: {}/{}", included, campuses.len()));
    }

    if let Some(load_time) = model.schedule.last_load_time_ms {
        metrics.push(format!("Load: {}ms", load_time));
    }

    if let Some(cache_hit) = model.schedule.last_load_from_cache {
        metrics.push(format!("Cache: {}", if cache_hit { "HIT" } else { "MISS" }));
    }

    let status_line = metrics.join(" | ");

    // Parse status_line and color the labels (before colons)
    let mut status_spans: Vec<Span> = vec![];
    for (idx, part) in status_line.split(" | ").enumerate() {
        if idx > 0 {
            status_spans.push(Span::raw(" | "));
        }

        if let Some(colon_pos) = part.find(':') {
            // Split on first colon to separate label from value
            let label = &part[..=colon_pos];
            let value = &part[colon_pos + 1..];
            status_spans.push(Span::styled(
                label.to_string(),
                Style::default().fg(Color::Yellow),
            ));
            status_spans.push(Span::raw(value.to_string()));
        } else {
            status_spans.push(Span::raw(part.to_string()));
        }
    }

    let status_bar = Paragraph::new(Line::from(status_spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}
