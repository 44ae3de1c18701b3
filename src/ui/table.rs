use crate::logic::datetime::weekday_name;
use crate::logic::formatting::fit_cell;
use crate::logic::normalize::Row;
use crate::logic::pinning::Selection;
use crate::logic::sorting::{ColumnKey, SortSpec};
use crate::App;
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState,
    },
    Frame,
};

/// Display columns in table order. Course title is the flexible one.
/// Campus is not a column; the cursor row's campus shows in the status bar.
const COLUMNS: [ColumnKey; 8] = [
    ColumnKey::ClassCode,
    ColumnKey::CourseTitle,
    ColumnKey::Instructor,
    ColumnKey::Day,
    ColumnKey::Date,
    ColumnKey::StartTime,
    ColumnKey::EndTime,
    ColumnKey::Room,
];

const CHECK_WIDTH: usize = 3;
const MIN_TITLE_WIDTH: usize = 14;

/// Fixed width for each column except the flexible course title.
///
/// Wide enough for the header label plus a sort arrow and precedence
/// digit, so the sort indicator never gets clipped off.
fn fixed_width(column: ColumnKey) -> usize {
    match column {
        ColumnKey::ClassCode => 14,
        ColumnKey::CourseTitle => 0, // flexible
        ColumnKey::Instructor => 18,
        ColumnKey::Day => 9,
        ColumnKey::Date => 10,
        ColumnKey::StartTime => 12,
        ColumnKey::EndTime => 12,
        ColumnKey::Room => 10,
        ColumnKey::Campus => 0, // never displayed
    }
}

/// Per-column display widths for the current terminal size.
fn column_widths(inner_width: u16) -> Vec<(ColumnKey, usize)> {
    // checkbox + highlight symbol + one-space gaps between cells
    let fixed: usize = COLUMNS.iter().map(|c| fixed_width(*c)).sum();
    let overhead = 2 + CHECK_WIDTH + COLUMNS.len();
    let title_width = (inner_width as usize)
        .saturating_sub(fixed + overhead)
        .max(MIN_TITLE_WIDTH);

    COLUMNS
        .iter()
        .map(|&column| {
            let width = if column == ColumnKey::CourseTitle {
                title_width
            } else {
                fixed_width(column)
            };
            (column, width)
        })
        .collect()
}

/// Header label with the column's sort indicator.
///
/// Active sort columns get an arrow; when several keys are stacked the
/// 1-based precedence digit follows it, e.g. "Date↓2".
fn header_text(column: ColumnKey, spec: &SortSpec) -> String {
    match spec.direction_of(column) {
        Some(direction) => {
            if spec.keys().len() > 1 {
                // precedence_of is Some whenever direction_of is
                let precedence = spec.precedence_of(column).unwrap_or(0);
                format!("{}{}{}", column.label(), direction.arrow(), precedence)
            } else {
                format!("{}{}", column.label(), direction.arrow())
            }
        }
        None => column.label().to_string(),
    }
}

/// Build the column header line.
///
/// Starts with two spaces to stay aligned with the "> " highlight symbol
/// on the rows below.
fn header_line(spec: &SortSpec, widths: &[(ColumnKey, usize)]) -> Line<'static> {
    let mut spans = vec![Span::raw("  "), Span::raw(" ".repeat(CHECK_WIDTH))];

    for &(column, width) in widths {
        spans.push(Span::raw(" "));
        let style = if spec.direction_of(column).is_some() {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        spans.push(Span::styled(fit_cell(&header_text(column, spec), width), style));
    }

    Line::from(spans)
}

fn cell_text(row: &Row, column: ColumnKey) -> String {
    match column {
        ColumnKey::ClassCode => row.class_code.clone(),
        ColumnKey::CourseTitle => row.course_title.clone(),
        ColumnKey::Instructor => row.instructor.clone(),
        // Blank Day cells fall back to the weekday of the exam date
        ColumnKey::Day => {
            if row.day.is_empty() {
                weekday_name(&row.date).unwrap_or("").to_string()
            } else {
                row.day.clone()
            }
        }
        ColumnKey::Date => row.date.clone(),
        ColumnKey::StartTime => row.start_time.clone(),
        ColumnKey::EndTime => row.end_time.clone(),
        ColumnKey::Room => row.room.clone(),
        ColumnKey::Campus => row.campus.clone(),
    }
}

/// Build one table row line: checkbox then the padded cells.
fn build_row_line(
    row: &Row,
    selection: &Selection,
    widths: &[(ColumnKey, usize)],
) -> Line<'static> {
    let mut spans = Vec::with_capacity(widths.len() * 2 + 1);

    if selection.contains(&row.id()) {
        spans.push(Span::styled(
            "[x]",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::raw("[ ]"));
    }

    for &(column, width) in widths {
        spans.push(Span::raw(" "));
        spans.push(Span::raw(fit_cell(&cell_text(row, column), width)));
    }

    Line::from(spans)
}

fn empty_message(app: &App) -> &'static str {
    if app.model.schedule.loading {
        "Loading schedule..."
    } else if !app.model.ui.search_query.is_empty()
        || !app.model.schedule.campus_filter.all_included()
    {
        "No exams match the current filters"
    } else {
        "No exam rows"
    }
}

/// Render the exam table: a fixed header line over a scrollable row list.
pub fn render_table(f: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default().borders(Borders::ALL).title(" Schedule ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height < 2 || inner.width == 0 {
        return;
    }

    let header_area = Rect { height: 1, ..inner };
    let rows_area = Rect {
        y: inner.y + 1,
        height: inner.height - 1,
        ..inner
    };

    // Page size for PageUp/PageDown follows the visible row count
    app.visible_rows = rows_area.height as usize;

    let widths = column_widths(inner.width);
    f.render_widget(
        Paragraph::new(header_line(&app.model.table.sort_spec, &widths)),
        header_area,
    );

    let rows = &app.model.table.display_rows;
    if rows.is_empty() {
        let placeholder = Paragraph::new(empty_message(app))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(placeholder, rows_area);
        return;
    }

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(build_row_line(row, &app.model.table.selection, &widths)))
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    // Create temporary ListState for rendering; the cursor index in the
    // model is the source of truth
    let mut state = ListState::default();
    state.select(app.model.table.cursor);
    f.render_stateful_widget(list, rows_area, &mut state);

    // Render scrollbar if the table is longer than the visible area
    let viewport_height = rows_area.height as usize;
    let total_rows = rows.len();

    if total_rows > viewport_height {
        let mut scrollbar_state = ScrollbarState::new(total_rows.saturating_sub(viewport_height))
            .position(state.offset());

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█");

        f.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                horizontal: 0,
                vertical: 1,
            }),
            &mut scrollbar_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_to_text(line: &Line) -> String {
        line.spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect::<String>()
    }

    fn sample_row() -> Row {
        Row {
            class_code: "CSCI-185-M01".to_string(),
            course_title: "Computer Programming I".to_string(),
            instructor: "Garcia".to_string(),
            day: "Wednesday".to_string(),
            date: "12/10/2025".to_string(),
            start_time: "9:00 AM".to_string(),
            end_time: "11:00 AM".to_string(),
            room: "HSH 208".to_string(),
            campus: "New York City".to_string(),
        }
    }

    #[test]
    fn test_header_text_plain_when_unsorted() {
        let spec = SortSpec::new();
        assert_eq!(header_text(ColumnKey::Date, &spec), "Date");
    }

    #[test]
    fn test_header_text_single_key_shows_arrow_only() {
        let mut spec = SortSpec::new();
        spec.toggle(ColumnKey::Date);
        assert_eq!(header_text(ColumnKey::Date, &spec), "Date↑");

        spec.toggle(ColumnKey::Date);
        assert_eq!(header_text(ColumnKey::Date, &spec), "Date↓");
    }

    #[test]
    fn test_header_text_multi_key_shows_precedence() {
        let mut spec = SortSpec::new();
        spec.toggle(ColumnKey::Date);
        spec.toggle(ColumnKey::StartTime);

        assert_eq!(header_text(ColumnKey::Date, &spec), "Date↑1");
        assert_eq!(header_text(ColumnKey::StartTime, &spec), "Start Time↑2");
        assert_eq!(header_text(ColumnKey::Instructor, &spec), "Instructor");
    }

    #[test]
    fn test_header_line_contains_all_labels() {
        let spec = SortSpec::new();
        let widths = column_widths(140);
        let text = spans_to_text(&header_line(&spec, &widths));

        for column in COLUMNS {
            assert!(
                text.contains(column.label()),
                "missing label {:?} in {:?}",
                column.label(),
                text
            );
        }
    }

    #[test]
    fn test_row_line_checked_and_unchecked() {
        let row = sample_row();
        let widths = column_widths(140);

        let mut selection = Selection::new();
        let unchecked = build_row_line(&row, &selection, &widths);
        let text = spans_to_text(&unchecked);
        assert!(text.starts_with("[ ]"));
        assert!(text.contains("CSCI-185-M01"));

        selection.toggle(row.id());
        let checked = build_row_line(&row, &selection, &widths);
        let text = spans_to_text(&checked);
        assert!(text.starts_with("[x]"));
    }

    #[test]
    fn test_row_line_has_no_campus_cell() {
        let row = sample_row();
        let widths = column_widths(140);
        let line = build_row_line(&row, &Selection::new(), &widths);
        assert!(
            !spans_to_text(&line).contains("New York City"),
            "campus belongs to the status bar, not the table"
        );
    }

    #[test]
    fn test_row_line_day_falls_back_to_weekday() {
        let mut row = sample_row();
        row.day = String::new();
        // 12/10/2025 is a Wednesday
        let widths = column_widths(140);
        let line = build_row_line(&row, &Selection::new(), &widths);
        assert!(spans_to_text(&line).contains("Wednesday"));
    }

    #[test]
    fn test_row_line_blank_day_and_date_shows_empty_cell() {
        let mut row = sample_row();
        row.day = String::new();
        row.date = "TBD".to_string();
        let widths = column_widths(140);
        let line = build_row_line(&row, &Selection::new(), &widths);
        assert!(!spans_to_text(&line).contains("Monday"));
    }

    #[test]
    fn test_column_widths_title_flexes_with_terminal() {
        let narrow = column_widths(100);
        let wide = column_widths(200);

        let title_of = |widths: &[(ColumnKey, usize)]| {
            widths
                .iter()
                .find(|(c, _)| *c == ColumnKey::CourseTitle)
                .map(|(_, w)| *w)
                .unwrap_or(0)
        };

        assert!(title_of(&wide) > title_of(&narrow));
        assert!(title_of(&narrow) >= MIN_TITLE_WIDTH);
    }
}
