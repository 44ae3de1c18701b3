//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use unicode_width::UnicodeWidthStr;

/// Fit text into a fixed-width table cell.
///
/// Pads with spaces on the right, or truncates with a trailing ellipsis
/// when the text is too wide. Widths are display columns (unicode width),
/// not bytes, so accented instructor names line up.
///
/// # Examples
/// ```
/// use examtui::logic::formatting::fit_cell;
///
/// assert_eq!(fit_cell("CSCI-185", 10), "CSCI-185  ");
/// assert_eq!(fit_cell("Computer Programming I", 10), "Computer …");
/// assert_eq!(fit_cell("exact", 5), "exact");
/// ```
pub fn fit_cell(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let text_width = text.width();
    if text_width <= width {
        let mut cell = text.to_string();
        cell.push_str(&" ".repeat(width - text_width));
        return cell;
    }

    // Take characters until one more would overflow the slot left of the
    // ellipsis, then pad (a wide char can undershoot by one column)
    let mut cell = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.to_string().width();
        if used + ch_width > width.saturating_sub(1) {
            break;
        }
        cell.push(ch);
        used += ch_width;
    }
    cell.push('…');
    used += 1;
    cell.push_str(&" ".repeat(width - used));
    cell
}
