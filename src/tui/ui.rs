use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate};

use crate::core::state::App;
use crate::tui::text::{display_width, pad_right, single_line, truncate_to_width};
use crate::tui::theme::Theme;

pub const TITLE: &str = " What would you like to do? ";
pub const TOO_NARROW: &str = "Error: Terminal width is too small";

const CURSOR_GLYPH: &str = ">";
const CHECKED_GLYPH: &str = "x";
/// Cells taken by `"> [x] "` in front of an item label.
const ITEM_PREFIX_WIDTH: usize = 6;
/// Cells taken by `"> "` in front of a button label.
const BUTTON_PREFIX_WIDTH: usize = 2;

/// Builds the whole frame for `app` as newline-separated, possibly styled text.
///
/// Pure: the same state and theme always give the same string. When the
/// terminal is unknown or too narrow for the title, returns [`TOO_NARROW`].
pub fn render_frame(app: &App, theme: &Theme) -> String {
    let Some(size) = app.terminal_size else {
        return TOO_NARROW.to_string();
    };
    let border_width = usize::from(size.width).saturating_sub(2);
    let title_width = display_width(TITLE);
    if border_width < title_width {
        return TOO_NARROW.to_string();
    }

    let glyphs = &theme.glyphs;
    let edge = theme.border;

    // Both runs use the same truncated half; an odd remainder is left off.
    let run = (border_width - title_width) / 2;
    let top_line = format!(
        "{}{}{}{}{}",
        edge(glyphs.top_left),
        edge(&glyphs.top.repeat(run)),
        TITLE,
        edge(&glyphs.top.repeat(run)),
        edge(glyphs.top_right),
    );
    let bottom_line = format!(
        "{}{}{}",
        edge(glyphs.bottom_left),
        edge(&glyphs.bottom.repeat(border_width)),
        edge(glyphs.bottom_right),
    );

    let left_width = (border_width - 1) / 2;
    let right_width = border_width - left_width - 1;

    let left_column = item_lines(app, theme, left_width);
    let right_column = button_lines(app, theme, right_width);

    let row_count = left_column.len().max(right_column.len());
    let mut lines = Vec::with_capacity(row_count + 3);
    lines.push(top_line);
    for i in 0..row_count {
        let left = left_column.get(i).map(String::as_str).unwrap_or("");
        let right = right_column.get(i).map(String::as_str).unwrap_or("");
        lines.push(format!(
            "{}{} {}{}",
            edge(glyphs.left),
            pad_right(left, left_width),
            pad_right(right, right_width),
            edge(glyphs.right),
        ));
    }
    lines.push(response_line(app, theme, border_width));
    lines.push(bottom_line);

    lines.join("\n")
}

fn cursor_marker(app: &App, theme: &Theme, row: usize) -> String {
    if app.cursor == row {
        (theme.cursor)(CURSOR_GLYPH)
    } else {
        " ".to_string()
    }
}

fn item_lines(app: &App, theme: &Theme, width: usize) -> Vec<String> {
    let label_budget = width.saturating_sub(ITEM_PREFIX_WIDTH);
    app.items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let check = if app.is_checked(i) {
                (theme.checked)(CHECKED_GLYPH)
            } else {
                " ".to_string()
            };
            format!(
                "{} [{}] {}",
                cursor_marker(app, theme, i),
                check,
                (theme.item)(truncate_to_width(&item.label, label_budget)),
            )
        })
        .collect()
}

fn button_lines(app: &App, theme: &Theme, width: usize) -> Vec<String> {
    let label_budget = width.saturating_sub(BUTTON_PREFIX_WIDTH);
    app.buttons
        .iter()
        .enumerate()
        .map(|(i, button)| {
            format!(
                "{} {}",
                cursor_marker(app, theme, app.items.len() + i),
                (theme.button)(truncate_to_width(&button.label, label_budget)),
            )
        })
        .collect()
}

/// The reserved row under the columns: a bare side border until a request
/// has completed, then the latest result on one line.
fn response_line(app: &App, theme: &Theme, border_width: usize) -> String {
    let glyphs = &theme.glyphs;
    match &app.last_response {
        None => (theme.border)(glyphs.left),
        Some(text) => {
            let flat = single_line(text);
            format!(
                "{}{}{}",
                (theme.border)(glyphs.left),
                pad_right(truncate_to_width(&flat, border_width), border_width),
                (theme.border)(glyphs.right),
            )
        }
    }
}

/// Writes a rendered frame from the top-left corner, clearing whatever the
/// previous frame left behind.
pub fn draw<W: Write>(out: &mut W, frame: &str) -> io::Result<()> {
    queue!(out, BeginSynchronizedUpdate)?;
    for (row, line) in (0u16..).zip(frame.lines()) {
        queue!(
            out,
            MoveTo(0, row),
            Print(line),
            Clear(ClearType::UntilNewLine)
        )?;
    }
    queue!(out, Clear(ClearType::FromCursorDown), EndSynchronizedUpdate)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::test_app;
    use crate::tui::text::strip_styles;

    fn sized_app(width: u16) -> App {
        let mut app = test_app();
        let resize = Action::Resize { width, height: 24 };
        update(&mut app, resize);
        app
    }

    fn plain_lines(app: &App) -> Vec<String> {
        render_frame(app, &Theme::plain())
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_unknown_size_renders_fallback() {
        let app = test_app();
        assert_eq!(render_frame(&app, &Theme::plain()), TOO_NARROW);
    }

    #[test]
    fn test_narrow_terminal_renders_fallback_regardless_of_state() {
        let mut app = sized_app(5);
        assert_eq!(render_frame(&app, &Theme::colored()), TOO_NARROW);

        app.cursor = 4;
        app.selected.insert(1);
        app.last_response = Some("ok".to_string());
        assert_eq!(render_frame(&app, &Theme::colored()), TOO_NARROW);
    }

    #[test]
    fn test_minimum_width_is_title_plus_borders() {
        assert_eq!(render_frame(&sized_app(29), &Theme::plain()), TOO_NARROW);

        let lines = plain_lines(&sized_app(30));
        assert_eq!(lines[0], format!("╭{}╮", TITLE));
    }

    #[test]
    fn test_frame_at_width_40() {
        let mut app = sized_app(40);
        app.selected.insert(2);
        let lines = plain_lines(&app);

        // top, 3 rows, reserved row, bottom
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], format!("╭─────{}─────╮", TITLE));
        assert_eq!(
            lines[1],
            format!("│{:<18} {:<19}│", "> [ ] Tea", "  Submit Option 1")
        );
        assert_eq!(
            lines[2],
            format!("│{:<18} {:<19}│", "  [ ] Coffee", "  Submit Option 2")
        );
        assert_eq!(
            lines[3],
            format!("│{:<18} {:<19}│", "  [x] Milk", "  Submit Option 3")
        );
        assert_eq!(lines[4], "│");
        assert_eq!(lines[5], format!("╰{}╯", "─".repeat(38)));
    }

    #[test]
    fn test_cursor_on_button_marks_only_that_button() {
        let mut app = sized_app(40);
        app.cursor = 4;
        let lines = plain_lines(&app);

        assert!(lines[1..4].iter().all(|l| !l.starts_with("│>")));
        assert!(lines[2].ends_with("> Submit Option 2  │"));
        assert!(!lines[1].contains("> Submit"));
        assert!(!lines[3].contains("> Submit"));
    }

    #[test]
    fn test_odd_remainder_leaves_title_row_one_short() {
        let lines = plain_lines(&sized_app(41));
        assert_eq!(display_width(&lines[0]), 40);
        assert_eq!(display_width(&lines[1]), 41);
        assert_eq!(display_width(&lines[5]), 41);
    }

    #[test]
    fn test_styled_rows_measure_exact_width() {
        for width in [30u16, 31, 57, 80, 200] {
            let mut app = sized_app(width);
            app.cursor = 1;
            app.selected.insert(0);
            app.selected.insert(1);
            let frame = render_frame(&app, &Theme::colored());
            let lines: Vec<&str> = frame.lines().collect();
            let border_width = usize::from(width) - 2;

            for row in &lines[1..4] {
                let plain = strip_styles(row);
                assert_eq!(display_width(row), usize::from(width));
                let inner = plain.trim_start_matches('│').trim_end_matches('│');
                assert_eq!(display_width(inner), border_width);
            }
            assert_eq!(display_width(lines[5]), usize::from(width));
        }
    }

    #[test]
    fn test_long_labels_are_cut_to_their_column() {
        let lines = plain_lines(&sized_app(30));
        // left column 13 cells, right column 14 cells
        assert_eq!(
            lines[1],
            format!("│{:<13} {:<14}│", "> [ ] Tea", "  Submit Optio")
        );
        assert_eq!(display_width(&lines[2]), 30);
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut app = sized_app(64);
        app.cursor = 3;
        app.selected.insert(1);
        let theme = Theme::colored();
        assert_eq!(render_frame(&app, &theme), render_frame(&app, &theme));
    }

    #[test]
    fn test_response_fills_reserved_row() {
        let mut app = sized_app(40);
        update(
            &mut app,
            Action::ActionCompleted("{\"status\":\n\"ok\"}".to_string()),
        );
        let lines = plain_lines(&app);
        assert_eq!(lines[4], format!("│{:<38}│", "{\"status\": \"ok\"}"));
    }

    #[test]
    fn test_long_response_is_truncated() {
        let mut app = sized_app(30);
        app.last_response = Some("POST request failed: error sending request".to_string());
        let lines = plain_lines(&app);
        assert_eq!(lines[4], "│POST request failed: error s│");
    }

    #[test]
    fn test_emoji_presentation_response_keeps_frame_width() {
        let mut app = sized_app(30);
        app.last_response = Some(format!("{}\u{2764}\u{FE0F}", "a".repeat(27)));
        let lines = plain_lines(&app);
        assert_eq!(display_width(&lines[4]), 30);
        assert_eq!(lines[4], format!("│{}\u{2764}│", "a".repeat(27)));
    }

    #[test]
    fn test_draw_writes_every_line() {
        let app = sized_app(40);
        let frame = render_frame(&app, &Theme::plain());
        let mut out = Vec::new();
        draw(&mut out, &frame).unwrap();
        let written = String::from_utf8(out).unwrap();
        for line in frame.lines() {
            assert!(written.contains(line));
        }
    }
}
