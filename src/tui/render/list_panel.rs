use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Record;
use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::util::unicode;

use super::helpers::panel_block;

const EMPTY_HINT: &str = "No todos yet. Press n to add one.";

/// Cells before the title: marker, space, checkbox, space
const ROW_PREFIX_WIDTH: usize = 6;

/// First visible row so that `cursor` lands inside a window of `height` rows
fn scroll_offset(cursor: usize, height: usize) -> usize {
    if height == 0 {
        0
    } else {
        (cursor + 1).saturating_sub(height)
    }
}

fn record_line(record: &Record, is_cursor: bool, theme: &Theme, width: usize) -> Line<'static> {
    let bg = if is_cursor {
        theme.cursor_bg
    } else {
        theme.background
    };
    let fg = if is_cursor { theme.cursor_fg } else { theme.text };
    let base = Style::default().fg(fg).bg(bg);
    let title_style = if record.completed {
        let style = base.add_modifier(Modifier::CROSSED_OUT);
        if is_cursor {
            style
        } else {
            style.fg(theme.completed)
        }
    } else {
        base
    };

    let marker = if is_cursor { ">" } else { " " };
    let prefix = format!("{} {} ", marker, record.checkbox());
    let title = unicode::truncate_to_width(&record.title, width.saturating_sub(ROW_PREFIX_WIDTH));
    let used = ROW_PREFIX_WIDTH + unicode::display_width(&title);

    let mut spans = vec![
        Span::styled(unicode::truncate_to_width(&prefix, width), base),
        Span::styled(title, title_style),
    ];
    // the cursor bar spans the full row
    if is_cursor && used < width {
        spans.push(Span::styled(" ".repeat(width - used), base));
    }
    Line::from(spans)
}

/// Left panel: one row per record, cursor row highlighted
pub fn render_list_panel(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let block = panel_block("Todos", theme, !app.mode.is_form());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if app.records.is_empty() {
        let hint = Paragraph::new(Span::styled(
            unicode::truncate_to_width(EMPTY_HINT, inner.width as usize),
            Style::default().fg(theme.dim).bg(theme.background),
        ));
        frame.render_widget(hint, inner);
        return;
    }

    let height = inner.height as usize;
    let width = inner.width as usize;
    let offset = scroll_offset(app.cursor, height);
    let lines: Vec<Line> = app
        .records
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(i, record)| record_line(record, i == app.cursor, theme, width))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
