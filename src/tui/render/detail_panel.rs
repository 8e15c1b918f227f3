use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::model::Record;
use crate::tui::app::App;
use crate::tui::theme::Theme;

use super::helpers::panel_block;

const NO_SELECTION: &str = "Select a todo to view details";

fn field_lines(label: &str, value: String, theme: &Theme) -> [Line<'static>; 2] {
    let bg = theme.background;
    [
        Line::from(vec![
            Span::styled(
                format!("{}: ", label),
                Style::default()
                    .fg(theme.accent)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(value, Style::default().fg(theme.text_bright).bg(bg)),
        ]),
        Line::default(),
    ]
}

fn detail_lines(record: &Record, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    lines.extend(field_lines("Title", record.title.clone(), theme));
    lines.extend(field_lines("Content", record.content.clone(), theme));
    lines.extend(field_lines("Status", record.status_label().to_string(), theme));
    lines.extend(field_lines("Created", record.created_local(), theme));
    lines.pop();
    lines
}

/// Right panel in List mode: the selected record, or a prompt to pick one
pub fn render_detail_panel(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let block = panel_block("Todo Details", theme, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match app.selected_record() {
        Some(record) => detail_lines(record, theme),
        None => vec![Line::from(Span::styled(
            NO_SELECTION,
            Style::default().fg(theme.dim).bg(theme.background),
        ))],
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
