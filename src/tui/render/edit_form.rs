use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::tui::text_input::TextInput;
use crate::tui::theme::Theme;

use super::helpers::{input_spans, panel_block};

fn label_line(label: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        format!("{}:", label),
        Style::default()
            .fg(theme.accent)
            .bg(theme.background)
            .add_modifier(Modifier::BOLD),
    ))
}

/// `> ` gutter marks the focused field
fn input_line(input: &TextInput, theme: &Theme, width: usize) -> Line<'static> {
    let gutter = if input.is_focused() { "> " } else { "  " };
    let mut spans = vec![Span::styled(
        gutter,
        Style::default().fg(theme.accent).bg(theme.background),
    )];
    spans.extend(input_spans(input, theme, width.saturating_sub(2)));
    Line::from(spans)
}

/// Right panel in Edit/New mode
pub fn render_edit_form(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let heading = match app.mode {
        Mode::New => "New Todo",
        _ => "Edit Todo",
    };
    let block = panel_block(heading, theme, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let status = app
        .status
        .map(|s| s.to_string())
        .unwrap_or_default();
    let lines = vec![
        label_line("Title", theme),
        input_line(&app.title_input, theme, width),
        Line::default(),
        label_line("Content", theme),
        input_line(&app.content_input, theme, width),
        Line::default(),
        Line::from(Span::styled(
            status,
            Style::default().fg(theme.status).bg(theme.background),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
