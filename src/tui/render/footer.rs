use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::util::unicode;

const LIST_KEYS: &str = "↑↓: navigate | enter: edit | n: new | space: toggle | d: delete | q: quit";
const FORM_KEYS: &str = "tab: switch field | enter: save | esc: cancel";

/// Bottom bar: key help for the current mode, led by the status message
/// when there is one
pub fn render_footer(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let block = Block::bordered()
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let mut spans = Vec::new();
    let mut used = 0;
    if !app.mode.is_form()
        && let Some(status) = app.status
    {
        let text = format!("{}  ", status);
        used = unicode::display_width(&text);
        spans.push(Span::styled(
            text,
            Style::default()
                .fg(theme.status)
                .bg(theme.background)
                .add_modifier(Modifier::BOLD),
        ));
    }
    let keys = if app.mode.is_form() {
        FORM_KEYS
    } else {
        LIST_KEYS
    };
    spans.push(Span::styled(
        unicode::truncate_to_width(keys, width.saturating_sub(used)),
        Style::default().fg(theme.dim).bg(theme.background),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}
