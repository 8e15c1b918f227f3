use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Block;
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::text_input::TextInput;
use crate::tui::theme::Theme;
use crate::util::unicode;

/// A bordered panel with a heading in the top border
pub(super) fn panel_block<'a>(title: &'a str, theme: &Theme, active: bool) -> Block<'a> {
    let border = if active {
        theme.border_active
    } else {
        theme.border
    };
    Block::bordered()
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(theme.background))
}

/// First byte of the visible window so the caret stays within `width` cells
fn scroll_start(value: &str, caret: usize, width: usize) -> usize {
    let budget = width.saturating_sub(1);
    let mut start = 0;
    while unicode::display_width(&value[start..caret]) > budget {
        match unicode::next_grapheme_boundary(value, start) {
            Some(next) if next <= caret => start = next,
            _ => break,
        }
    }
    start
}

/// Spans for a single-line input `width` cells wide. A focused input shows
/// its caret as a reversed cell; an empty one shows its placeholder dimmed.
pub(super) fn input_spans(input: &TextInput, theme: &Theme, width: usize) -> Vec<Span<'static>> {
    let text_style = Style::default().fg(theme.text_bright).bg(theme.background);
    let caret_style = text_style.add_modifier(Modifier::REVERSED);
    let placeholder_style = Style::default().fg(theme.dim).bg(theme.background);

    if width == 0 {
        return Vec::new();
    }

    let value = input.value();
    if value.is_empty() {
        let mut spans = Vec::new();
        let mut rest = input.placeholder();
        let mut used = 0;
        if input.is_focused() {
            let first = rest.graphemes(true).next().unwrap_or(" ");
            spans.push(Span::styled(
                first.to_string(),
                placeholder_style.add_modifier(Modifier::REVERSED),
            ));
            used = unicode::display_width(first);
            rest = &rest[first.len().min(rest.len())..];
        }
        let room = width.saturating_sub(used);
        spans.push(Span::styled(
            unicode::truncate_to_width(rest, room),
            placeholder_style,
        ));
        return spans;
    }

    if !input.is_focused() {
        return vec![Span::styled(
            unicode::truncate_to_width(value, width),
            text_style,
        )];
    }

    let caret = input.caret();
    let start = scroll_start(value, caret, width);
    let before = &value[start..caret];
    let at = unicode::next_grapheme_boundary(value, caret).unwrap_or(value.len());
    let under = if at > caret { &value[caret..at] } else { " " };

    let mut spans = vec![
        Span::styled(before.to_string(), text_style),
        Span::styled(under.to_string(), caret_style),
    ];
    let used = unicode::display_width(before) + unicode::display_width(under);
    let mut after = String::new();
    let mut after_width = 0;
    for g in value[at..].graphemes(true) {
        let gw = unicode::display_width(g);
        if used + after_width + gw > width {
            break;
        }
        after_width += gw;
        after.push_str(g);
    }
    if !after.is_empty() {
        spans.push(Span::styled(after, text_style));
    }
    spans
}
