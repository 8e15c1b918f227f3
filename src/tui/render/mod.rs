mod detail_panel;
mod edit_form;
mod footer;
mod helpers;
mod list_panel;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};

use crate::model::UiConfig;

use super::app::App;
use super::theme::Theme;

/// Rows taken by the footer, borders included
const FOOTER_HEIGHT: u16 = 3;

/// Everything rendering needs besides the app state itself
#[derive(Debug, Clone)]
pub struct ViewConfig {
    pub theme: Theme,
    /// Share of the main row given to the list panel
    pub list_percent: u16,
}

impl ViewConfig {
    pub fn from_config(ui: &UiConfig) -> Self {
        ViewConfig {
            theme: Theme::from_config(ui),
            list_percent: ui.list_percent(),
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig::from_config(&UiConfig::default())
    }
}

/// Draw one frame from the current state. Reads `app` only.
pub fn render(frame: &mut Frame, app: &App, view: &ViewConfig) {
    let theme = &view.theme;
    let bg_style = Style::default().bg(theme.background);

    let Some(size) = app.viewport else {
        frame.render_widget(
            Paragraph::new("Loading...").style(bg_style.fg(theme.text)),
            frame.area(),
        );
        return;
    };

    let area = frame
        .area()
        .intersection(Rect::new(0, 0, size.width, size.height));
    frame.render_widget(Block::default().style(bg_style), area);
    let area = area.inner(Margin::new(1, 0));

    let [main, footer_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);
    let [list_area, detail_area] = Layout::horizontal([
        Constraint::Percentage(view.list_percent),
        Constraint::Percentage(100 - view.list_percent),
    ])
    .areas(main);

    list_panel::render_list_panel(frame, app, theme, list_area);
    if app.mode.is_form() {
        edit_form::render_edit_form(frame, app, theme, detail_area);
    } else {
        detail_panel::render_detail_panel(frame, app, theme, detail_area);
    }
    footer::render_footer(frame, app, theme, footer_area);
}
