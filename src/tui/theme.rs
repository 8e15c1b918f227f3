use log::warn;
use ratatui::style::Color;
use ratatui::widgets::BorderType;

use crate::model::{BorderStyle, UiConfig};

/// Colors and border style used by every renderer. Built once from config
/// and passed into `render`; nothing reads styling from globals.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    /// Foreground of the cursor row
    pub cursor_fg: Color,
    /// Background of the cursor row
    pub cursor_bg: Color,
    pub dim: Color,
    /// Titles of completed todos
    pub completed: Color,
    pub border: Color,
    /// Border of the panel that has input focus
    pub border_active: Color,
    /// Panel headings and field labels
    pub accent: Color,
    /// "created" / "updated" confirmations
    pub status: Color,
    pub border_type: BorderType,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Reset,
            text: Color::Rgb(0xDD, 0xDD, 0xDD),
            text_bright: Color::Rgb(0xFA, 0xFA, 0xFA),
            cursor_fg: Color::Rgb(0xFA, 0xFA, 0xFA),
            cursor_bg: Color::Rgb(0x7D, 0x56, 0xF4),
            dim: Color::Rgb(0x6C, 0x6C, 0x6C),
            completed: Color::Rgb(0x88, 0x88, 0x88),
            border: Color::Rgb(0x58, 0x58, 0x58),
            border_active: Color::Rgb(0x7D, 0x56, 0xF4),
            accent: Color::Rgb(0xB0, 0x9C, 0xFF),
            status: Color::Rgb(0x44, 0xFF, 0x88),
            border_type: BorderType::Rounded,
        }
    }
}

/// Parse a hex color string like "#7D56F4" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

fn border_type(style: BorderStyle) -> BorderType {
    match style {
        BorderStyle::Rounded => BorderType::Rounded,
        BorderStyle::Plain => BorderType::Plain,
        BorderStyle::Double => BorderType::Double,
        BorderStyle::Thick => BorderType::Thick,
    }
}

impl Theme {
    /// Create a theme from the `[ui]` config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme {
            border_type: border_type(ui.border),
            ..Theme::default()
        };

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                warn!("ignoring color {}: {:?} is not #RRGGBB", key, value);
                continue;
            };
            let slot = match key.as_str() {
                "background" => &mut theme.background,
                "text" => &mut theme.text,
                "text_bright" => &mut theme.text_bright,
                "cursor_fg" => &mut theme.cursor_fg,
                "cursor_bg" => &mut theme.cursor_bg,
                "dim" => &mut theme.dim,
                "completed" => &mut theme.completed,
                "border" => &mut theme.border,
                "border_active" => &mut theme.border_active,
                "accent" => &mut theme.accent,
                "status" => &mut theme.status,
                _ => {
                    warn!("ignoring unknown color slot {}", key);
                    continue;
                }
            };
            *slot = color;
        }

        theme
    }
}
