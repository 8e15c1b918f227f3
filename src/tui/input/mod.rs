mod form;
mod list;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::store::StoreError;

use super::app::{App, Mode};

use form::handle_form;
use list::handle_list;

/// Process one input event. Store failures are returned to the caller,
/// which treats them as fatal.
pub fn handle_event(app: &mut App, event: Event) -> Result<(), StoreError> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Resize(width, height) => {
            app.resize(width, height);
            Ok(())
        }
        Event::Paste(text) => {
            handle_paste(app, &text);
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<(), StoreError> {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return Ok(());
    }
    match app.mode {
        Mode::List => handle_list(app, key),
        Mode::Edit | Mode::New => handle_form(app, key),
    }
}

/// Handle a bracketed paste: goes to the focused field, ignored in List mode.
pub fn handle_paste(app: &mut App, text: &str) {
    if !app.mode.is_form() {
        return;
    }
    if let Some(input) = app.focused_input_mut() {
        input.insert_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_helpers::*;
    use crossterm::event::{KeyEventState, KeyModifiers, ModifierKeyCode};

    #[test]
    fn resize_only_updates_viewport() {
        let (mut app, log) = app_with(&[("A", false), ("B", false)]);
        app.cursor = 1;
        handle_event(&mut app, Event::Resize(120, 40)).unwrap();
        let size = app.viewport.unwrap();
        assert_eq!((size.width, size.height), (120, 40));
        assert_eq!(app.cursor, 1);
        assert_eq!(app.mode, Mode::List);
        assert!(log.calls().is_empty());
    }

    #[test]
    fn resize_in_form_mode_keeps_buffers() {
        let (mut app, _log) = app_with(&[]);
        handle_key(&mut app, ch('n')).unwrap();
        handle_key(&mut app, ch('x')).unwrap();
        handle_event(&mut app, Event::Resize(50, 10)).unwrap();
        assert_eq!(app.mode, Mode::New);
        assert_eq!(app.title_input.value(), "x");
        assert!(app.title_input.is_focused());
    }

    #[test]
    fn key_release_is_ignored() {
        let (mut app, _log) = app_with(&[("A", false), ("B", false)]);
        let release = KeyEvent {
            code: KeyCode::Down,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_event(&mut app, Event::Key(release)).unwrap();
        assert_eq!(app.cursor, 0);
        handle_event(&mut app, Event::Key(key(KeyCode::Down))).unwrap();
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn bare_modifier_is_ignored() {
        let (mut app, _log) = app_with(&[]);
        handle_key(&mut app, ch('n')).unwrap();
        handle_key(
            &mut app,
            key(KeyCode::Modifier(ModifierKeyCode::LeftShift)),
        )
        .unwrap();
        assert_eq!(app.title_input.value(), "");
    }

    #[test]
    fn paste_goes_to_focused_field_only() {
        let (mut app, _log) = app_with(&[]);
        handle_event(&mut app, Event::Paste("ignored".into())).unwrap();
        assert_eq!(app.title_input.value(), "");

        handle_key(&mut app, ch('n')).unwrap();
        handle_event(&mut app, Event::Paste("Buy\nmilk".into())).unwrap();
        assert_eq!(app.title_input.value(), "Buy milk");
        assert_eq!(app.content_input.value(), "");

        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        handle_event(&mut app, Event::Paste("2 litres".into())).unwrap();
        assert_eq!(app.title_input.value(), "Buy milk");
        assert_eq!(app.content_input.value(), "2 litres");
    }
}
