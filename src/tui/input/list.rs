use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;

use crate::store::StoreError;
use crate::tui::app::{App, Field, Mode};

pub(super) fn handle_list(app: &mut App, key: KeyEvent) -> Result<(), StoreError> {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) => app.should_quit = true,
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => app.should_quit = true,
        (_, KeyCode::Up) => app.cursor = app.cursor.saturating_sub(1),
        (_, KeyCode::Down) => move_down(app),
        (_, KeyCode::Enter) => open_for_edit(app),
        (_, KeyCode::Char('n')) => start_new(app),
        (_, KeyCode::Char(' ')) => toggle_completed(app)?,
        (_, KeyCode::Char('d')) => delete_at_cursor(app)?,
        _ => {}
    }
    Ok(())
}

fn move_down(app: &mut App) {
    if app.cursor + 1 < app.records.len() {
        app.cursor += 1;
    }
}

/// Open the record under the cursor in the edit form
fn open_for_edit(app: &mut App) {
    let Some(record) = app.cursor_record() else {
        return;
    };
    let (title, content) = (record.title.clone(), record.content.clone());
    app.selected = Some(app.cursor);
    app.title_input.set_value(&title);
    app.content_input.set_value(&content);
    app.focus_field(Field::Title);
    app.set_mode(Mode::Edit);
}

/// Open an empty form for a new record
fn start_new(app: &mut App) {
    app.selected = None;
    app.title_input.clear();
    app.content_input.clear();
    app.focus_field(Field::Title);
    app.set_mode(Mode::New);
}

/// Flip `completed` on the record under the cursor, writing the whole record back
fn toggle_completed(app: &mut App) -> Result<(), StoreError> {
    let Some(record) = app.cursor_record() else {
        return Ok(());
    };
    let id = record.id;
    let mut fields = record.to_fields();
    fields.completed = !fields.completed;
    debug!("toggle todo {} -> completed={}", id, fields.completed);
    app.store.update(id, &fields)?;
    app.refresh()
}

/// Delete the record under the cursor. The selection follows the record it
/// pointed at, or is cleared if that record is the one deleted.
fn delete_at_cursor(app: &mut App) -> Result<(), StoreError> {
    let Some(record) = app.cursor_record() else {
        return Ok(());
    };
    let id = record.id;
    let index = app.cursor;
    debug!("delete todo {}", id);
    app.store.delete(id)?;
    app.selected = match app.selected {
        Some(s) if s == index => None,
        Some(s) if s > index => Some(s - 1),
        other => other,
    };
    // refresh re-clamps the cursor when the last row went away
    app.refresh()
}
