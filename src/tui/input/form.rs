use crossterm::event::{KeyCode, KeyEvent};
use log::{debug, warn};

use crate::model::RecordFields;
use crate::store::StoreError;
use crate::tui::app::{App, Field, Mode, Status};

/// Keys while the Edit/New form is open. Esc, Tab and Enter belong to the
/// form; everything else goes to the focused field only.
pub(super) fn handle_form(app: &mut App, key: KeyEvent) -> Result<(), StoreError> {
    match key.code {
        KeyCode::Esc => cancel_form(app),
        KeyCode::Tab | KeyCode::BackTab => switch_focus(app),
        KeyCode::Enter => submit_form(app)?,
        _ => {
            if let Some(input) = app.focused_input_mut() {
                input.handle_key(key);
            }
        }
    }
    Ok(())
}

fn cancel_form(app: &mut App) {
    app.blur_fields();
    app.status = None;
    app.set_mode(Mode::List);
}

fn switch_focus(app: &mut App) {
    let next = match app.focused_field() {
        Some(Field::Title) => Field::Content,
        _ => Field::Title,
    };
    app.focus_field(next);
}

/// Save the form. An empty title keeps the form open and touches nothing.
fn submit_form(app: &mut App) -> Result<(), StoreError> {
    let mut fields = RecordFields::new(
        app.title_input.value(),
        app.content_input.value(),
        false,
    );
    if !fields.has_title() {
        return Ok(());
    }

    match app.mode {
        Mode::New => {
            let id = app.store.create(&fields)?;
            debug!("created todo {}", id);
            app.status = Some(Status::Created);
        }
        Mode::Edit => {
            let Some((id, completed)) = app.selected_record().map(|r| (r.id, r.completed)) else {
                warn!("edit form open without a selected todo; discarding");
                cancel_form(app);
                return Ok(());
            };
            fields.completed = completed;
            app.store.update(id, &fields)?;
            debug!("updated todo {}", id);
            app.status = Some(Status::Updated);
        }
        Mode::List => return Ok(()),
    }

    app.refresh()?;
    app.blur_fields();
    app.set_mode(Mode::List);
    Ok(())
}
