use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{Record, RecordFields};
use crate::store::{RecordStore, SqliteStore, StoreError};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// One call made against the store, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    ListAll,
    Get(i64),
    Create(RecordFields),
    Update(i64, RecordFields),
    Delete(i64),
}

/// Shared view of a `RecordingStore`'s call log
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<StoreCall>>>,
    fail_next: Rc<Cell<bool>>,
}

impl CallLog {
    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.borrow().clone()
    }

    /// Calls that write to the store
    pub fn mutations(&self) -> Vec<StoreCall> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, StoreCall::ListAll | StoreCall::Get(_)))
            .collect()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Make the next store call fail with `NotFound(-1)`
    pub fn fail_next_call(&self) {
        self.fail_next.set(true);
    }

    fn push(&self, call: StoreCall) -> Result<(), StoreError> {
        self.calls.borrow_mut().push(call);
        if self.fail_next.replace(false) {
            return Err(StoreError::NotFound(-1));
        }
        Ok(())
    }
}

/// An in-memory SQLite store that records every call made through it
pub struct RecordingStore {
    inner: SqliteStore,
    log: CallLog,
}

impl RecordStore for RecordingStore {
    fn list_all(&self) -> Result<Vec<Record>, StoreError> {
        self.log.push(StoreCall::ListAll)?;
        self.inner.list_all()
    }

    fn get(&self, id: i64) -> Result<Record, StoreError> {
        self.log.push(StoreCall::Get(id))?;
        self.inner.get(id)
    }

    fn create(&mut self, fields: &RecordFields) -> Result<i64, StoreError> {
        self.log.push(StoreCall::Create(fields.clone()))?;
        self.inner.create(fields)
    }

    fn update(&mut self, id: i64, fields: &RecordFields) -> Result<(), StoreError> {
        self.log.push(StoreCall::Update(id, fields.clone()))?;
        self.inner.update(id, fields)
    }

    fn delete(&mut self, id: i64) -> Result<(), StoreError> {
        self.log.push(StoreCall::Delete(id))?;
        self.inner.delete(id)
    }
}

/// Build an App over a recording store seeded with `(title, completed)`
/// pairs. Seeding is not recorded; the initial load is cleared from the log.
pub fn app_with(todos: &[(&str, bool)]) -> (App, CallLog) {
    let mut inner = SqliteStore::open_in_memory().unwrap();
    for (title, completed) in todos {
        inner
            .create(&RecordFields::new(*title, format!("{} notes", title), *completed))
            .unwrap();
    }
    let log = CallLog::default();
    let store = RecordingStore {
        inner,
        log: log.clone(),
    };
    let app = App::new(Box::new(store)).unwrap();
    log.clear();
    (app, log)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}
