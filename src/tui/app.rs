use std::fmt;
use std::io;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{debug, error, info};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Size;

use crate::model::{CONTENT_MAX_CHARS, Record, TITLE_MAX_CHARS};
use crate::store::{RecordStore, StoreError};

use super::input;
use super::render::{self, ViewConfig};
use super::text_input::TextInput;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the list
    List,
    /// Editing the selected record
    Edit,
    /// Composing a new record
    New,
}

impl Mode {
    /// Edit and New share the form and its key bindings
    pub fn is_form(self) -> bool {
        matches!(self, Mode::Edit | Mode::New)
    }
}

/// Which form field has input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Content,
}

/// Confirmation shown after a successful submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Created,
    Updated,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Created => write!(f, "Todo created!"),
            Status::Updated => write!(f, "Todo updated!"),
        }
    }
}

/// Main application state: a cached snapshot of the store plus UI state.
///
/// `records` is only ever replaced wholesale from the store, never patched
/// locally, so an edit is visible only after it round-trips.
pub struct App {
    pub store: Box<dyn RecordStore>,
    pub records: Vec<Record>,
    pub mode: Mode,
    /// Index into `records`; meaningless while the list is empty
    pub cursor: usize,
    /// Record shown in the detail panel (index into `records`)
    pub selected: Option<usize>,
    pub title_input: TextInput,
    pub content_input: TextInput,
    pub status: Option<Status>,
    /// Last known terminal size; None until the first resize event
    pub viewport: Option<Size>,
    pub should_quit: bool,
}

impl App {
    /// Build the initial state (List mode, cursor on the first row) from the
    /// store's current contents.
    pub fn new(store: Box<dyn RecordStore>) -> Result<Self, StoreError> {
        let records = store.list_all()?;
        info!("loaded {} todos", records.len());
        Ok(App {
            store,
            records,
            mode: Mode::List,
            cursor: 0,
            selected: None,
            title_input: TextInput::new("Todo title", TITLE_MAX_CHARS),
            content_input: TextInput::new("Todo content", CONTENT_MAX_CHARS),
            status: None,
            viewport: None,
            should_quit: false,
        })
    }

    /// Re-read the snapshot from the store and re-validate indices against it
    pub fn refresh(&mut self) -> Result<(), StoreError> {
        self.records = self.store.list_all()?;
        self.cursor = self.cursor.min(self.records.len().saturating_sub(1));
        if self.selected.is_some_and(|s| s >= self.records.len()) {
            self.selected = None;
        }
        Ok(())
    }

    pub fn cursor_record(&self) -> Option<&Record> {
        self.records.get(self.cursor)
    }

    pub fn selected_record(&self) -> Option<&Record> {
        self.selected.and_then(|i| self.records.get(i))
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!("mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// The focused form field, if any
    pub fn focused_field(&self) -> Option<Field> {
        if self.title_input.is_focused() {
            Some(Field::Title)
        } else if self.content_input.is_focused() {
            Some(Field::Content)
        } else {
            None
        }
    }

    /// Give focus to exactly one field
    pub fn focus_field(&mut self, field: Field) {
        match field {
            Field::Title => {
                self.content_input.blur();
                self.title_input.focus();
            }
            Field::Content => {
                self.title_input.blur();
                self.content_input.focus();
            }
        }
    }

    pub fn blur_fields(&mut self) {
        self.title_input.blur();
        self.content_input.blur();
    }

    /// The input that currently receives editing keys
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        match self.focused_field()? {
            Field::Title => Some(&mut self.title_input),
            Field::Content => Some(&mut self.content_input),
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Some(Size::new(width, height));
    }
}

/// Run the TUI against `store` until the user quits or a store call fails.
pub fn run(
    store: Box<dyn RecordStore>,
    view: ViewConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(store)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app, &view);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!("fatal: {}", e);
    }
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    view: &ViewConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // crossterm sends no initial resize, so seed the viewport ourselves
    let size = terminal.size()?;
    input::handle_event(app, Event::Resize(size.width, size.height))?;

    loop {
        terminal.draw(|frame| render::render(frame, app, view))?;

        let ev = event::read()?;
        input::handle_event(app, ev)?;

        if app.should_quit {
            info!("quit requested");
            break;
        }
    }
    Ok(())
}
