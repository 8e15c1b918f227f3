use chrono::{DateTime, Local};

/// Maximum number of characters accepted in a title field
pub const TITLE_MAX_CHARS: usize = 50;
/// Maximum number of characters accepted in a content field
pub const CONTENT_MAX_CHARS: usize = 200;

/// A single todo as persisted by the record store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Store-assigned identifier, unique and immutable
    pub id: i64,
    /// Non-empty title text
    pub title: String,
    /// Free text, may be empty
    pub content: String,
    pub completed: bool,
    /// Unix timestamp (seconds), set once on creation
    pub created_at: i64,
}

impl Record {
    /// Human label for the completion flag
    pub fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Active" }
    }

    /// The checkbox marker shown in lists (`[x]` / `[ ]`)
    pub fn checkbox(&self) -> &'static str {
        if self.completed { "[x]" } else { "[ ]" }
    }

    /// Creation time as local wall-clock text, `%Y-%m-%d %H:%M:%S`
    pub fn created_local(&self) -> String {
        match DateTime::from_timestamp(self.created_at, 0) {
            Some(utc) => utc
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            None => format!("@{}", self.created_at),
        }
    }

    /// Payload for writing this record back with its current field values
    pub fn to_fields(&self) -> RecordFields {
        RecordFields {
            title: self.title.clone(),
            content: self.content.clone(),
            completed: self.completed,
        }
    }
}

/// The mutable fields of a record, as passed to create/update
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordFields {
    pub title: String,
    pub content: String,
    pub completed: bool,
}

impl RecordFields {
    pub fn new(title: impl Into<String>, content: impl Into<String>, completed: bool) -> Self {
        RecordFields {
            title: title.into(),
            content: content.into(),
            completed,
        }
    }

    /// Submission requires a non-empty title; whitespace counts as text
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
}
