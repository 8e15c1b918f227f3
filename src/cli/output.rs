use chrono::DateTime;
use serde::Serialize;

use crate::model::Record;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct RecordJson {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub completed: bool,
    /// RFC 3339, UTC
    pub created_at: String,
}

pub fn record_to_json(record: &Record) -> RecordJson {
    let created_at = DateTime::from_timestamp(record.created_at, 0)
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| record.created_at.to_string());
    RecordJson {
        id: record.id,
        title: record.title.clone(),
        content: record.content.clone(),
        completed: record.completed,
        created_at,
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a record as a one-line summary: `id [x] title`
pub fn format_record_line(record: &Record) -> String {
    format!("{} {} {}", record.id, record.checkbox(), record.title)
}

/// Format the full record, one field per line
pub fn format_record_detail(record: &Record) -> Vec<String> {
    let mut lines = vec![
        format_record_line(record),
        format!("  status:  {}", record.status_label()),
        format!("  created: {}", record.created_local()),
    ];
    if !record.content.is_empty() {
        lines.push(String::new());
        lines.extend(record.content.lines().map(|l| format!("  {}", l)));
    }
    lines
}
