use crate::columns::{self, ColumnMap};
use crate::flexible;
use crate::rows::{self, Row};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Start,
    End,
}

/// One lifecycle event recovered from the input. `time`, `pid`, and `status`
/// are always present; `description` may be empty; `raw` keeps the line (or
/// rejoined row) the event was extracted from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub time: String,
    pub pid: String,
    pub status: Status,
    pub description: String,
    pub raw: String,
}

/// Parse the whole document into events, in document order.
///
/// Two mutually exclusive branches: if the first non-blank row looks like a
/// column header, every subsequent row goes through the column mapper with
/// the flexible parser as a per-row rescue; otherwise every line goes to the
/// flexible parser directly (rejoined with commas first when it tokenizes to
/// more than one field). Lines no strategy can parse are dropped silently.
pub fn extract_events(text: &str) -> Vec<Event> {
    let lines: Vec<&str> = text.lines().collect();
    for (idx, line) in lines.iter().enumerate() {
        match rows::tokenize(line) {
            Row::Blank => continue,
            Row::Fields(first) => {
                if columns::is_header(&first) {
                    return extract_with_header(&first, &lines[idx + 1..]);
                }
                break;
            }
        }
    }
    extract_freeform(&lines)
}

fn extract_with_header(header: &[String], data_lines: &[&str]) -> Vec<Event> {
    let map = ColumnMap::resolve(header);
    let mut events = Vec::new();
    for line in data_lines {
        let fields = match rows::tokenize(line) {
            Row::Blank => continue,
            Row::Fields(f) => f,
        };
        if let Some(event) = map.map_row(&fields, line) {
            events.push(event);
        } else {
            // malformed row in an otherwise well-headed CSV: try to rescue it
            let rejoined = fields.iter().join(",");
            if let Some(event) = flexible::parse_line(&rejoined) {
                events.push(event);
            }
        }
    }
    events
}

fn extract_freeform(lines: &[&str]) -> Vec<Event> {
    let mut events = Vec::new();
    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let candidate = match rows::tokenize(line) {
            Row::Fields(fields) if fields.len() > 1 => fields.iter().join(","),
            _ => (*line).to_string(),
        };
        if let Some(event) = flexible::parse_line(&candidate) {
            events.push(event);
        }
    }
    events
}
