use crate::extract::{Event, Status};
use itertools::Itertools;

/// Decide whether a tokenized first row is a column header.
///
/// All three keyword classes must be present somewhere in the joined,
/// lowercased row: a time class, a pid class, and a status class. One miss
/// means the row is data.
pub fn is_header(fields: &[String]) -> bool {
    let joined = fields.iter().join(" ").to_lowercase();
    let has_time = joined.contains("time") || joined.contains("timestamp");
    let has_pid = joined.contains("pid");
    let has_status =
        joined.contains("status") || joined.contains("start") || joined.contains("end");
    has_time && has_pid && has_status
}

/// Header-name to semantic-role resolution for a CSV document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub time: Option<usize>,
    pub pid: Option<usize>,
    pub status: Option<usize>,
    pub description: Option<usize>,
}

fn find_col(cols: &[String], needles: &[&str]) -> Option<usize> {
    cols.iter()
        .position(|c| needles.iter().any(|n| c.contains(n)))
}

impl ColumnMap {
    pub fn resolve(header: &[String]) -> ColumnMap {
        let cols: Vec<String> = header.iter().map(|c| c.to_lowercase()).collect();
        ColumnMap {
            time: find_col(&cols, &["time"]).or_else(|| find_col(&cols, &["timestamp"])),
            pid: find_col(&cols, &["pid"]),
            status: find_col(&cols, &["status", "action", "state"])
                .or_else(|| find_col(&cols, &["start", "end"])),
            description: find_col(&cols, &["desc", "description", "message", "job"]),
        }
    }

    /// Map one data row into an Event, or None when the row cannot be
    /// column-mapped (missing role, short row, or a status value that is not
    /// START/END). None means the caller should fall back to the flexible
    /// line parser on the rejoined row.
    pub fn map_row(&self, fields: &[String], raw: &str) -> Option<Event> {
        let time = fields.get(self.time?)?;
        let pid = fields.get(self.pid?)?;
        let status_value = fields.get(self.status?)?;
        let status = if status_value.eq_ignore_ascii_case("start") {
            Status::Start
        } else if status_value.eq_ignore_ascii_case("end") {
            Status::End
        } else {
            return None;
        };
        let description = match self.description.and_then(|i| fields.get(i)) {
            Some(d) => d.clone(),
            // no description column: keep the whole row as context
            None => fields.iter().join(" "),
        };
        Some(Event {
            time: time.clone(),
            pid: pid.clone(),
            status,
            description,
            raw: raw.to_string(),
        })
    }
}
