use crate::extract::{Event, Status};
use once_cell::sync::Lazy;
use regex::Regex;

static RE_TIME: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{2}:\d{2}:\d{2}").unwrap());
static RE_PID: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\b").unwrap());
static RE_STATUS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(start|end)\b").unwrap());

/// Heuristic fallback for lines that are not well-formed CSV rows.
///
/// Independently locates the first HH:MM:SS substring, the first standalone
/// digit run, and the first START/END token (any case). All three must be
/// present or the line yields nothing. The pid search runs on the line with
/// the matched time removed, so the hour/minute digits of the time are never
/// mistaken for a pid.
pub fn parse_line(line: &str) -> Option<Event> {
    let time = RE_TIME.find(line)?.as_str().to_string();
    let without_time = line.replacen(&time, "", 1);
    let pid = RE_PID.find(&without_time)?.as_str().to_string();
    let status_text = RE_STATUS.find(line)?.as_str().to_string();
    let status = if status_text.eq_ignore_ascii_case("start") {
        Status::Start
    } else {
        Status::End
    };

    // Description: strip the matched substrings (time, then pid, then the
    // status token as originally cased), then trim leftover separators.
    let description = without_time
        .replacen(&pid, "", 1)
        .replacen(&status_text, "", 1)
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | ':' | '|' | ','))
        .to_string();

    Some(Event {
        time,
        pid,
        status,
        description,
        raw: line.to_string(),
    })
}
