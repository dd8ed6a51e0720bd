use crate::extract::{self, Event};
use crate::pairing::{self, CompletedInterval, IncompleteStart, OrphanEnd, Pairing};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub completed: Vec<CompletedInterval>,
    pub orphans: Vec<OrphanEnd>,
    pub incompletes: Vec<IncompleteStart>,
    pub entries: Vec<Event>,
}

/// Analyze one log document. Pure: the report is a function of the text
/// alone, and no state survives the call.
///
/// Completed intervals are sorted by start time; the sort is stable, so
/// equal start times keep document order. Zero-padded HH:MM:SS makes the
/// lexicographic order chronological within one nominal day — midnight-
/// wrapped intervals sort by their nominal start, which is the accepted
/// behavior, not a bug to fix here.
pub fn analyze(text: &str) -> Report {
    let entries: Vec<Event> = extract::extract_events(text);
    let Pairing {
        mut completed,
        orphans,
        incompletes,
    } = pairing::pair_events(&entries);
    completed.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    Report {
        completed,
        orphans,
        incompletes,
        entries,
    }
}
