use crate::classify::{self, Severity};
use crate::extract::{Event, Status};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const SECONDS_PER_DAY: i64 = 86_400;

/// An unmatched START held on its pid's stack until an END arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingStart {
    pub time: String,
    pub description: String,
    pub raw: String,
    pub sequence_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedInterval {
    pub pid: String,
    pub description: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_seconds: u64,
    pub raw_start: String,
    pub raw_end: String,
    pub severity: Severity,
}

/// An END with no open START for its pid at processing time. Never retried
/// against a later START.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrphanEnd {
    pub pid: String,
    pub description: String,
    pub end_time: String,
    pub raw: String,
}

/// A START still open once the whole document has been processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncompleteStart {
    pub pid: String,
    pub description: String,
    pub start_time: String,
    pub raw: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pairing {
    pub completed: Vec<CompletedInterval>,
    pub orphans: Vec<OrphanEnd>,
    pub incompletes: Vec<IncompleteStart>,
}

/// Seconds since midnight for an "HH:MM:SS" string. Lenient: a component
/// that fails to parse counts as 0, keeping the engine total.
pub fn seconds_of(time: &str) -> i64 {
    let mut parts = time.splitn(3, ':');
    let mut next = || {
        parts
            .next()
            .and_then(|p| p.parse::<i64>().ok())
            .unwrap_or(0)
    };
    let (h, m, s) = (next(), next(), next());
    h * 3600 + m * 60 + s
}

/// Match START/END events per pid with LIFO discipline.
///
/// The most recently opened START for a pid is the one its next END closes.
/// A negative elapsed duration is corrected by one midnight rollover.
/// Leftover starts are reported in first-seen pid order, most recent first
/// within each pid.
pub fn pair_events(events: &[Event]) -> Pairing {
    let mut stacks: HashMap<String, Vec<PendingStart>> = HashMap::new();
    let mut pid_order: Vec<String> = Vec::new();
    let mut out = Pairing::default();

    for (index, event) in events.iter().enumerate() {
        match event.status {
            Status::Start => {
                let stack = stacks.entry(event.pid.clone()).or_insert_with(|| {
                    pid_order.push(event.pid.clone());
                    Vec::new()
                });
                stack.push(PendingStart {
                    time: event.time.clone(),
                    description: event.description.clone(),
                    raw: event.raw.clone(),
                    sequence_index: index,
                });
            }
            Status::End => match stacks.get_mut(&event.pid).and_then(|s| s.pop()) {
                Some(start) => {
                    let mut duration = seconds_of(&event.time) - seconds_of(&start.time);
                    if duration < 0 {
                        // END landed past midnight; at most one rollover
                        duration += SECONDS_PER_DAY;
                    }
                    let duration = duration as u64;
                    let description = if start.description.is_empty() {
                        event.description.clone()
                    } else {
                        start.description
                    };
                    out.completed.push(CompletedInterval {
                        pid: event.pid.clone(),
                        description,
                        start_time: start.time,
                        end_time: event.time.clone(),
                        duration_seconds: duration,
                        raw_start: start.raw,
                        raw_end: event.raw.clone(),
                        severity: classify::severity_for(duration),
                    });
                }
                None => out.orphans.push(OrphanEnd {
                    pid: event.pid.clone(),
                    description: event.description.clone(),
                    end_time: event.time.clone(),
                    raw: event.raw.clone(),
                }),
            },
        }
    }

    for pid in pid_order {
        if let Some(stack) = stacks.get(&pid) {
            for pending in stack.iter().rev() {
                out.incompletes.push(IncompleteStart {
                    pid: pid.clone(),
                    description: pending.description.clone(),
                    start_time: pending.time.clone(),
                    raw: pending.raw.clone(),
                });
            }
        }
    }

    out
}
