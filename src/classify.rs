use serde::{Deserialize, Serialize};
use std::fmt;

/// Exclusive thresholds: an interval lasting exactly the threshold does not
/// upgrade.
pub const WARNING_THRESHOLD_SECS: u64 = 300;
pub const ERROR_THRESHOLD_SECS: u64 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Ok,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn severity_for(duration_seconds: u64) -> Severity {
    if duration_seconds > ERROR_THRESHOLD_SECS {
        Severity::Error
    } else if duration_seconds > WARNING_THRESHOLD_SECS {
        Severity::Warning
    } else {
        Severity::Ok
    }
}
