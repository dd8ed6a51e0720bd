use logspan::classify::{severity_for, Severity};

#[test]
fn short_durations_are_ok() {
    assert_eq!(severity_for(0), Severity::Ok);
    assert_eq!(severity_for(299), Severity::Ok);
}

#[test]
fn thresholds_are_exclusive() {
    assert_eq!(severity_for(300), Severity::Ok);
    assert_eq!(severity_for(301), Severity::Warning);
    assert_eq!(severity_for(600), Severity::Warning);
    assert_eq!(severity_for(601), Severity::Error);
}

#[test]
fn long_durations_are_errors() {
    assert_eq!(severity_for(86_400), Severity::Error);
}

#[test]
fn severity_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&Severity::Ok).unwrap(), "\"OK\"");
    assert_eq!(
        serde_json::to_string(&Severity::Warning).unwrap(),
        "\"WARNING\""
    );
    assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"ERROR\"");
}

#[test]
fn severity_displays_uppercase() {
    assert_eq!(Severity::Warning.to_string(), "WARNING");
}
