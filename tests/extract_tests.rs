use logspan::extract::{self, Status};

#[test]
fn header_branch_maps_rows_by_column() {
    let text = "time,pid,status,description\n\
                12:00:00,46578,START,Job A processing\n\
                12:04:00,46578,END,Job A finished\n";
    let events = extract::extract_events(text);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].pid, "46578");
    assert_eq!(events[0].status, Status::Start);
    assert_eq!(events[0].description, "Job A processing");
    assert_eq!(events[1].status, Status::End);
    assert_eq!(events[0].raw, "12:00:00,46578,START,Job A processing");
}

#[test]
fn header_detection_skips_leading_blank_lines() {
    let text = "\n\ntime,pid,status\n12:00:00,1,START\n";
    let events = extract::extract_events(text);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].pid, "1");
}

#[test]
fn header_branch_rescues_malformed_row_via_flexible_parser() {
    let text = "time,pid,status,description\n\
                12:00:00,7,START,ok row\n\
                oops 13:00:00 777 END cleanup\n";
    let events = extract::extract_events(text);
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].pid, "777");
    assert_eq!(events[1].status, Status::End);
}

#[test]
fn header_branch_skips_blank_rows_and_drops_unparseable_ones() {
    let text = "time,pid,status\n\n12:00:00,5,START\nnothing useful here\n";
    let events = extract::extract_events(text);
    assert_eq!(events.len(), 1);
}

#[test]
fn no_header_branch_parses_freeform_lines() {
    let text = "12:30:00 55555 START AnotherJob\n12:38:00 55555 END AnotherJob\n";
    let events = extract::extract_events(text);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].description, "AnotherJob");
}

#[test]
fn no_header_branch_skips_comments_and_blanks() {
    let text = "# generated by ops exporter\n\n  \n12:00:00 9 START warmup\n";
    let events = extract::extract_events(text);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].pid, "9");
}

#[test]
fn no_header_csv_lines_are_rejoined_before_flexible_parse() {
    // quoted field keeps its comma through tokenize + rejoin
    let text = "12:00:00,88,START,\"Deploy, phase 1\"\n";
    let events = extract::extract_events(text);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].pid, "88");
    assert_eq!(events[0].description, "Deploy, phase 1");
}

#[test]
fn unparseable_lines_are_omitted_silently() {
    let text = "completely freeform\nno events at all\n";
    assert!(extract::extract_events(text).is_empty());
}

#[test]
fn first_data_row_is_not_mistaken_for_header() {
    // digit rows carry none of the header keywords
    let text = "12:00:00,3,START,work\n12:01:00,3,END,work\n";
    let events = extract::extract_events(text);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].pid, "3");
}
